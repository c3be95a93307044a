//! Append-only brain log file.

use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{Result, error::Error, ports::EventSink};

/// Appends each event as one line to a file, flushing after every line so the
/// log survives an abrupt exit.
pub struct FileEventSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileEventSink {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| Error::Io {
                operation: format!("open brain log {path:?}"),
                source,
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventSink for FileEventSink {
    fn append(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}")
            .and_then(|_| self.writer.flush())
            .map_err(|source| Error::Io {
                operation: format!("append to brain log {:?}", self.path),
                source,
            })
    }
}
