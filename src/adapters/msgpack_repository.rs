//! MessagePack implementation of the Q-table repository.
//!
//! Saves go through a sibling temporary file that is synced and then renamed
//! over the target, so a crash mid-save leaves the previous table intact.

use std::{
    ffi::OsString,
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::{Result, error::Error, ports::QTableRepository, q_learning::SavedQTable};

/// MessagePack-based Q-table repository.
///
/// # Examples
///
/// ```no_run
/// use brainy::adapters::MsgPackRepository;
/// use brainy::ports::QTableRepository;
/// use brainy::q_learning::SavedQTable;
/// use std::path::Path;
///
/// let repo = MsgPackRepository;
/// repo.save(&SavedQTable::new(), Path::new("q_table.msgpack"))?;
///
/// let loaded = repo.load(Path::new("q_table.msgpack"))?;
/// assert!(loaded.is_some());
/// # Ok::<(), brainy::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("q_table"));
    name.push(".tmp");
    path.with_file_name(name)
}

impl QTableRepository for MsgPackRepository {
    fn save(&self, saved: &SavedQTable, path: &Path) -> Result<()> {
        let bytes = saved.to_bytes()?;
        let tmp = temp_path(path);

        let mut file = File::create(&tmp).map_err(|source| Error::Io {
            operation: format!("create file {tmp:?}"),
            source,
        })?;
        file.write_all(&bytes)
            .and_then(|_| file.sync_all())
            .map_err(|source| Error::Io {
                operation: format!("write file {tmp:?}"),
                source,
            })?;
        drop(file);

        fs::rename(&tmp, path).map_err(|source| {
            let _ = fs::remove_file(&tmp);
            Error::Io {
                operation: format!("replace {path:?}"),
                source,
            }
        })?;

        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Option<SavedQTable>> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(Error::Io {
                    operation: format!("open file {path:?}"),
                    source,
                });
            }
        };

        if bytes.is_empty() {
            return Ok(None);
        }

        match SavedQTable::from_bytes(&bytes) {
            Ok(saved) => Ok(Some(saved)),
            Err(Error::SerializationContext { message, .. }) => Err(Error::CorruptTable {
                path: path.to_path_buf(),
                message,
            }),
            Err(other) => Err(other),
        }
    }
}
