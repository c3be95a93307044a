//! In-memory Q-table repository for testing.
//!
//! Stores encoded tables in a shared map keyed by path, so tests exercise the
//! same encode/decode path as the file repository without touching disk.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{Result, error::Error, ports::QTableRepository, q_learning::SavedQTable};

/// In-memory repository for testing.
///
/// All clones share the same underlying storage.
///
/// # Examples
///
/// ```
/// use brainy::adapters::InMemoryRepository;
/// use brainy::ports::QTableRepository;
/// use brainy::q_learning::SavedQTable;
/// use std::path::Path;
///
/// let repo = InMemoryRepository::new();
/// repo.save(&SavedQTable::new(), Path::new("q_table"))?;
/// assert!(repo.contains(Path::new("q_table")));
/// # Ok::<(), brainy::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    fail_saves: bool,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose saves always fail, for exercising write-failure
    /// handling.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    fn storage(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        // A poisoned lock only means another test thread panicked mid-insert.
        self.storage
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get the number of tables currently stored.
    pub fn count(&self) -> usize {
        self.storage().len()
    }

    /// Check if a table exists at the given path.
    pub fn contains(&self, path: &Path) -> bool {
        self.storage().contains_key(&key(path))
    }

    /// Store raw bytes at `path`, bypassing encoding.
    pub fn insert_raw(&self, path: &Path, bytes: Vec<u8>) {
        self.storage().insert(key(path), bytes);
    }
}

fn key(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

impl QTableRepository for InMemoryRepository {
    fn save(&self, saved: &SavedQTable, path: &Path) -> Result<()> {
        if self.fail_saves {
            return Err(Error::Io {
                operation: format!("save {path:?}"),
                source: std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "in-memory repository configured to fail",
                ),
            });
        }
        let bytes = saved.to_bytes()?;
        self.storage().insert(key(path), bytes);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Option<SavedQTable>> {
        let bytes = match self.storage().get(&key(path)) {
            Some(bytes) if !bytes.is_empty() => bytes.clone(),
            _ => return Ok(None),
        };

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
