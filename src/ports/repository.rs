//! Repository port for Q-table persistence.
//!
//! This module defines the trait boundary between the learning core and the
//! storage that carries the table from one session to the next.

use std::path::Path;

use crate::{Result, q_learning::SavedQTable};

/// Port for persisting and loading the learned table.
///
/// # Examples
///
/// ```no_run
/// use brainy::ports::QTableRepository;
/// use brainy::q_learning::SavedQTable;
/// use std::path::Path;
///
/// fn checkpoint<R: QTableRepository>(
///     repo: &R,
///     saved: &SavedQTable,
///     path: &Path,
/// ) -> brainy::Result<()> {
///     repo.save(saved, path)
/// }
/// ```
pub trait QTableRepository {
    /// Overwrite whatever is stored at `path` with `saved`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the location cannot be
    /// written. Previously stored contents must survive a failed save.
    fn save(&self, saved: &SavedQTable, path: &Path) -> Result<()>;

    /// Load the table stored at `path`.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet, including an
    /// empty file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CorruptTable`] if something is stored but
    /// cannot be decoded, and [`crate::Error::UnsupportedVersion`] for a
    /// table written by an incompatible format version.
    fn load(&self, path: &Path) -> Result<Option<SavedQTable>>;
}
