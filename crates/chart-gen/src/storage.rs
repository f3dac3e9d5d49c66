// File: crates/chart-gen/src/storage.rs
// Summary: Host-supplied lookup of the application's private writable directory.

use std::path::PathBuf;

use anyhow::Result;

/// Supplies the writable-storage root the host platform grants the
/// application. On a mobile shell this wraps the platform's files-dir
/// API; in tests it is a plain directory.
///
/// The host owns the directory and its lifecycle; the generator only
/// joins file names onto it.
pub trait StorageProvider {
    fn files_dir(&self) -> Result<PathBuf>;
}

/// Provider over a fixed directory, for demos and tests.
pub struct DirStorage {
    root: PathBuf,
}

impl DirStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl StorageProvider for DirStorage {
    fn files_dir(&self) -> Result<PathBuf> {
        Ok(self.root.clone())
    }
}
