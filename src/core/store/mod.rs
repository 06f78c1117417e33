//! File state storage.
//!
//! The admin key file and the client env file are the only state devstack
//! owns. Both go through the [`Store`] trait so handlers can run against the
//! real filesystem or an in-memory backend.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `Store` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use std::path::Path;

use crate::error::Result;

mod env;
mod fs;
mod memory;

pub use env::EnvStore;
pub use fs::Filesystem;
pub use memory::Memory;

/// Who may read a written file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Default permissions for new files (umask applies).
    Shared,
    /// Owner read/write only (0600 on Unix).
    OwnerOnly,
}

/// File storage trait.
pub trait Store {
    /// Read a whole file as UTF-8.
    ///
    /// # Returns
    ///
    /// `None` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an I/O error for anything other than a missing file.
    fn read(&self, path: &Path) -> Result<Option<String>>;

    /// Replace a file's contents, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written or its
    /// permissions cannot be applied.
    fn write(&self, path: &Path, contents: &str, access: Access) -> Result<()>;

    /// Check whether a file exists.
    fn exists(&self, path: &Path) -> bool;
}
