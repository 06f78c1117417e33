//! In-memory storage.
//!
//! Backs the same operations as [`Filesystem`](super::Filesystem) with a map,
//! for running handlers without touching disk.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{Access, Store};
use crate::error::Result;

/// A virtual file tree.
#[derive(Debug, Default)]
pub struct Memory {
    files: RefCell<BTreeMap<PathBuf, (String, Access)>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file.
    pub fn with_file(self, path: impl Into<PathBuf>, contents: &str) -> Self {
        self.files
            .borrow_mut()
            .insert(path.into(), (contents.to_string(), Access::Shared));
        self
    }

    /// Access mode of the last write to `path`.
    pub fn access(&self, path: &Path) -> Option<Access> {
        self.files.borrow().get(path).map(|(_, access)| *access)
    }

    /// Contents of `path`, if present.
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).map(|(contents, _)| contents.clone())
    }
}

impl Store for Memory {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        Ok(self.contents(path))
    }

    fn write(&self, path: &Path, contents: &str, access: Access) -> Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), (contents.to_string(), access));
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }
}
