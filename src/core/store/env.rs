//! Env file store.
//!
//! Read, upsert and write one env file through any [`Store`] backend.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Access, Store};
use crate::core::domain::EnvFile;
use crate::error::Result;

/// An env file at a fixed path in some store.
pub struct EnvStore<'a> {
    store: &'a dyn Store,
    path: PathBuf,
}

impl<'a> EnvStore<'a> {
    pub fn new(store: &'a dyn Store, path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.store.exists(&self.path)
    }

    /// Parse the file; a missing file reads as empty.
    pub fn read(&self) -> Result<EnvFile> {
        let contents = self.store.read(&self.path)?.unwrap_or_default();
        Ok(EnvFile::parse(&contents))
    }

    pub fn write(&self, env: &EnvFile) -> Result<()> {
        self.store
            .write(&self.path, &env.to_string(), Access::Shared)
    }

    /// Read, set `key` to `value`, write back.
    pub fn upsert(&self, key: &str, value: &str) -> Result<()> {
        let mut env = self.read()?;
        let existed = env.count(key) > 0;
        env.upsert(key, value);
        self.write(&env)?;
        debug!(path = %self.path.display(), key, replaced = existed, "env entry upserted");
        Ok(())
    }
}
