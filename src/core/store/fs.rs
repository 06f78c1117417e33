//! Filesystem-backed storage.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tracing::debug;

use super::{Access, Store};
use crate::error::Result;

/// Storage on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct Filesystem;

impl Store for Filesystem {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, path: &Path, contents: &str, access: Access) -> Result<()> {
        debug!(path = %path.display(), ?access, "writing file");

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut options = fs::OpenOptions::new();
            options.create(true).write(true);
            if access == Access::OwnerOnly {
                options.mode(0o600);
            }
            let mut file = options.open(path)?;

            // The mode above only applies to newly created files. Tighten an
            // existing one before the old contents are replaced.
            if access == Access::OwnerOnly {
                file.set_permissions(fs::Permissions::from_mode(0o600))?;
            }
            file.set_len(0)?;
            file.write_all(contents.as_bytes())?;
            file.flush()?;
        }

        #[cfg(not(unix))]
        {
            let _ = access;
            let mut file = fs::File::create(path)?;
            file.write_all(contents.as_bytes())?;
            file.flush()?;
        }

        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
