//! Admin key generation.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::core::domain::AdminKey;
use crate::core::orchestrator::Orchestrator;
use crate::core::prereq::{self, Requirements};
use crate::core::runner::run_checked;
use crate::core::store::{Access, EnvStore};
use crate::error::{Error, PreconditionError, Result};

/// A freshly generated key and where it was written.
#[derive(Debug)]
pub struct KeyReport {
    pub key: AdminKey,
    pub key_file: PathBuf,
    /// Set when the client env file existed and was updated.
    pub env_file: Option<PathBuf>,
}

impl Orchestrator<'_> {
    /// Generate a new admin key from the running backend.
    ///
    /// # Errors
    ///
    /// Fails when docker compose is missing, the backend is not running,
    /// the helper fails or prints nothing, or a file cannot be written.
    pub fn generate_admin_key(&self) -> Result<KeyReport> {
        prereq::ensure(self.runner, Requirements::DOCKER)?;
        self.rotate_admin_key()
    }

    /// Run the backend's key helper and persist the result.
    ///
    /// Assumes prerequisites were already checked.
    pub(crate) fn rotate_admin_key(&self) -> Result<KeyReport> {
        let backend = &self.settings.compose.backend;
        if !self.is_service_running(backend)? {
            return Err(PreconditionError::BackendNotRunning {
                service: backend.clone(),
            }
            .into());
        }

        info!(service = %backend, "generating admin key");
        let exec = self
            .compose(["exec", "-T", backend.as_str()])
            .args(self.settings.admin_key.helper.iter().cloned())
            .capture(true);
        let output = run_checked(self.runner, &exec)?;
        let key = AdminKey::from_helper_output(&output.stdout).ok_or(Error::EmptyAdminKey)?;

        let key_file = self.settings.admin_key_path();
        self.store
            .write(&key_file, &format!("{}\n", key.expose()), Access::OwnerOnly)?;
        debug!(path = %key_file.display(), "admin key written");

        let env = EnvStore::new(self.store, self.settings.env_file_path());
        let env_file = if env.exists() {
            env.upsert(&self.settings.admin_key.env_var, key.expose())?;
            info!(path = %env.path().display(), "env file updated");
            Some(env.path().to_path_buf())
        } else {
            debug!(path = %env.path().display(), "no env file, skipping");
            None
        };

        Ok(KeyReport {
            key,
            key_file,
            env_file,
        })
    }
}
