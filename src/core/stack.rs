//! Docker Compose lifecycle: up, down, cleanup.

use serde::Deserialize;
use tracing::info;

use crate::core::domain::AdminKey;
use crate::core::health;
use crate::core::orchestrator::Orchestrator;
use crate::core::prereq::{self, Requirements};
use crate::core::runner::run_checked;
use crate::error::{CommandError, PreconditionError, Result};

/// Summary of a successful `up`.
#[derive(Debug)]
pub struct UpReport {
    /// Health probes made, including the successful one.
    pub attempts: u32,
    /// The backend was already running before `up`.
    pub already_running: bool,
    pub key: AdminKey,
}

/// What `cleanup` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupOutcome {
    Removed,
    Cancelled,
}

/// One row of `docker compose ps --format json`.
#[derive(Debug, Deserialize)]
struct PsEntry {
    #[serde(rename = "Service")]
    service: String,
    #[serde(rename = "State", default)]
    state: String,
}

impl Orchestrator<'_> {
    /// Build and start the stack, wait for the backend, mint an admin key
    /// and start the deploy sidecar with it.
    ///
    /// Running `up` on a running stack converges: compose reconciles the
    /// services, the poll passes at once and a fresh key is deployed.
    ///
    /// # Errors
    ///
    /// Fails before touching the container engine when the project is not
    /// scaffolded. Afterwards fails on missing tools, any compose command
    /// exiting non-zero, a health timeout or cancellation, or key
    /// generation failure.
    pub fn up(&self) -> Result<UpReport> {
        let descriptor = self.settings.descriptor_path();
        if !descriptor.exists() {
            return Err(PreconditionError::NotScaffolded { descriptor }.into());
        }

        prereq::ensure(self.runner, Requirements::DOCKER)?;

        let compose = &self.settings.compose;
        let already_running = self.is_service_running(&compose.backend)?;
        if already_running {
            info!(service = %compose.backend, "backend already running, converging");
        }

        info!(services = ?compose.services, "building and starting services");
        let up = self
            .compose(["up", "-d", "--build"])
            .args(compose.services.iter().cloned());
        run_checked(self.runner, &up)?;

        let attempts = health::wait_until_healthy(
            self.probe,
            &self.settings.health_url(),
            self.settings.poll_policy(),
            &self.cancel,
        )?;

        let report = self.rotate_admin_key()?;

        info!(service = %compose.deploy, "starting deploy service");
        let deploy = self
            .compose(["up", "-d", compose.deploy.as_str()])
            .env(self.settings.admin_key.env_var.as_str(), report.key.expose());
        run_checked(self.runner, &deploy)?;

        Ok(UpReport {
            attempts,
            already_running,
            key: report.key,
        })
    }

    /// Stop the stack, keeping volumes.
    pub fn down(&self) -> Result<()> {
        prereq::ensure(self.runner, Requirements::DOCKER)?;

        info!("stopping services");
        run_checked(self.runner, &self.compose(["down"]))?;
        Ok(())
    }

    /// Stop the stack and delete its volumes after confirmation.
    pub fn cleanup(&self) -> Result<CleanupOutcome> {
        prereq::ensure(self.runner, Requirements::DOCKER)?;

        let question = "Remove all containers and volumes? Backend data will be lost.";
        if !self.confirm.confirm(question)? {
            info!("cancelled");
            return Ok(CleanupOutcome::Cancelled);
        }

        info!("removing containers and volumes");
        run_checked(
            self.runner,
            &self.compose(["down", "--volumes", "--remove-orphans"]),
        )?;
        Ok(CleanupOutcome::Removed)
    }

    /// Whether compose reports `service` in the running state.
    pub fn is_service_running(&self, service: &str) -> Result<bool> {
        let request = self.compose(["ps", "--format", "json"]).capture(true);
        let output = run_checked(self.runner, &request)?;
        let running = running_services(&output.stdout).map_err(|source| {
            CommandError::UnexpectedOutput {
                command: request.command_line(),
                source,
            }
        })?;
        Ok(running.iter().any(|s| s == service))
    }
}

/// Names of running services in `docker compose ps --format json` output.
///
/// Compose releases disagree on the shape: older ones print one JSON array,
/// newer ones one object per line.
fn running_services(stdout: &str) -> std::result::Result<Vec<String>, serde_json::Error> {
    let trimmed = stdout.trim();
    let entries: Vec<PsEntry> = if trimmed.is_empty() {
        Vec::new()
    } else if trimmed.starts_with('[') {
        serde_json::from_str(trimmed)?
    } else {
        trimmed
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(serde_json::from_str)
            .collect::<std::result::Result<_, _>>()?
    };

    Ok(entries
        .into_iter()
        .filter(|e| e.state.eq_ignore_ascii_case("running"))
        .map(|e| e.service)
        .collect())
}
