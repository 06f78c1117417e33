//! Client project lifecycle: scaffold, reset, remove.

use std::fs;

use tracing::{info, warn};

use crate::core::orchestrator::Orchestrator;
use crate::core::prereq::{self, Requirements};
use crate::core::runner::{run_checked, ExecRequest};
use crate::error::{ConfigError, Error, Result};

/// What `scaffold` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    Created,
    /// The project descriptor already existed.
    Skipped,
}

/// What `remove` or `reset` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// Deleted (and, for reset, scaffolded again).
    Done,
    /// There was no project directory.
    Missing,
    /// The operator declined.
    Cancelled,
}

impl Orchestrator<'_> {
    /// Create the client project unless it already exists.
    ///
    /// Runs the generator, copies the templates, installs the SDK package
    /// and, when the SDK directory is absent, initializes it. Nothing is
    /// rolled back on failure; a rerun continues from what it can detect.
    ///
    /// # Errors
    ///
    /// Fails on missing tools, a missing template, or any command exiting
    /// non-zero.
    pub fn scaffold(&self) -> Result<ScaffoldOutcome> {
        let descriptor = self.settings.descriptor_path();
        if descriptor.exists() {
            info!(path = %descriptor.display(), "project already scaffolded, skipping");
            return Ok(ScaffoldOutcome::Skipped);
        }

        prereq::ensure(self.runner, Requirements::SCAFFOLD)?;

        let templates = self.settings.templates();
        if let Some((missing, _)) = templates.iter().find(|(src, _)| !src.is_file()) {
            return Err(Error::MissingTemplate(missing.clone()));
        }

        let root = self.settings.root();
        let project = self.settings.project_dir();

        info!(dir = %project.display(), "generating project");
        let generator = command(&self.settings.generator_command(), "scaffold.generator")?;
        run_checked(self.runner, &generator.cwd(root))?;

        for (src, dest) in &templates {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(src, dest)?;
            info!(from = %src.display(), to = %dest.display(), "copied template");
        }

        info!("installing backend sdk");
        let install = command(&self.settings.scaffold.install, "scaffold.install")?;
        run_checked(self.runner, &install.cwd(&project))?;

        let sdk_dir = self.settings.sdk_dir_path();
        if sdk_dir.exists() {
            info!(dir = %sdk_dir.display(), "backend sdk already initialized");
        } else {
            info!("initializing backend sdk");
            let init = command(&self.settings.scaffold.sdk_init, "scaffold.sdk_init")?;
            run_checked(self.runner, &init.cwd(&project))?;
        }

        info!(dir = %project.display(), "project scaffolded");
        Ok(ScaffoldOutcome::Created)
    }

    /// Delete the project after confirmation.
    pub fn remove(&self) -> Result<RemovalOutcome> {
        self.delete_project()
    }

    /// Delete the project after confirmation, then scaffold it again.
    ///
    /// Scaffold prerequisites are checked before anything is deleted.
    pub fn reset(&self) -> Result<RemovalOutcome> {
        if !self.settings.project_dir().exists() {
            return self.delete_project();
        }

        prereq::ensure(self.runner, Requirements::SCAFFOLD)?;

        let outcome = self.delete_project()?;
        if outcome == RemovalOutcome::Done {
            self.scaffold()?;
        }
        Ok(outcome)
    }

    fn delete_project(&self) -> Result<RemovalOutcome> {
        let dir = self.settings.project_dir();
        if !dir.exists() {
            warn!(dir = %dir.display(), "project directory does not exist, nothing to delete");
            return Ok(RemovalOutcome::Missing);
        }

        let question = format!("Delete {} and everything in it?", dir.display());
        if !self.confirm.confirm(&question)? {
            info!("cancelled");
            return Ok(RemovalOutcome::Cancelled);
        }

        fs::remove_dir_all(&dir)?;
        info!(dir = %dir.display(), "project deleted");
        Ok(RemovalOutcome::Done)
    }
}

fn command(argv: &[String], field: &'static str) -> Result<ExecRequest> {
    ExecRequest::from_argv(argv).ok_or_else(|| {
        ConfigError::Invalid {
            field,
            reason: "command cannot be empty".to_string(),
        }
        .into()
    })
}
