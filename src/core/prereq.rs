//! Prerequisite checks.
//!
//! Handlers verify their external tools up front and report every missing
//! one at once, before touching anything.

use tracing::debug;

use crate::core::constants;
use crate::core::runner::{CommandRunner, ExecRequest};
use crate::error::{Error, Result};

/// Tools a handler needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirements {
    pub programs: &'static [&'static str],
    /// Also require `docker compose`.
    pub compose: bool,
}

impl Requirements {
    /// Generator and package manager.
    pub const SCAFFOLD: Self = Self {
        programs: constants::SCAFFOLD_TOOLS,
        compose: false,
    };

    /// Container engine with compose.
    pub const DOCKER: Self = Self {
        programs: constants::DOCKER_TOOLS,
        compose: true,
    };
}

/// Names of every unmet requirement, in declaration order.
pub fn missing(runner: &dyn CommandRunner, requirements: Requirements) -> Vec<String> {
    let mut missing: Vec<String> = requirements
        .programs
        .iter()
        .filter(|program| !runner.has_program(program))
        .map(|program| program.to_string())
        .collect();

    // Without docker itself the compose probe can only fail again.
    if requirements.compose && !missing.iter().any(|m| m == "docker") {
        let probe = ExecRequest::new("docker")
            .args(["compose", "version"])
            .capture(true);
        let available = runner.run(&probe).map(|o| o.success()).unwrap_or(false);
        if !available {
            missing.push("docker compose".to_string());
        }
    }

    missing
}

/// Fail with every missing tool listed.
///
/// # Errors
///
/// Returns `Error::MissingTools` if anything is missing.
pub fn ensure(runner: &dyn CommandRunner, requirements: Requirements) -> Result<()> {
    let missing = missing(runner, requirements);
    if missing.is_empty() {
        debug!(?requirements, "prerequisites satisfied");
        Ok(())
    } else {
        Err(Error::MissingTools(missing))
    }
}
