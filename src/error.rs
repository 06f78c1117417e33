//! Error types for devstack.
//!
//! Every fallible operation returns [`Result`]. The top-level [`Error`] wraps
//! the narrower enums below so handlers can match on the failure class.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Usage(String),

    #[error("missing prerequisites: {}", .0.join(", "))]
    MissingTools(Vec<String>),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error(transparent)]
    Health(#[from] HealthError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("admin key generation returned nothing: the backend is not fully ready yet")]
    EmptyAdminKey,

    #[error("template not found: {}", .0.display())]
    MissingTemplate(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl Error {
    /// Remedial command to suggest alongside the error, if any.
    pub fn hint(&self) -> Option<String> {
        match self {
            Error::Precondition(e) => Some(e.hint()),
            Error::Usage(_) => Some("run: devstack --help".to_string()),
            Error::MissingTools(_) => Some("install the missing tools and retry".to_string()),
            Error::EmptyAdminKey => Some("wait for the backend, then run: devstack --generate-admin-key".to_string()),
            Error::Health(HealthError::Timeout { .. }) => {
                Some("check `docker compose logs backend`, or raise --health-timeout".to_string())
            }
            Error::Config(ConfigError::Parse { path, .. }) => {
                Some(format!("fix or remove {}", path.display()))
            }
            _ => None,
        }
    }
}

/// An external process could not be run or exited unsuccessfully.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed ({})", exit_label(.code))]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("could not parse output of `{command}`: {source}")]
    UnexpectedOutput {
        command: String,
        #[source]
        source: serde_json::Error,
    },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// A handler was invoked before the state it depends on exists.
#[derive(Error, Debug)]
pub enum PreconditionError {
    #[error("project is not scaffolded: {} not found", .descriptor.display())]
    NotScaffolded { descriptor: PathBuf },

    #[error("backend service `{service}` is not running")]
    BackendNotRunning { service: String },
}

impl PreconditionError {
    /// The command that establishes the missing precondition.
    pub fn hint(&self) -> String {
        match self {
            PreconditionError::NotScaffolded { .. } => "run: devstack --init client".to_string(),
            PreconditionError::BackendNotRunning { .. } => {
                "run: devstack --dev docker up".to_string()
            }
        }
    }
}

/// The health poll gave up.
#[derive(Error, Debug)]
pub enum HealthError {
    #[error("{url} not healthy after {attempts} attempts ({elapsed:?})")]
    Timeout {
        url: String,
        attempts: u32,
        elapsed: Duration,
    },

    #[error("health check cancelled after {attempts} attempts")]
    Cancelled { attempts: u32 },

    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Errors loading `devstack.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
