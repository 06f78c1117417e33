//! Settings management.
//!
//! Built-in defaults, optionally overridden by `devstack.toml` in the tool
//! root. Every path the handlers touch is derived here.

use serde::Deserialize;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::core::constants;
use crate::core::health::PollPolicy;
use crate::error::{ConfigError, Result};

/// Placeholder in command templates replaced by the project directory.
const PROJECT_PLACEHOLDER: &str = "{project}";

/// Resolved settings for one tool root.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    #[serde(skip)]
    root: PathBuf,
    pub project: ProjectSettings,
    pub scaffold: ScaffoldSettings,
    pub compose: ComposeSettings,
    pub health: HealthSettings,
    pub admin_key: AdminKeySettings,
}

/// Layout of the client project.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectSettings {
    pub dir: String,
    pub descriptor: String,
    pub env_file: String,
    pub sdk_dir: String,
}

/// Commands and templates used to create the client project.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldSettings {
    /// Generator command, run from the tool root.
    pub generator: Vec<String>,
    /// Package install command, run inside the project.
    pub install: Vec<String>,
    /// One-shot SDK initialization, run inside the project.
    pub sdk_init: Vec<String>,
    pub env_template: String,
    pub dockerfile_template: String,
}

/// Docker Compose services and file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComposeSettings {
    pub file: Option<String>,
    pub services: Vec<String>,
    pub backend: String,
    pub deploy: String,
}

/// Health poll parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HealthSettings {
    /// Explicit URL; derived from `PORT` when absent.
    pub url: Option<String>,
    pub interval_secs: u64,
    /// Zero waits forever.
    pub timeout_secs: u64,
}

/// Where the admin key goes and how it is produced.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdminKeySettings {
    pub file: String,
    pub env_var: String,
    pub helper: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            dir: constants::PROJECT_DIR.to_string(),
            descriptor: constants::PROJECT_DESCRIPTOR.to_string(),
            env_file: constants::ENV_FILE.to_string(),
            sdk_dir: constants::SDK_DIR.to_string(),
        }
    }
}

impl Default for ScaffoldSettings {
    fn default() -> Self {
        Self {
            generator: strings(&[
                "npx",
                "create-next-app@latest",
                PROJECT_PLACEHOLDER,
                "--ts",
                "--tailwind",
                "--eslint",
                "--app",
                "--src-dir",
                "--import-alias",
                "@/*",
                "--use-npm",
                "--yes",
            ]),
            install: strings(&["npm", "install", "convex"]),
            sdk_init: strings(&["npx", "convex", "init"]),
            env_template: constants::ENV_TEMPLATE.to_string(),
            dockerfile_template: constants::DOCKERFILE_TEMPLATE.to_string(),
        }
    }
}

impl Default for ComposeSettings {
    fn default() -> Self {
        Self {
            file: None,
            services: strings(constants::STACK_SERVICES),
            backend: constants::BACKEND_SERVICE.to_string(),
            deploy: constants::DEPLOY_SERVICE.to_string(),
        }
    }
}

impl Default for HealthSettings {
    fn default() -> Self {
        Self {
            url: None,
            interval_secs: constants::HEALTH_INTERVAL_SECS,
            timeout_secs: constants::HEALTH_TIMEOUT_SECS,
        }
    }
}

impl Default for AdminKeySettings {
    fn default() -> Self {
        Self {
            file: constants::ADMIN_KEY_FILE.to_string(),
            env_var: constants::ADMIN_KEY_VAR.to_string(),
            helper: strings(constants::KEY_HELPER),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            project: ProjectSettings::default(),
            scaffold: ScaffoldSettings::default(),
            compose: ComposeSettings::default(),
            health: HealthSettings::default(),
            admin_key: AdminKeySettings::default(),
        }
    }
}

impl Settings {
    /// Built-in defaults anchored at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Load settings for `root`, applying `devstack.toml` when present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, does not parse, or
    /// fails validation.
    pub fn load(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let path = root.join(constants::SETTINGS_FILE);

        let mut settings = if path.exists() {
            debug!(path = %path.display(), "loading settings");
            let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
            Self::parse(&contents).map_err(|source| ConfigError::Parse { path, source })?
        } else {
            debug!("no settings file, using defaults");
            Self::default()
        };

        settings.root = root;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from TOML text. The root is left at `.`.
    pub fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Check values that would make handlers misbehave.
    ///
    /// The project directory must stay inside the root because reset and
    /// remove delete it recursively.
    pub fn validate(&self) -> Result<()> {
        let dir = Path::new(&self.project.dir);
        let contained = !self.project.dir.trim().is_empty()
            && dir
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !contained {
            return Err(ConfigError::Invalid {
                field: "project.dir",
                reason: format!("must be a relative path inside the root: {:?}", self.project.dir),
            }
            .into());
        }

        let commands = [
            ("scaffold.generator", &self.scaffold.generator),
            ("scaffold.install", &self.scaffold.install),
            ("scaffold.sdk_init", &self.scaffold.sdk_init),
            ("admin_key.helper", &self.admin_key.helper),
        ];
        for (field, command) in commands {
            if command.is_empty() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "command cannot be empty".to_string(),
                }
                .into());
            }
        }

        if self.admin_key.env_var.is_empty() || self.admin_key.env_var.contains('=') {
            return Err(ConfigError::Invalid {
                field: "admin_key.env_var",
                reason: format!("not a valid variable name: {:?}", self.admin_key.env_var),
            }
            .into());
        }

        if self.compose.backend.is_empty() {
            return Err(ConfigError::Invalid {
                field: "compose.backend",
                reason: "service name cannot be empty".to_string(),
            }
            .into());
        }

        if self.health.interval_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "health.interval_secs",
                reason: "must be at least 1 second".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Override the health timeout (seconds, zero waits forever).
    pub fn with_health_timeout(mut self, secs: u64) -> Self {
        self.health.timeout_secs = secs;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn project_dir(&self) -> PathBuf {
        self.root.join(&self.project.dir)
    }

    pub fn descriptor_path(&self) -> PathBuf {
        self.project_dir().join(&self.project.descriptor)
    }

    pub fn env_file_path(&self) -> PathBuf {
        self.project_dir().join(&self.project.env_file)
    }

    pub fn sdk_dir_path(&self) -> PathBuf {
        self.project_dir().join(&self.project.sdk_dir)
    }

    pub fn admin_key_path(&self) -> PathBuf {
        self.root.join(&self.admin_key.file)
    }

    /// Template sources paired with their destination inside the project.
    pub fn templates(&self) -> [(PathBuf, PathBuf); 2] {
        let project = self.project_dir();
        [
            (
                self.root.join(&self.scaffold.env_template),
                project.join(&self.project.env_file),
            ),
            (
                self.root.join(&self.scaffold.dockerfile_template),
                project.join("Dockerfile"),
            ),
        ]
    }

    /// Generator command with the project placeholder filled in.
    pub fn generator_command(&self) -> Vec<String> {
        self.scaffold
            .generator
            .iter()
            .map(|arg| arg.replace(PROJECT_PLACEHOLDER, &self.project.dir))
            .collect()
    }

    /// Health endpoint, honoring an explicit URL, then `PORT`.
    pub fn health_url(&self) -> String {
        match &self.health.url {
            Some(url) => url.clone(),
            None => default_health_url(std::env::var("PORT").ok().as_deref()),
        }
    }

    pub fn poll_policy(&self) -> PollPolicy {
        let timeout = match self.health.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        PollPolicy {
            interval: Duration::from_secs(self.health.interval_secs),
            timeout,
        }
    }
}

/// Health URL for a backend published on `port` (default when unset or
/// unparsable).
pub fn default_health_url(port: Option<&str>) -> String {
    let port = port
        .and_then(|p| p.trim().parse::<u16>().ok())
        .unwrap_or(constants::DEFAULT_BACKEND_PORT);
    format!("http://127.0.0.1:{}{}", port, constants::HEALTH_PATH)
}
