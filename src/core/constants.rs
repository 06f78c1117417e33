//! Constants used throughout devstack.
//!
//! Centralizes file names and defaults. Everything here except the
//! settings file name can be overridden from `devstack.toml`.

/// Settings file name, looked up in the tool root.
pub const SETTINGS_FILE: &str = "devstack.toml";

/// Environment variable that overrides the log filter.
pub const LOG_ENV: &str = "DEVSTACK_LOG";

/// Client project directory relative to the tool root.
pub const PROJECT_DIR: &str = "client";

/// File whose presence marks the project as scaffolded.
pub const PROJECT_DESCRIPTOR: &str = "package.json";

/// Environment file inside the project.
pub const ENV_FILE: &str = ".env.local";

/// Backend configuration directory inside the project.
pub const SDK_DIR: &str = "convex";

/// Name of the environment assignment owned by devstack.
pub const ADMIN_KEY_VAR: &str = "CONVEX_SELF_HOSTED_ADMIN_KEY";

/// Admin key file relative to the tool root.
pub const ADMIN_KEY_FILE: &str = ".admin-key";

/// Template copied to the project's environment file.
pub const ENV_TEMPLATE: &str = "templates/env.local.example";

/// Template copied to the project's container build file.
pub const DOCKERFILE_TEMPLATE: &str = "templates/Dockerfile";

/// Services brought up before the health poll.
pub const STACK_SERVICES: &[&str] = &["backend", "dashboard", "client"];

/// Service that must be running for key generation.
pub const BACKEND_SERVICE: &str = "backend";

/// Push/deploy sidecar started once the admin key exists.
pub const DEPLOY_SERVICE: &str = "deploy";

/// Helper executed inside the backend container.
pub const KEY_HELPER: &[&str] = &["./generate_admin_key.sh"];

/// Backend port used when `PORT` is not set.
pub const DEFAULT_BACKEND_PORT: u16 = 3210;

/// Path of the backend health endpoint.
pub const HEALTH_PATH: &str = "/version";

/// Seconds between health probes.
pub const HEALTH_INTERVAL_SECS: u64 = 2;

/// Seconds before the health poll gives up. Zero waits forever.
pub const HEALTH_TIMEOUT_SECS: u64 = 300;

/// Variables handed through to every compose invocation.
pub const COMPOSE_PASSTHROUGH: &[&str] = &["PORT", "SITE_PROXY_PORT", "DASHBOARD_PORT", "POSTGRES_URL"];

/// Executables the scaffold handler needs.
pub const SCAFFOLD_TOOLS: &[&str] = &["node", "npm", "npx"];

/// Executables the container handlers need.
pub const DOCKER_TOOLS: &[&str] = &["docker"];
