//! Test fixtures and constants.

/// Health URL used by settings built in tests.
pub const HEALTH_URL: &str = "http://127.0.0.1:3210/version";

/// Minimal project descriptor.
pub const SAMPLE_PACKAGE_JSON: &str = r#"{ "name": "client", "private": true }
"#;

/// Env template as shipped in `templates/`.
pub const SAMPLE_ENV_TEMPLATE: &str = "\
# Self-hosted backend
CONVEX_SELF_HOSTED_URL='http://127.0.0.1:3210'
CONVEX_SELF_HOSTED_ADMIN_KEY=''
NEXT_PUBLIC_CONVEX_URL='http://127.0.0.1:3210'
";

pub const SAMPLE_DOCKERFILE: &str = "FROM node:20-alpine\nWORKDIR /app\n";

/// `docker compose ps --format json` with the backend up (one object per line).
pub const PS_BACKEND_RUNNING: &str = r#"{"Name":"stack-backend-1","Service":"backend","State":"running"}
{"Name":"stack-dashboard-1","Service":"dashboard","State":"running"}
"#;

/// `docker compose ps --format json` with nothing running.
pub const PS_NOTHING: &str = "";

/// Key helper output, banner first.
pub const KEY_HELPER_OUTPUT: &str = "\
Admin key:
convex-self-hosted|01a2b3c4d5e6f7
";

/// The key in [`KEY_HELPER_OUTPUT`].
pub const HELPER_KEY: &str = "convex-self-hosted|01a2b3c4d5e6f7";
