//! The orchestrator.
//!
//! Bundles the settings with the injected collaborators (process runner,
//! file store, health probe, confirmation prompt). The handlers themselves
//! live in `scaffold`, `stack` and `admin_key` as `impl Orchestrator` blocks.

use tracing::debug;

use crate::core::config::Settings;
use crate::core::constants;
use crate::core::health::{CancelToken, HealthProbe};
use crate::core::prompt::Confirm;
use crate::core::runner::{CommandRunner, ExecRequest};
use crate::core::store::Store;

/// Runs devstack handlers against one tool root.
pub struct Orchestrator<'a> {
    pub(crate) settings: &'a Settings,
    pub(crate) runner: &'a dyn CommandRunner,
    pub(crate) store: &'a dyn Store,
    pub(crate) probe: &'a dyn HealthProbe,
    pub(crate) confirm: &'a dyn Confirm,
    pub(crate) cancel: CancelToken,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        settings: &'a Settings,
        runner: &'a dyn CommandRunner,
        store: &'a dyn Store,
        probe: &'a dyn HealthProbe,
        confirm: &'a dyn Confirm,
    ) -> Self {
        Self {
            settings,
            runner,
            store,
            probe,
            confirm,
            cancel: CancelToken::new(),
        }
    }

    /// Use `cancel` to stop the health poll from elsewhere.
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn settings(&self) -> &Settings {
        self.settings
    }

    /// `docker compose [-f FILE] ARGS...`, run from the root.
    ///
    /// Port and database overrides set in our environment are forwarded
    /// explicitly so they show up in debug logs.
    pub(crate) fn compose<I, S>(&self, args: I) -> ExecRequest
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut request = ExecRequest::new("docker").arg("compose");
        if let Some(file) = &self.settings.compose.file {
            request = request.args(["-f", file.as_str()]);
        }
        request = request.args(args).cwd(self.settings.root());

        for (key, value) in compose_overrides(|k| std::env::var(k).ok()) {
            debug!(%key, "forwarding compose override");
            request = request.env(key, value);
        }
        request
    }
}

/// Pass-through variables that are set and non-empty.
pub(crate) fn compose_overrides(lookup: impl Fn(&str) -> Option<String>) -> Vec<(String, String)> {
    constants::COMPOSE_PASSTHROUGH
        .iter()
        .filter_map(|key| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .map(|v| (key.to_string(), v))
        })
        .collect()
}
