//! Test support utilities for devstack integration tests.
//!
//! Provides an isolated tool root, CLI helpers and scripted fakes of the
//! orchestrator's collaborators.

#![allow(dead_code)]

pub mod assertions;
pub mod fakes;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fakes::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

use devstack::core::config::Settings;

/// Test environment with an isolated tool root.
///
/// No process-global state is mutated; child processes get the root via
/// `.current_dir()` so tests can run in parallel.
pub struct Test {
    pub dir: TempDir,
}

impl Test {
    /// An empty tool root.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// A tool root with both templates in place.
    pub fn with_templates() -> Self {
        let t = Self::new();
        t.write("templates/env.local.example", SAMPLE_ENV_TEMPLATE);
        t.write("templates/Dockerfile", SAMPLE_DOCKERFILE);
        t
    }

    /// A tool root whose client project is already scaffolded.
    pub fn scaffolded() -> Self {
        let t = Self::with_templates();
        t.write("client/package.json", SAMPLE_PACKAGE_JSON);
        t
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Write a file under the root, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(&path, contents).expect("failed to write file");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("failed to read file")
    }

    /// Default settings anchored at the root, with a fixed health URL.
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::new(self.root());
        settings.health.url = Some(HEALTH_URL.to_string());
        settings
    }

    /// A devstack command running in the root.
    ///
    /// Logging and color are pinned so output assertions are stable.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("devstack").expect("failed to find devstack binary");
        cmd.current_dir(self.root());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("DEVSTACK_LOG");
        cmd.env_remove("DEVSTACK_ROOT");
        cmd.env_remove("DEVSTACK_HEALTH_TIMEOUT");
        cmd
    }
}
