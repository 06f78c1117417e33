//! Command-line interface.
//!
//! The surface is flag-shaped (`--init client`, `--dev docker up`) rather
//! than subcommands. Exactly one action flag may be given.

pub mod admin_key;
pub mod client;
pub mod completions;
pub mod docker;
pub mod output;
pub mod prompt;

use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};

use crate::core::config::Settings;
use crate::core::health::HttpProbe;
use crate::core::prompt::{AssumeYes, Confirm};
use crate::core::runner::System;
use crate::core::store::Filesystem;
use crate::core::Orchestrator;
use crate::error::{Error, Result};

/// devstack - local orchestrator for a self-hosted Convex backend and a Next.js client.
#[derive(Parser, Debug)]
#[command(
    name = "devstack",
    about = "Local orchestrator for a self-hosted Convex backend and a Next.js client",
    version,
    group(
        ArgGroup::new("action")
            .args(["init", "reset", "remove", "dev", "generate_admin_key", "completions"])
            .multiple(false)
    ),
    after_help = "Examples:\n  devstack --init client\n  devstack --dev docker up\n  devstack --generate-admin-key"
)]
pub struct Cli {
    /// Scaffold the client project (skipped if it exists)
    #[arg(long, value_enum, value_name = "TARGET")]
    pub init: Option<Target>,

    /// Delete the client project and scaffold it again
    #[arg(long, value_enum, value_name = "TARGET")]
    pub reset: Option<Target>,

    /// Delete the client project
    #[arg(long, value_enum, value_name = "TARGET")]
    pub remove: Option<Target>,

    /// Container lifecycle: `docker up`, `docker down` or `docker cleanup`
    #[arg(long, num_args = 2, value_names = ["ENGINE", "ACTION"])]
    pub dev: Option<Vec<String>>,

    /// Generate a new admin key from the running backend
    #[arg(long)]
    pub generate_admin_key: bool,

    /// Print shell completions
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Answer yes to confirmation prompts
    #[arg(short, long)]
    pub yes: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory holding the compose file, templates and client project
    #[arg(long, env = "DEVSTACK_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Seconds to wait for the backend to become healthy (0 waits forever)
    #[arg(long, env = "DEVSTACK_HEALTH_TIMEOUT", value_name = "SECS")]
    pub health_timeout: Option<u64>,
}

/// Project targets.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Client,
}

/// Supported shells for completions.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Container lifecycle transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DevAction {
    Up,
    Down,
    Cleanup,
}

/// The one thing a run does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Init(Target),
    Reset(Target),
    Remove(Target),
    Dev(DevAction),
    GenerateAdminKey,
    Completions(Shell),
}

impl Cli {
    /// The requested action; `None` when no action flag was given.
    ///
    /// # Errors
    ///
    /// Returns `Error::Usage` for an unknown engine or lifecycle action.
    pub fn action(&self) -> Result<Option<Action>> {
        let action = if let Some(target) = self.init {
            Action::Init(target)
        } else if let Some(target) = self.reset {
            Action::Reset(target)
        } else if let Some(target) = self.remove {
            Action::Remove(target)
        } else if let Some(args) = &self.dev {
            Action::Dev(parse_dev(args)?)
        } else if self.generate_admin_key {
            Action::GenerateAdminKey
        } else if let Some(shell) = self.completions {
            Action::Completions(shell)
        } else {
            return Ok(None);
        };
        Ok(Some(action))
    }

    /// Settings for this run: defaults, then `devstack.toml`, then flags.
    pub fn settings(&self) -> Result<Settings> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir()?,
        };
        let settings = Settings::load(root)?;
        Ok(match self.health_timeout {
            Some(secs) => settings.with_health_timeout(secs),
            None => settings,
        })
    }
}

fn parse_dev(args: &[String]) -> Result<DevAction> {
    match args {
        [engine, action] if engine == "docker" => match action.as_str() {
            "up" => Ok(DevAction::Up),
            "down" => Ok(DevAction::Down),
            "cleanup" => Ok(DevAction::Cleanup),
            other => Err(Error::Usage(format!(
                "unknown docker action '{}' (expected up, down or cleanup)",
                other
            ))),
        },
        [engine, _] => Err(Error::Usage(format!(
            "unsupported engine '{}' (expected docker)",
            engine
        ))),
        _ => Err(Error::Usage("--dev takes an engine and an action".to_string())),
    }
}

/// Execute an action against the real system.
pub fn execute(cli: &Cli, action: Action) -> Result<()> {
    if let Action::Completions(shell) = action {
        return completions::execute(shell);
    }

    let settings = cli.settings()?;
    let runner = System;
    let store = Filesystem;
    let probe = HttpProbe::new()?;
    let terminal = prompt::TerminalPrompt;
    let confirm: &dyn Confirm = if cli.yes { &AssumeYes } else { &terminal };

    let orchestrator = Orchestrator::new(&settings, &runner, &store, &probe, confirm);
    dispatch(&orchestrator, action)
}

/// Run `action` with an already-built orchestrator.
pub fn dispatch(orchestrator: &Orchestrator<'_>, action: Action) -> Result<()> {
    match action {
        Action::Init(Target::Client) => client::init(orchestrator),
        Action::Reset(Target::Client) => client::reset(orchestrator),
        Action::Remove(Target::Client) => client::remove(orchestrator),
        Action::Dev(DevAction::Up) => docker::up(orchestrator),
        Action::Dev(DevAction::Down) => docker::down(orchestrator),
        Action::Dev(DevAction::Cleanup) => docker::cleanup(orchestrator),
        Action::GenerateAdminKey => admin_key::execute(orchestrator),
        Action::Completions(shell) => completions::execute(shell),
    }
}
