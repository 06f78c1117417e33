//! External process execution.
//!
//! Every tool devstack drives (npm, npx, docker compose) goes through a
//! [`CommandRunner`], so handlers can be exercised with a scripted runner
//! instead of real processes.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{CommandError, Result};

/// A process to run.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ExecRequest {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    env: Vec<(String, String)>,
    capture: bool,
}

impl ExecRequest {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    /// Build from an argv vector; `None` if it is empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone()).args(args.iter().cloned()))
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Add a variable on top of the inherited environment.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Capture stdout/stderr instead of streaming them to the terminal.
    pub fn capture(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn argv(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    /// Value of an added variable.
    pub fn env_value(&self, key: &str) -> Option<&str> {
        self.env
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_captured(&self) -> bool {
        self.capture
    }

    /// The command line, without environment values.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// Env values may carry the admin key; keep them out of logs.
impl fmt::Debug for ExecRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let env_keys: Vec<&str> = self.env.iter().map(|(k, _)| k.as_str()).collect();
        f.debug_struct("ExecRequest")
            .field("program", &self.program)
            .field("args", &self.args)
            .field("cwd", &self.cwd)
            .field("env", &env_keys)
            .field("capture", &self.capture)
            .finish()
    }
}

/// Result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutput {
    /// Exit code; `None` when killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    /// A zero exit with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A non-zero exit with the given stderr.
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external processes.
pub trait CommandRunner {
    /// Run a process to completion.
    ///
    /// A non-zero exit is not an error here; see [`run_checked`].
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Spawn` if the process cannot be started.
    fn run(&self, request: &ExecRequest) -> Result<ExecOutput>;

    /// Whether `program` resolves on `PATH`.
    fn has_program(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

/// Run a process and turn a non-zero exit into `CommandError::Failed`.
pub fn run_checked(runner: &dyn CommandRunner, request: &ExecRequest) -> Result<ExecOutput> {
    let output = runner.run(request)?;
    if output.success() {
        return Ok(output);
    }
    Err(CommandError::Failed {
        command: request.command_line(),
        code: output.code,
        stderr: output.stderr.trim().to_string(),
    }
    .into())
}

/// Runs real processes with `std::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct System;

impl CommandRunner for System {
    fn run(&self, request: &ExecRequest) -> Result<ExecOutput> {
        debug!(command = %request.command_line(), cwd = ?request.cwd, "running");

        let mut cmd = Command::new(&request.program);
        cmd.args(&request.args);
        if let Some(dir) = &request.cwd {
            cmd.current_dir(dir);
        }
        cmd.envs(request.env.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        let spawn_error = |source: std::io::Error| CommandError::Spawn {
            program: request.program.clone(),
            source,
        };

        if request.capture {
            let output = cmd
                .stdin(Stdio::null())
                .output()
                .map_err(spawn_error)?;
            Ok(ExecOutput {
                code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        } else {
            let status = cmd.status().map_err(spawn_error)?;
            Ok(ExecOutput {
                code: status.code(),
                ..ExecOutput::default()
            })
        }
    }
}
