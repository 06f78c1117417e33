//! `--init`, `--reset` and `--remove` for the client project.

use crate::cli::output;
use crate::core::scaffold::{RemovalOutcome, ScaffoldOutcome};
use crate::core::Orchestrator;
use crate::error::Result;

/// Scaffold the client project.
pub fn init(orchestrator: &Orchestrator<'_>) -> Result<()> {
    let dir = orchestrator.settings().project_dir();
    match orchestrator.scaffold()? {
        ScaffoldOutcome::Created => {
            output::success(&format!("scaffolded {}", output::path(dir.display())));
            output::hint(&format!("next: {}", output::cmd("devstack --dev docker up")));
        }
        ScaffoldOutcome::Skipped => {
            output::warn(&format!("{} already exists, skipping", output::path(dir.display())));
        }
    }
    Ok(())
}

/// Delete and re-scaffold the client project.
pub fn reset(orchestrator: &Orchestrator<'_>) -> Result<()> {
    let outcome = orchestrator.reset()?;
    report(orchestrator, outcome, "reset")
}

/// Delete the client project.
pub fn remove(orchestrator: &Orchestrator<'_>) -> Result<()> {
    let outcome = orchestrator.remove()?;
    report(orchestrator, outcome, "removed")
}

fn report(orchestrator: &Orchestrator<'_>, outcome: RemovalOutcome, done: &str) -> Result<()> {
    let dir = orchestrator.settings().project_dir();
    match outcome {
        RemovalOutcome::Done => {
            output::success(&format!("{} {}", done, output::path(dir.display())));
        }
        RemovalOutcome::Missing => {
            output::warn(&format!(
                "{} does not exist, nothing to do",
                output::path(dir.display())
            ));
        }
        RemovalOutcome::Cancelled => output::hint("cancelled"),
    }
    Ok(())
}
