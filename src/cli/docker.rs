//! `--dev docker up|down|cleanup`.

use crate::cli::output;
use crate::core::stack::CleanupOutcome;
use crate::core::Orchestrator;
use crate::error::Result;

/// Bring the stack up and deploy with a fresh admin key.
pub fn up(orchestrator: &Orchestrator<'_>) -> Result<()> {
    let report = orchestrator.up()?;

    if report.already_running {
        output::warn("stack was already running, converged and redeployed");
    }
    output::success("stack is up");
    output::kv("health checks:", report.attempts);
    output::kv("admin key:", report.key.expose());
    Ok(())
}

/// Stop the stack, keeping data.
pub fn down(orchestrator: &Orchestrator<'_>) -> Result<()> {
    orchestrator.down()?;
    output::success("stack stopped, volumes kept");
    Ok(())
}

/// Stop the stack and delete its volumes.
pub fn cleanup(orchestrator: &Orchestrator<'_>) -> Result<()> {
    match orchestrator.cleanup()? {
        CleanupOutcome::Removed => output::success("containers and volumes removed"),
        CleanupOutcome::Cancelled => output::hint("cancelled"),
    }
    Ok(())
}
