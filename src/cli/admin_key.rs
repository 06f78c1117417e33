//! `--generate-admin-key`.

use crate::cli::output;
use crate::core::Orchestrator;
use crate::error::Result;

/// Generate an admin key and print it.
pub fn execute(orchestrator: &Orchestrator<'_>) -> Result<()> {
    let report = orchestrator.generate_admin_key()?;

    output::success("admin key generated");
    output::kv("key file:", output::path(report.key_file.display()));
    match &report.env_file {
        Some(path) => output::kv("env file:", output::path(path.display())),
        None => output::kv("env file:", "not present, skipped"),
    }
    println!();
    println!("{}", report.key.expose());
    Ok(())
}
