//! devstack - local orchestrator for a self-hosted Convex backend and a Next.js client.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use devstack::cli::output;
use devstack::cli::{execute, Cli};
use devstack::core::constants::LOG_ENV;
use devstack::error::{CommandError, Error};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("devstack=debug")
        } else {
            EnvFilter::new("devstack=info")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let result = cli.action().and_then(|action| match action {
        Some(action) => execute(&cli, action),
        None => {
            let _ = Cli::command().print_help();
            println!();
            Ok(())
        }
    });

    if let Err(e) = result {
        output::error(&e.to_string());
        if let Error::Command(CommandError::Failed { stderr, .. }) = &e {
            if !stderr.is_empty() {
                output::detail(stderr);
            }
        }
        if let Some(hint) = e.hint() {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
