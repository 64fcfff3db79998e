//! fibseries — times and prints Fibonacci numbers.

use std::process::ExitCode;

use anyhow::Result;
use fibseries_lib::{app, config, errors};

fn main() -> Result<ExitCode> {
    // Initialize tracing on stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    let outcome = app::run(&config)?;
    Ok(errors::process_exit_code(outcome))
}
