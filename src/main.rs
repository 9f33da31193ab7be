// member-anon - JSON member anonymizer
// Copyright (c) 2025 member-anon Contributors
// Licensed under the MIT License

use anyhow::Context;
use clap::Parser;
use member_anon::cli::Cli;
use member_anon::config::AnonConfig;
use member_anon::domain::AnonError;
use member_anon::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(e.exit_code());
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(e.exit_code());
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "member-anon starting");

    let exit_code = match run(&cli, &config) {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!(error = %e, "Anonymization failed");
            eprintln!("Error: {e:#}");
            e.downcast_ref::<AnonError>()
                .map_or(1, AnonError::exit_code)
        }
    };

    process::exit(exit_code);
}

/// Run the anonymizer for the parsed command line
fn run(cli: &Cli, config: &AnonConfig) -> anyhow::Result<()> {
    cli.execute(config)
        .with_context(|| format!("Failed to anonymize {}", cli.path))?;
    Ok(())
}
