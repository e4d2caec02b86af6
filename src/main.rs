use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use domain::error::EXIT_VALIDATION_FAILED;

fn main() -> ExitCode {
    // Logs go to stderr; stdout is reserved for the usage listings.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!("starting external certificate validator");

    let Some(certificate_type) = cli.certificate_type.as_deref() else {
        if let Err(e) = commands::help::print_supported_types(cli.json) {
            error!("failed to print supported types: {e}");
        }
        return ExitCode::from(EXIT_VALIDATION_FAILED);
    };

    if cli.specs.is_empty() {
        if let Err(e) = commands::help::print_supported_operations(cli.json, certificate_type) {
            error!("failed to print supported operations: {e}");
        }
        return ExitCode::from(EXIT_VALIDATION_FAILED);
    }

    if certificate_type != "x509" {
        error!("requested validation of unsupported certificate type '{certificate_type}'");
        return ExitCode::from(EXIT_VALIDATION_FAILED);
    }

    match commands::validate::run_validation(&cli.specs, &mut std::io::stdin().lock()) {
        Ok(outcome) if outcome.passed => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(EXIT_VALIDATION_FAILED),
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
