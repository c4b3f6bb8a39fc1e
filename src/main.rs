// Shiplabel - Processed orders to Google Sheets shipping labels
// Copyright (c) 2025 Shiplabel Contributors
// Licensed under the MIT License

use clap::Parser;
use shiplabel::cli::{Cli, Commands};
use shiplabel::config::{load_config, LoggingConfig, ShiplabelConfig};
use shiplabel::domain::Result;
use shiplabel::logging::init_logging;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // export reads the file once; the result feeds both logging and the command
    let loaded = match cli.command {
        Commands::Export(_) => Some(load_config(&cli.config)),
        _ => None,
    };

    let (log_level, logging_config) = logging_settings(&cli, loaded.as_ref());
    let logging_guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Shiplabel - shipping labels from processed orders"
    );

    let exit_code = match execute_command(&cli, loaded).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    // flush the file writer before exiting
    drop(logging_guard);
    process::exit(exit_code);
}

/// Log level and file logging for this invocation
///
/// Only `export` uses the `[logging]` section; a configuration that fails
/// to load falls back to console logging and is reported by the command.
fn logging_settings(
    cli: &Cli,
    loaded: Option<&Result<ShiplabelConfig>>,
) -> (String, LoggingConfig) {
    let (configured_level, logging) = match loaded {
        Some(Ok(config)) => (config.application.log_level.clone(), config.logging.clone()),
        _ => ("info".to_string(), LoggingConfig::default()),
    };

    let level = cli.log_level.clone().unwrap_or(configured_level);
    (level, logging)
}

async fn execute_command(
    cli: &Cli,
    loaded: Option<Result<ShiplabelConfig>>,
) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Export(args) => {
            let loaded = loaded.unwrap_or_else(|| load_config(&cli.config));
            args.execute(loaded).await
        }
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
