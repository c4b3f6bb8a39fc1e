//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Shiplabel using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Shiplabel - publish processed orders as printable shipping labels
#[derive(Parser, Debug)]
#[command(name = "shiplabel")]
#[command(version, about, long_about = None)]
#[command(author = "Shiplabel Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "shiplabel.toml", env = "SHIPLABEL_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SHIPLABEL_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch processed orders and publish today's label worksheet
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["shiplabel", "export"]);
        assert_eq!(cli.config, "shiplabel.toml");
        assert!(matches!(cli.command, Commands::Export(ref args) if !args.dry_run));
    }

    #[test]
    fn test_cli_parse_export_dry_run() {
        let cli = Cli::parse_from(["shiplabel", "export", "--dry-run"]);
        assert!(matches!(cli.command, Commands::Export(ref args) if args.dry_run));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["shiplabel", "--config", "custom.toml", "export"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["shiplabel", "--log-level", "debug", "export"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["shiplabel", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["shiplabel", "init", "--output", "x.toml", "--force"]);
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.output, "x.toml");
                assert!(args.force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
