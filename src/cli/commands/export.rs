//! Export command implementation
//!
//! This module implements the `export` command: fetch processed orders and
//! publish them as today's label worksheet.

use crate::config::ShiplabelConfig;
use crate::core::export::ExportCoordinator;
use crate::domain::{Result, ShiplabelError};
use crate::log_error_with_context;
use clap::Args;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Dry run mode - fetch and transform, but do not publish
    #[arg(long)]
    pub dry_run: bool,
}

impl ExportArgs {
    /// Execute the export command
    ///
    /// `loaded` is the outcome of loading the configuration file; a load
    /// failure is reported here and exits with code 2.
    pub async fn execute(&self, loaded: Result<ShiplabelConfig>) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match loaded {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        if config.application.dry_run {
            println!("🔍 DRY RUN MODE - No worksheet will be created");
            println!();
        }

        let coordinator = match ExportCoordinator::from_config(&config) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to create export coordinator");
                eprintln!("Failed to initialize export: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        println!("🚀 Starting export...");

        let summary = match coordinator.run().await {
            Ok(s) => s,
            Err(e) => {
                log_error_with_context!(&e, "Export failed");
                if e.is_duplicate_worksheet() {
                    eprintln!("Export failed: {e}. Today's labels were already published.");
                } else {
                    eprintln!("Export failed: {e}");
                }
                return Ok(exit_code_for(&e));
            }
        };

        summary.print();
        Ok(0)
    }
}

fn exit_code_for(error: &ShiplabelError) -> i32 {
    match error {
        ShiplabelError::Configuration(_) => 2,
        _ => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use crate::domain::SheetsError;

    #[test]
    fn test_export_args_defaults() {
        let args = ExportArgs { dry_run: false };
        assert!(!args.dry_run);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            exit_code_for(&ShiplabelError::Configuration("x".to_string())),
            2
        );
        assert_eq!(
            exit_code_for(&SheetsError::WorksheetExists("2024-03-05".to_string()).into()),
            5
        );
    }

    #[tokio::test]
    async fn test_missing_config_is_configuration_error() {
        let args = ExportArgs { dry_run: true };
        let code = args
            .execute(load_config("/nonexistent/shiplabel.toml"))
            .await
            .unwrap();
        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_invalid_loaded_config_exits_before_any_request() {
        // parsed but never validated: no orders secret
        let config: ShiplabelConfig = toml::from_str(
            r#"
[orders]

[sheets]
spreadsheet_id = "sheet123"
service_account_path = "./secrets/service_account.json"
"#,
        )
        .unwrap();

        let code = ExportArgs { dry_run: true }
            .execute(Ok(config))
            .await
            .unwrap();
        assert_eq!(code, 2);
    }
}
