//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Shiplabel configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates and resolves secret files
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!("  Orders API: {}", config.orders.base_url);
        println!("  Order Status: {}", config.orders.status);
        println!("  Page Limit: {}", config.orders.limit);
        println!("  Page Offset: {}", config.orders.offset);
        println!("  Country CSV: {}", config.countries.csv_url);
        println!(
            "  Spreadsheet: {}",
            config.sheets.spreadsheet_id.as_deref().unwrap_or("<unset>")
        );
        println!(
            "  Service Account Key: {}",
            config.sheets.service_account_path
        );
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                format!("{} ({})", config.logging.local_path, config.logging.local_rotation)
            } else {
                "disabled".to_string()
            }
        );
        println!();
        Ok(0)
    }
}
