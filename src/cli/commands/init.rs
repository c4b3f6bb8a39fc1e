//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "shiplabel.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Shiplabel configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Create a .env file with SHIPLABEL_ORDERS_API_SECRET,");
                println!("     or point orders.api_secret_file at a JSON secret file");
                println!("  3. Download a service account key and share the spreadsheet with it");
                println!("  4. Validate configuration: shiplabel validate-config");
                println!("  5. Run export: shiplabel export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    fn generate_config() -> String {
        r#"# Shiplabel Configuration File
# Publishes processed orders as printable shipping labels to Google Sheets

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Fetch and transform, but do not create a worksheet
dry_run = false

[orders]
base_url = "https://app.snipcart.com/api"

# Secret API key, used for Basic authentication.
# Alternatively: api_secret_file = "./secrets/snipcart_secret.json"
# containing {"API_SECRET": "..."}
api_secret = "${SHIPLABEL_ORDERS_API_SECRET}"

# Only one page is fetched; the API allows at most 100 per page
status = "Processed"
limit = 100
offset = 0

[countries]
# CSV with Name and Code columns
csv_url = "https://datahub.io/core/country-list/r/data.csv"

[sheets]
# Spreadsheet key from the sheet URL.
# Alternatively: spreadsheet_id_file = "./secrets/spreadsheet_id.json"
# containing {"id": "..."}
spreadsheet_id = "${SHIPLABEL_SHEETS_SPREADSHEET_ID}"
service_account_path = "./secrets/service_account.json"
api_base_url = "https://sheets.googleapis.com"

[logging]
# Also write JSON logs to files under local_path
local_enabled = false
local_path = "./logs"

# Rotation (daily, hourly, never)
local_rotation = "daily"
"#
        .to_string()
    }
}
