//! Configuration schema types

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Main Shiplabel configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiplabelConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Orders API settings
    pub orders: OrdersConfig,

    /// Country reference dataset
    #[serde(default)]
    pub countries: CountriesConfig,

    /// Target spreadsheet
    pub sheets: SheetsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ShiplabelConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.orders.validate()?;
        self.countries.validate()?;
        self.sheets.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (transform everything, write nothing)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Orders API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersConfig {
    /// API base URL; `/orders` is appended
    #[serde(default = "default_orders_base_url")]
    pub base_url: String,

    /// API secret used for Basic authentication
    #[serde(default)]
    pub api_secret: Option<SecretString>,

    /// JSON file holding `{"API_SECRET": "..."}`, alternative to `api_secret`
    #[serde(default)]
    pub api_secret_file: Option<String>,

    /// Order status filter
    #[serde(default = "default_status")]
    pub status: String,

    /// Page size; the API caps this at 100
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Page offset
    #[serde(default)]
    pub offset: u32,
}

impl OrdersConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        validate_url("orders.base_url", &self.base_url)?;

        match (&self.api_secret, &self.api_secret_file) {
            (Some(_), Some(_)) => {
                return Err(
                    "orders.api_secret and orders.api_secret_file are mutually exclusive"
                        .to_string(),
                )
            }
            (None, None) => {
                return Err(
                    "one of orders.api_secret or orders.api_secret_file is required".to_string(),
                )
            }
            (Some(secret), None) if secret.expose_secret().is_empty() => {
                return Err("orders.api_secret cannot be empty".to_string());
            }
            _ => {}
        }

        if self.status.trim().is_empty() {
            return Err("orders.status cannot be empty".to_string());
        }

        if !(1..=100).contains(&self.limit) {
            return Err(format!(
                "orders.limit must be between 1 and 100, got {}",
                self.limit
            ));
        }

        Ok(())
    }
}

/// Country reference configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountriesConfig {
    /// Public CSV with `Name` and `Code` columns
    #[serde(default = "default_countries_csv_url")]
    pub csv_url: String,
}

impl CountriesConfig {
    fn validate(&self) -> Result<(), String> {
        validate_url("countries.csv_url", &self.csv_url)
    }
}

impl Default for CountriesConfig {
    fn default() -> Self {
        Self {
            csv_url: default_countries_csv_url(),
        }
    }
}

/// Google Sheets configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetsConfig {
    /// Target spreadsheet key
    #[serde(default)]
    pub spreadsheet_id: Option<String>,

    /// JSON file holding `{"id": "..."}`, alternative to `spreadsheet_id`
    #[serde(default)]
    pub spreadsheet_id_file: Option<String>,

    /// Service account key file downloaded from the Google Cloud console
    pub service_account_path: String,

    /// Sheets API root
    #[serde(default = "default_sheets_api_base_url")]
    pub api_base_url: String,
}

impl SheetsConfig {
    fn validate(&self) -> Result<(), String> {
        match (&self.spreadsheet_id, &self.spreadsheet_id_file) {
            (Some(_), Some(_)) => {
                return Err(
                    "sheets.spreadsheet_id and sheets.spreadsheet_id_file are mutually exclusive"
                        .to_string(),
                )
            }
            (None, None) => {
                return Err(
                    "one of sheets.spreadsheet_id or sheets.spreadsheet_id_file is required"
                        .to_string(),
                )
            }
            (Some(id), None) if id.trim().is_empty() => {
                return Err("sheets.spreadsheet_id cannot be empty".to_string());
            }
            _ => {}
        }

        if self.service_account_path.trim().is_empty() {
            return Err("sheets.service_account_path cannot be empty".to_string());
        }

        validate_url("sheets.api_base_url", &self.api_base_url)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Also write JSON logs to a rolling file
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Rotation (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn validate_url(field: &str, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{field} cannot be empty"));
    }
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(format!("{field} must start with http:// or https://"));
    }
    url::Url::parse(value).map_err(|e| format!("{field} is not a valid URL: {e}"))?;
    Ok(())
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_orders_base_url() -> String {
    "https://app.snipcart.com/api".to_string()
}

fn default_status() -> String {
    "Processed".to_string()
}

fn default_limit() -> u32 {
    100
}

fn default_countries_csv_url() -> String {
    "https://datahub.io/core/country-list/r/data.csv".to_string()
}

fn default_sheets_api_base_url() -> String {
    "https://sheets.googleapis.com".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
