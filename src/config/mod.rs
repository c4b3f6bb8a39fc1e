//! Configuration management for Shiplabel.
//!
//! Shiplabel reads a single TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `SHIPLABEL_<SECTION>_<KEY>` overrides
//! - Secrets kept in separate JSON files (`api_secret_file`, `spreadsheet_id_file`)
//! - Validation on load
//!
//! The loaded [`ShiplabelConfig`] is passed explicitly to the export
//! coordinator; nothing is read from process-wide state afterwards.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [orders]
//! base_url = "https://app.snipcart.com/api"
//! api_secret = "${SHIPLABEL_ORDERS_API_SECRET}"
//! limit = 100
//!
//! [sheets]
//! spreadsheet_id_file = "./secrets/spreadsheet_id.json"
//! service_account_path = "./secrets/service_account.json"
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use shiplabel::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("shiplabel.toml")?;
//! println!("Orders API: {}", config.orders.base_url);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::load_config;
pub use schema::{
    ApplicationConfig, CountriesConfig, LoggingConfig, OrdersConfig, SheetsConfig,
    ShiplabelConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
