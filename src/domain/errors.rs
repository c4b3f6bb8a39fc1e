//! Domain error types
//!
//! This module defines the error hierarchy for Shiplabel.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Shiplabel error type
///
/// This is the primary error type used throughout the application.
/// Every variant aborts the run; nothing here is retried.
#[derive(Debug, Error)]
pub enum ShiplabelError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Orders API errors
    #[error("Orders API error: {0}")]
    OrdersApi(#[from] OrdersApiError),

    /// Google Sheets errors
    #[error("Google Sheets error: {0}")]
    Sheets(#[from] SheetsError),

    /// Country reference table could not be loaded or parsed
    #[error("Country reference error: {0}")]
    CountryReference(String),

    /// An upstream record did not have the expected shape
    #[error("Schema error: {0}")]
    Schema(String),

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Orders API errors
///
/// Errors that occur when fetching orders from the order-management API.
#[derive(Debug, Error)]
pub enum OrdersApiError {
    /// Request could not be sent or the connection dropped
    #[error("Failed to reach orders API: {0}")]
    Transport(String),

    /// Non-2xx response
    #[error("Orders API returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Body was not the expected JSON document
    #[error("Invalid response from orders API: {0}")]
    InvalidResponse(String),
}

/// Google Sheets errors
#[derive(Debug, Error)]
pub enum SheetsError {
    /// Service account key could not be used to obtain an access token
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Request could not be sent or the connection dropped
    #[error("Failed to reach Google Sheets: {0}")]
    Transport(String),

    /// Non-2xx response
    #[error("Google Sheets returned {status}: {message}")]
    Status { status: u16, message: String },

    /// A worksheet with this title is already present in the spreadsheet
    #[error("Worksheet '{0}' already exists")]
    WorksheetExists(String),

    /// Body was not the expected JSON document
    #[error("Invalid response from Google Sheets: {0}")]
    InvalidResponse(String),
}

impl ShiplabelError {
    /// Whether the run failed because today's worksheet was already published
    pub fn is_duplicate_worksheet(&self) -> bool {
        matches!(self, ShiplabelError::Sheets(SheetsError::WorksheetExists(_)))
    }
}

impl From<std::io::Error> for ShiplabelError {
    fn from(err: std::io::Error) -> Self {
        ShiplabelError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ShiplabelError {
    fn from(err: serde_json::Error) -> Self {
        ShiplabelError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ShiplabelError {
    fn from(err: toml::de::Error) -> Self {
        ShiplabelError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<csv::Error> for ShiplabelError {
    fn from(err: csv::Error) -> Self {
        ShiplabelError::CountryReference(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShiplabelError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_orders_api_error_conversion() {
        let api_err = OrdersApiError::Status {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        let err: ShiplabelError = api_err.into();
        assert!(matches!(err, ShiplabelError::OrdersApi(_)));
        assert_eq!(
            err.to_string(),
            "Orders API error: Orders API returned 401: Unauthorized"
        );
    }

    #[test]
    fn test_duplicate_worksheet_detection() {
        let err: ShiplabelError = SheetsError::WorksheetExists("2024-03-05".to_string()).into();
        assert!(err.is_duplicate_worksheet());
        assert!(err.to_string().contains("2024-03-05"));

        let other: ShiplabelError = SheetsError::Transport("reset".to_string()).into();
        assert!(!other.is_duplicate_worksheet());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: ShiplabelError = io_err.into();
        assert!(matches!(err, ShiplabelError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: ShiplabelError = json_err.into();
        assert!(matches!(err, ShiplabelError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: ShiplabelError = toml_err.into();
        assert!(matches!(err, ShiplabelError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }
}
