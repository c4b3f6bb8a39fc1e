//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ShiplabelConfig;
use super::secret::secret_string;
use crate::domain::errors::ShiplabelError;
use crate::domain::result::Result;
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ShiplabelConfig
/// 4. Applies environment variable overrides (SHIPLABEL_* prefix)
/// 5. Validates the configuration
/// 6. Reads secrets referenced by `*_file` settings
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
/// - A secret file is missing or malformed
///
/// # Examples
///
/// ```no_run
/// use shiplabel::config::loader::load_config;
///
/// let config = load_config("shiplabel.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ShiplabelConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ShiplabelError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ShiplabelError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ShiplabelConfig = toml::from_str(&contents)
        .map_err(|e| ShiplabelError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        ShiplabelError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    resolve_secret_files(&mut config)?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ShiplabelError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ShiplabelError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the SHIPLABEL_* prefix
///
/// Environment variables follow the pattern: SHIPLABEL_<SECTION>_<KEY>,
/// for example SHIPLABEL_ORDERS_LIMIT or SHIPLABEL_SHEETS_SPREADSHEET_ID.
/// Overriding an inline secret clears the matching `*_file` setting.
fn apply_env_overrides(config: &mut ShiplabelConfig) -> Result<()> {
    if let Ok(val) = std::env::var("SHIPLABEL_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("SHIPLABEL_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    if let Ok(val) = std::env::var("SHIPLABEL_ORDERS_BASE_URL") {
        config.orders.base_url = val;
    }
    if let Ok(val) = std::env::var("SHIPLABEL_ORDERS_API_SECRET") {
        config.orders.api_secret = Some(secret_string(val));
        config.orders.api_secret_file = None;
    }
    if let Ok(val) = std::env::var("SHIPLABEL_ORDERS_STATUS") {
        config.orders.status = val;
    }
    if let Ok(val) = std::env::var("SHIPLABEL_ORDERS_LIMIT") {
        config.orders.limit = val.parse().map_err(|_| {
            ShiplabelError::Configuration(format!("SHIPLABEL_ORDERS_LIMIT is not a number: {val}"))
        })?;
    }

    if let Ok(val) = std::env::var("SHIPLABEL_COUNTRIES_CSV_URL") {
        config.countries.csv_url = val;
    }

    if let Ok(val) = std::env::var("SHIPLABEL_SHEETS_SPREADSHEET_ID") {
        config.sheets.spreadsheet_id = Some(val);
        config.sheets.spreadsheet_id_file = None;
    }
    if let Ok(val) = std::env::var("SHIPLABEL_SHEETS_SERVICE_ACCOUNT_PATH") {
        config.sheets.service_account_path = val;
    }

    if let Ok(val) = std::env::var("SHIPLABEL_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("SHIPLABEL_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

#[derive(Deserialize)]
struct ApiSecretFile {
    #[serde(rename = "API_SECRET")]
    api_secret: String,
}

#[derive(Deserialize)]
struct SpreadsheetIdFile {
    id: String,
}

/// Replaces `*_file` settings with the values they point at
fn resolve_secret_files(config: &mut ShiplabelConfig) -> Result<()> {
    if let Some(path) = config.orders.api_secret_file.take() {
        let file: ApiSecretFile = read_json_file(&path)?;
        config.orders.api_secret = Some(secret_string(file.api_secret));
    }

    if let Some(path) = config.sheets.spreadsheet_id_file.take() {
        let file: SpreadsheetIdFile = read_json_file(&path)?;
        config.sheets.spreadsheet_id = Some(file.id);
    }

    Ok(())
}

fn read_json_file<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ShiplabelError::Configuration(format!("Failed to read secret file {path}: {e}"))
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        ShiplabelError::Configuration(format!("Failed to parse secret file {path}: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("SHIPLABEL_TEST_SUBST", "test_value");
        let input = "api_secret = \"${SHIPLABEL_TEST_SUBST}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "api_secret = \"test_value\"\n");
        std::env::remove_var("SHIPLABEL_TEST_SUBST");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("SHIPLABEL_TEST_MISSING");
        let input = "api_secret = \"${SHIPLABEL_TEST_MISSING}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("SHIPLABEL_TEST_MISSING"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let input = "# api_secret = \"${SHIPLABEL_TEST_COMMENTED}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${SHIPLABEL_TEST_COMMENTED}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        assert!(load_config("nonexistent.toml").is_err());
    }

    #[test]
    fn test_resolve_secret_files() {
        let mut secret_file = NamedTempFile::new().unwrap();
        secret_file
            .write_all(br#"{"API_SECRET": "sk_from_file"}"#)
            .unwrap();
        let mut id_file = NamedTempFile::new().unwrap();
        id_file.write_all(br#"{"id": "1SheetFromFile"}"#).unwrap();

        let toml_content = format!(
            r#"
[orders]
api_secret_file = "{}"

[sheets]
spreadsheet_id_file = "{}"
service_account_path = "./secrets/service_account.json"
"#,
            secret_file.path().display(),
            id_file.path().display()
        );

        let mut config: ShiplabelConfig = toml::from_str(&toml_content).unwrap();
        resolve_secret_files(&mut config).unwrap();

        assert_eq!(
            config.orders.api_secret.as_ref().unwrap().expose_secret(),
            "sk_from_file"
        );
        assert!(config.orders.api_secret_file.is_none());
        assert_eq!(config.sheets.spreadsheet_id.as_deref(), Some("1SheetFromFile"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resolve_secret_file_wrong_shape() {
        let mut secret_file = NamedTempFile::new().unwrap();
        secret_file.write_all(br#"{"secret": "x"}"#).unwrap();

        let result: Result<ApiSecretFile> =
            read_json_file(&secret_file.path().display().to_string());
        assert!(matches!(result, Err(ShiplabelError::Configuration(_))));
    }
}
