//! Authorization header for the orders API

use crate::domain::{Result, ShiplabelError};
use base64::{engine::general_purpose, Engine as _};

/// Build the `Authorization` header value for an API secret
///
/// The secret is used as the Basic-auth user name with an empty password,
/// which is how the orders API expects it: `Basic <base64(secret)>`.
///
/// # Errors
///
/// Returns an authentication error if the secret is not plain ASCII.
///
/// # Examples
///
/// ```
/// use shiplabel::adapters::orders::basic_authorization;
///
/// assert_eq!(basic_authorization("secret").unwrap(), "Basic c2VjcmV0");
/// ```
pub fn basic_authorization(secret: &str) -> Result<String> {
    if !secret.is_ascii() {
        return Err(ShiplabelError::Authentication(
            "API secret must be ASCII".to_string(),
        ));
    }
    let encoded = general_purpose::STANDARD.encode(secret.as_bytes());
    Ok(format!("Basic {encoded}"))
}
