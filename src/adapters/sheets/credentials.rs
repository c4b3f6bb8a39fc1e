//! Google service account authentication
//!
//! Exchanges a self-signed RS256 JWT for an OAuth access token
//! (the "JWT bearer" grant used by Google service accounts).

use crate::config::SecretString;
use crate::domain::{Result, SheetsError};
use base64::prelude::BASE64_URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use ring::signature::RsaKeyPair;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Read/write access to spreadsheets
pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// The subset of a service account key file we need
#[derive(Debug, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    private_key: SecretString,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

#[derive(Serialize)]
struct JwtHeader {
    alg: &'static str,
    typ: &'static str,
}

#[derive(Serialize)]
struct JwtClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    exp: i64,
    iat: i64,
}

/// Bearer token for the Sheets API
///
/// A fresh token is requested on every run, so its lifetime is ignored.
#[derive(Debug, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
}

impl ServiceAccountKey {
    /// Parse a key from its JSON text
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| {
            SheetsError::Authentication(format!("invalid service account key: {e}")).into()
        })
    }

    /// Read a key file downloaded from the Google Cloud console
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SheetsError::Authentication(format!(
                "failed to read service account key {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json(&contents)
    }

    /// Build the signed assertion for the token request
    pub fn signed_jwt(&self, now: DateTime<Utc>) -> Result<String> {
        let claims = JwtClaims {
            iss: &self.client_email,
            scope: SPREADSHEETS_SCOPE,
            aud: &self.token_uri,
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
        };
        let header = JwtHeader {
            alg: "RS256",
            typ: "JWT",
        };

        let header_b64 = BASE64_URL_SAFE_NO_PAD.encode(serde_json::to_vec(&header)?);
        let claims_b64 = BASE64_URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims)?);
        let signing_input = format!("{header_b64}.{claims_b64}");

        let key_pair = self.key_pair()?;
        let mut signature = vec![0; key_pair.public().modulus_len()];
        key_pair
            .sign(
                &ring::signature::RSA_PKCS1_SHA256,
                &ring::rand::SystemRandom::new(),
                signing_input.as_bytes(),
                &mut signature,
            )
            .map_err(|_| SheetsError::Authentication("failed to sign JWT".to_string()))?;

        Ok(format!(
            "{signing_input}.{}",
            BASE64_URL_SAFE_NO_PAD.encode(&signature)
        ))
    }

    /// Exchange a freshly signed JWT for an access token
    pub async fn fetch_access_token(&self, client: &Client) -> Result<AccessToken> {
        let jwt = self.signed_jwt(Utc::now())?;
        let params = [("grant_type", JWT_BEARER_GRANT), ("assertion", jwt.as_str())];

        tracing::debug!(
            client_email = %self.client_email,
            token_uri = %self.token_uri,
            "Requesting Google access token"
        );

        let response = client
            .post(&self.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| SheetsError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetsError::Authentication(format!(
                "token endpoint returned {status}: {body}"
            ))
            .into());
        }

        let token: AccessToken = response
            .json()
            .await
            .map_err(|e| SheetsError::InvalidResponse(e.to_string()))?;
        Ok(token)
    }

    fn key_pair(&self) -> Result<RsaKeyPair> {
        let pem: &str = self.private_key.expose_secret().as_ref();
        let mut reader = std::io::Cursor::new(pem.as_bytes());
        let item = rustls_pemfile::read_one(&mut reader)
            .map_err(|e| SheetsError::Authentication(format!("invalid PEM private key: {e}")))?;

        let key_pair = match item {
            Some(rustls_pemfile::Item::Pkcs8Key(der)) => {
                RsaKeyPair::from_pkcs8(der.secret_pkcs8_der()).map_err(|e| {
                    SheetsError::Authentication(format!("rejected pkcs8 private key: {e}"))
                })?
            }
            Some(rustls_pemfile::Item::Pkcs1Key(der)) => {
                RsaKeyPair::from_der(der.secret_pkcs1_der()).map_err(|e| {
                    SheetsError::Authentication(format!("rejected pkcs1 private key: {e}"))
                })?
            }
            _ => {
                return Err(
                    SheetsError::Authentication("no RSA private key in PEM".to_string()).into(),
                )
            }
        };
        Ok(key_pair)
    }
}

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}
