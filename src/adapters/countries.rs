//! Country reference loader
//!
//! Downloads the public country-code CSV on every run.

use crate::config::CountriesConfig;
use crate::domain::{CountryReference, Result, ShiplabelError};
use async_trait::async_trait;
use reqwest::Client;

/// Source of the country code → name table
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Load the reference table
    async fn load(&self) -> Result<CountryReference>;
}

/// Fetches the reference CSV over HTTP
pub struct HttpCountrySource {
    client: Client,
    csv_url: String,
}

impl HttpCountrySource {
    pub fn new(config: &CountriesConfig) -> Result<Self> {
        let client = Client::builder().build().map_err(|e| {
            ShiplabelError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            csv_url: config.csv_url.clone(),
        })
    }
}

#[async_trait]
impl CountrySource for HttpCountrySource {
    async fn load(&self) -> Result<CountryReference> {
        tracing::debug!(url = %self.csv_url, "Downloading country reference");

        let response = self
            .client
            .get(&self.csv_url)
            .send()
            .await
            .map_err(|e| ShiplabelError::CountryReference(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShiplabelError::CountryReference(format!(
                "{} returned status {status}",
                self.csv_url
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ShiplabelError::CountryReference(format!("failed to read body: {e}")))?;

        let reference = CountryReference::from_csv_reader(body.as_ref())?;
        tracing::info!(countries = reference.len(), "Loaded country reference");
        Ok(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_country_csv() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/core/country-list/r/data.csv")
            .with_status(200)
            .with_header("content-type", "text/csv")
            .with_body("Name,Code\nAfghanistan,AF\nÅland Islands,AX\nGermany,DE\n")
            .create_async()
            .await;

        let source = HttpCountrySource::new(&CountriesConfig {
            csv_url: format!("{}/core/country-list/r/data.csv", server.url()),
        })
        .unwrap();

        let reference = source.load().await.unwrap();
        assert_eq!(reference.len(), 3);
        assert_eq!(reference.name_for("AX"), Some("Åland Islands"));
    }

    #[tokio::test]
    async fn test_load_country_csv_not_found() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/data.csv")
            .with_status(404)
            .create_async()
            .await;

        let source = HttpCountrySource::new(&CountriesConfig {
            csv_url: format!("{}/data.csv", server.url()),
        })
        .unwrap();

        let err = source.load().await.unwrap_err();
        assert!(matches!(err, ShiplabelError::CountryReference(_)));
    }
}
