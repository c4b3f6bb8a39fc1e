//! HTTP client for the orders API

use super::auth::basic_authorization;
use super::OrdersSource;
use crate::config::{secret_string, OrdersConfig, SecretString};
use crate::domain::{OrdersApiError, RawOrder, Result, ShiplabelError};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Deserialize;

/// Fetches one page of orders over HTTP
///
/// Issues a single `GET <base_url>/orders?offset=..&limit=..&status=..`.
/// There is no retry and no client-side timeout.
pub struct HttpOrdersClient {
    client: Client,
    orders_url: String,
    authorization: SecretString,
    status: String,
    limit: u32,
    offset: u32,
}

/// Response envelope; everything except `items` is ignored
#[derive(Debug, Deserialize)]
struct OrdersPage {
    items: Vec<serde_json::Value>,
}

impl HttpOrdersClient {
    /// Create a client from the `[orders]` configuration section
    ///
    /// # Errors
    ///
    /// Returns an error if no API secret is configured, the secret is not
    /// ASCII, or the HTTP client cannot be built.
    pub fn new(config: &OrdersConfig) -> Result<Self> {
        let secret = config.api_secret.as_ref().ok_or_else(|| {
            ShiplabelError::Configuration("orders.api_secret is not set".to_string())
        })?;
        let authorization = secret_string(basic_authorization(secret.expose_secret().as_ref())?);

        let client = Client::builder().build().map_err(|e| {
            ShiplabelError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            orders_url: format!("{}/orders", config.base_url.trim_end_matches('/')),
            authorization,
            status: config.status.clone(),
            limit: config.limit,
            offset: config.offset,
        })
    }
}

#[async_trait]
impl OrdersSource for HttpOrdersClient {
    async fn fetch_orders(&self) -> Result<Vec<RawOrder>> {
        tracing::info!(
            url = %self.orders_url,
            status = %self.status,
            limit = self.limit,
            offset = self.offset,
            "Fetching orders"
        );

        let authorization: &str = self.authorization.expose_secret().as_ref();
        let response = self
            .client
            .get(&self.orders_url)
            .query(&[
                ("offset", self.offset.to_string()),
                ("limit", self.limit.to_string()),
                ("status", self.status.clone()),
            ])
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, authorization)
            .send()
            .await
            .map_err(|e| OrdersApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OrdersApiError::Status {
                status: status.as_u16(),
                message: body,
            }
            .into());
        }

        let page: OrdersPage = response
            .json()
            .await
            .map_err(|e| OrdersApiError::InvalidResponse(e.to_string()))?;

        let orders = page
            .items
            .into_iter()
            .enumerate()
            .map(|(index, value)| RawOrder::from_value(value, index))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(count = orders.len(), "Fetched orders");
        Ok(orders)
    }

    fn page_limit(&self) -> u32 {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn config(base_url: String) -> OrdersConfig {
        OrdersConfig {
            base_url,
            api_secret: Some(secret_string("secret".to_string())),
            api_secret_file: None,
            status: "Processed".to_string(),
            limit: 100,
            offset: 0,
        }
    }

    fn order_json(invoice: &str) -> serde_json::Value {
        json!({
            "invoiceNumber": invoice,
            "creationDate": "2024-03-05T12:00:00Z",
            "shippingAddressName": "Jane Doe",
            "shippingAddressCompanyName": null,
            "shippingAddressAddress1": "1 Main St",
            "shippingAddressAddress2": null,
            "shippingAddressCity": "Springfield",
            "shippingAddressProvince": "IL",
            "shippingAddressPostalCode": "62701",
            "shippingAddressCountry": "US",
            "shippingMethod": "Standard",
            "notes": null,
            "numberOfItemsInOrder": 1,
            "items": [{"id": "poster-a"}]
        })
    }

    #[test]
    fn test_client_requires_secret() {
        let mut config = config("http://localhost".to_string());
        config.api_secret = None;
        assert!(matches!(
            HttpOrdersClient::new(&config),
            Err(ShiplabelError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_trailing_slash_and_page_limit() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/orders")
            .match_query(Matcher::UrlEncoded("limit".into(), "20".into()))
            .with_status(200)
            .with_body(json!({ "items": [] }).to_string())
            .create_async()
            .await;

        let mut config = config(format!("{}/api/", server.url()));
        config.limit = 20;
        let client = HttpOrdersClient::new(&config).unwrap();

        assert_eq!(client.page_limit(), 20);
        assert!(client.fetch_orders().await.unwrap().is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_orders_sends_filter_and_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/orders")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("offset".into(), "0".into()),
                Matcher::UrlEncoded("limit".into(), "100".into()),
                Matcher::UrlEncoded("status".into(), "Processed".into()),
            ]))
            .match_header("accept", "application/json")
            .match_header("authorization", "Basic c2VjcmV0")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "totalItems": 2,
                    "offset": 0,
                    "limit": 100,
                    "items": [order_json("SNIP-1"), order_json("SNIP-2")]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = HttpOrdersClient::new(&config(server.url())).unwrap();
        let orders = client.fetch_orders().await.unwrap();

        mock.assert_async().await;
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].invoice_number, "SNIP-1");
        assert_eq!(orders[1].invoice_number, "SNIP-2");
    }

    #[tokio::test]
    async fn test_fetch_orders_non_success_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/orders")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body("Unauthorized")
            .create_async()
            .await;

        let client = HttpOrdersClient::new(&config(server.url())).unwrap();
        let err = client.fetch_orders().await.unwrap_err();

        match err {
            ShiplabelError::OrdersApi(OrdersApiError::Status { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Unauthorized");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_orders_malformed_json() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/orders")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("{\"items\": [")
            .create_async()
            .await;

        let client = HttpOrdersClient::new(&config(server.url())).unwrap();
        let err = client.fetch_orders().await.unwrap_err();
        assert!(matches!(
            err,
            ShiplabelError::OrdersApi(OrdersApiError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_orders_missing_field_is_schema_error() {
        let mut server = mockito::Server::new_async().await;
        let mut broken = order_json("SNIP-9");
        broken.as_object_mut().unwrap().remove("shippingMethod");
        server
            .mock("GET", "/orders")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(json!({ "items": [order_json("SNIP-1"), broken] }).to_string())
            .create_async()
            .await;

        let client = HttpOrdersClient::new(&config(server.url())).unwrap();
        let err = client.fetch_orders().await.unwrap_err();
        assert!(matches!(err, ShiplabelError::Schema(_)));
        assert!(err.to_string().contains("index 1"));
    }
}
