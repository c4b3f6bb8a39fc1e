//! External system integrations for Shiplabel.
//!
//! This module provides adapters for the systems an export talks to:
//!
//! - [`orders`] - e-commerce orders REST API (Basic auth, one page per run)
//! - [`countries`] - public country-code reference CSV
//! - [`sheets`] - Google Sheets publishing (plus dry-run and in-memory writers)
//!
//! # Design Pattern
//!
//! Each adapter sits behind a trait ([`orders::OrdersSource`],
//! [`countries::CountrySource`], [`sheets::SheetWriter`]) so the export
//! coordinator can be driven by test doubles.
//!
//! # Orders Adapter
//!
//! ```rust,no_run
//! use shiplabel::adapters::orders::{HttpOrdersClient, OrdersSource};
//! use shiplabel::config::{secret_string, OrdersConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = OrdersConfig {
//!     base_url: "https://app.snipcart.com/api".to_string(),
//!     api_secret: Some(secret_string("ST_abc123:".to_string())),
//!     api_secret_file: None,
//!     status: "Processed".to_string(),
//!     limit: 100,
//!     offset: 0,
//! };
//!
//! let client = HttpOrdersClient::new(&config)?;
//! let orders = client.fetch_orders().await?;
//! println!("{} orders", orders.len());
//! # Ok(())
//! # }
//! ```

pub mod countries;
pub mod orders;
pub mod sheets;
