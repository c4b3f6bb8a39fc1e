//! Orders API adapter
//!
//! [`OrdersSource`] is the seam the export coordinator fetches through;
//! [`HttpOrdersClient`] is the production implementation.

pub mod auth;
pub mod client;

pub use auth::basic_authorization;
pub use client::HttpOrdersClient;

use crate::domain::{RawOrder, Result};
use async_trait::async_trait;

/// Source of raw orders
#[async_trait]
pub trait OrdersSource: Send + Sync {
    /// Fetch one page of orders
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or a body that
    /// does not decode into orders. Nothing is retried.
    async fn fetch_orders(&self) -> Result<Vec<RawOrder>>;

    /// Page size requested by [`fetch_orders`](Self::fetch_orders)
    ///
    /// A result this long may have been cut off.
    fn page_limit(&self) -> u32;
}
