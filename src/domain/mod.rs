//! Domain models and types for Shiplabel.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Upstream records** ([`RawOrder`], [`LineItem`])
//! - **Derived rows** ([`FlatOrderRow`], [`EnrichedOrderRow`], [`OutputRow`])
//! - **Reference data** ([`CountryReference`])
//! - **Error types** ([`ShiplabelError`], [`OrdersApiError`], [`SheetsError`])
//! - **Result type alias** ([`Result`])
//!
//! All of these live only for the duration of one run.

pub mod country;
pub mod errors;
pub mod order;
pub mod result;
pub mod rows;

pub use country::CountryReference;
pub use errors::{OrdersApiError, SheetsError, ShiplabelError};
pub use order::{LineItem, RawOrder};
pub use result::Result;
pub use rows::{EnrichedOrderRow, FlatOrderRow, OutputRow, DATE_FORMAT, OUTPUT_COLUMNS};
