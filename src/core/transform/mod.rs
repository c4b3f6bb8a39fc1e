//! Data transformation logic
//!
//! Turns raw API orders into the rows published to the spreadsheet:
//!
//! - **Flatten**: one [`FlatOrderRow`](crate::domain::FlatOrderRow) per order
//! - **Enrich**: join on country code, render the label, project to the output columns

pub mod enrich;
pub mod flatten;

pub use enrich::{clean_orders, join_countries, print_label, project};
pub use flatten::{extract_orders, CREATION_DATE_FORMAT};
