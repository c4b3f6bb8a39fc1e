// Shiplabel - Processed orders to Google Sheets shipping labels
// Copyright (c) 2025 Shiplabel Contributors
// Licensed under the MIT License

//! # Shiplabel - shipping labels from processed orders
//!
//! Shiplabel is a small batch tool that pulls the current page of processed
//! orders from an e-commerce orders API, turns each into a printable postal
//! label and publishes the result as a new worksheet, titled with today's
//! date, in a Google spreadsheet.
//!
//! ## Overview
//!
//! One run is strictly sequential:
//! - **Fetch** one page of orders (Basic authentication)
//! - **Flatten** each order into a row, joining its item ids
//! - **Enrich** with country names from a public CSV (unknown codes are dropped)
//! - **Label** each row with a five-line postal address
//! - **Publish** the rows to a new worksheet; an existing worksheet is never touched
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (export orchestration, transformation)
//! - [`adapters`] - External integrations (orders API, country CSV, Google Sheets)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shiplabel::config::load_config;
//! use shiplabel::core::export::ExportCoordinator;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("shiplabel.toml")?;
//!     let coordinator = ExportCoordinator::from_config(&config)?;
//!
//!     let summary = coordinator.run().await?;
//!
//!     println!("Published {} labels to {}", summary.rows_written, summary.worksheet_title);
//!     Ok(())
//! }
//! ```
//!
//! ## Transformation
//!
//! ```rust
//! use shiplabel::core::transform::{clean_orders, extract_orders};
//! use shiplabel::domain::{CountryReference, RawOrder};
//!
//! # fn example(orders: Vec<RawOrder>) -> shiplabel::domain::Result<()> {
//! let reference: CountryReference = [("DE", "Germany")].into_iter().collect();
//! let rows = clean_orders(extract_orders(&orders)?, &reference);
//! for row in &rows {
//!     println!("{}", row.print_label);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Result`], whose error type is
//! [`domain::ShiplabelError`]:
//!
//! ```rust,no_run
//! use shiplabel::domain::ShiplabelError;
//!
//! fn example() -> Result<(), ShiplabelError> {
//!     let config = shiplabel::config::load_config("shiplabel.toml")?;
//!     println!("{}", config.orders.base_url);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
