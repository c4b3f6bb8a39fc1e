//! Core business logic for Shiplabel.
//!
//! # Modules
//!
//! - [`export`] - Export orchestration and summary
//! - [`transform`] - Flattening, country enrichment and label rendering
//!
//! # Export Workflow
//!
//! 1. **Fetch**: One page of orders with the configured status filter
//! 2. **Flatten**: One row per order, item ids joined
//! 3. **Enrich**: Join on country code (unmatched orders are dropped), render labels
//! 4. **Publish**: Create a worksheet titled with today's date and write the rows
//! 5. **Check**: Warn if the row count reached the page size
//!
//! # Example
//!
//! ```rust,no_run
//! use shiplabel::config::load_config;
//! use shiplabel::core::export::ExportCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("shiplabel.toml")?;
//! let coordinator = ExportCoordinator::from_config(&config)?;
//!
//! let summary = coordinator.run().await?;
//! println!("Worksheet: {}", summary.worksheet_title);
//! println!("Rows written: {}", summary.rows_written);
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod transform;
