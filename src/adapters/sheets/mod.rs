//! Spreadsheet publishing
//!
//! [`SheetWriter`] is the seam the export coordinator publishes through.
//! Implementations:
//!
//! - [`GoogleSheetsClient`] - Google Sheets REST API v4
//! - [`DryRunWriter`] - logs the table, writes nothing
//! - [`MemorySheetWriter`] - in-memory spreadsheet for tests

pub mod client;
pub mod credentials;
pub mod dry_run;
pub mod memory;

pub use client::GoogleSheetsClient;
pub use credentials::ServiceAccountKey;
pub use dry_run::DryRunWriter;
pub use memory::MemorySheetWriter;

use crate::domain::{OutputRow, Result, OUTPUT_COLUMNS};
use async_trait::async_trait;
use std::sync::Arc;

/// A header row plus data rows, all as strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// Build the published table from output rows, preserving their order
    pub fn from_rows(rows: &[OutputRow]) -> Self {
        Self {
            header: OUTPUT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: rows.iter().map(OutputRow::to_cells).collect(),
        }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows (header excluded)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Header followed by all data rows, as written to the worksheet
    pub fn values(&self) -> Vec<Vec<String>> {
        std::iter::once(self.header.clone())
            .chain(self.rows.iter().cloned())
            .collect()
    }
}

/// Destination for the published table
#[async_trait]
pub trait SheetWriter: Send + Sync {
    /// Create a worksheet named `title` and write `table` into it
    ///
    /// Returns the number of data rows written.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::domain::SheetsError::WorksheetExists`] if a
    /// worksheet with that title is already present. Existing worksheets are
    /// never overwritten or appended to.
    async fn write_sheet(&self, title: &str, table: &SheetTable) -> Result<usize>;
}

#[async_trait]
impl<W: SheetWriter + ?Sized> SheetWriter for Arc<W> {
    async fn write_sheet(&self, title: &str, table: &SheetTable) -> Result<usize> {
        (**self).write_sheet(title, table).await
    }
}
