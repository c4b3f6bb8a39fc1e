//! Export summary and reporting
//!
//! This module defines the structure returned by one export run.

use std::time::Duration;

/// Summary of an export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Orders returned by the orders API
    pub orders_fetched: usize,

    /// Orders dropped because their country code was unknown
    pub rows_dropped: usize,

    /// Data rows written to the worksheet (header excluded)
    pub rows_written: usize,

    /// Title of the worksheet created by this run
    pub worksheet_title: String,

    /// The fetched page was full, so more matching orders may exist
    pub truncation_warning: bool,

    /// Nothing was published
    pub dry_run: bool,

    /// Duration of the run
    pub duration: Duration,
}

impl ExportSummary {
    /// Create an empty summary for the given worksheet title
    pub fn new(worksheet_title: impl Into<String>) -> Self {
        Self {
            orders_fetched: 0,
            rows_dropped: 0,
            rows_written: 0,
            worksheet_title: worksheet_title.into(),
            truncation_warning: false,
            dry_run: false,
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            worksheet = %self.worksheet_title,
            orders_fetched = self.orders_fetched,
            rows_dropped = self.rows_dropped,
            rows_written = self.rows_written,
            truncation_warning = self.truncation_warning,
            dry_run = self.dry_run,
            duration_secs = self.duration.as_secs(),
            "Export completed"
        );
    }

    /// Print a human-readable report to stdout
    pub fn print(&self) {
        println!();
        println!("📊 Export Summary:");
        println!("  Worksheet: {}", self.worksheet_title);
        println!("  Orders fetched: {}", self.orders_fetched);
        println!("  Dropped (unknown country): {}", self.rows_dropped);
        println!("  Rows written: {}", self.rows_written);
        println!("  Duration: {:.2}s", self.duration.as_secs_f64());
        println!();

        if self.truncation_warning {
            println!("⚠️  The orders page was full; older matching orders may not have been fetched.");
            println!();
        }

        if self.dry_run {
            println!("🔍 Dry run completed, nothing was published.");
        } else {
            println!("✅ Export completed successfully!");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_summary_creation() {
        let summary = ExportSummary::new("2024-03-05");

        assert_eq!(summary.worksheet_title, "2024-03-05");
        assert_eq!(summary.orders_fetched, 0);
        assert_eq!(summary.rows_dropped, 0);
        assert_eq!(summary.rows_written, 0);
        assert!(!summary.truncation_warning);
        assert!(!summary.dry_run);
        assert_eq!(summary.duration, Duration::from_secs(0));
    }

    #[test]
    fn test_export_summary_with_duration() {
        let summary = ExportSummary::new("2024-03-05").with_duration(Duration::from_secs(3));
        assert_eq!(summary.duration, Duration::from_secs(3));
    }
}
