//! Export coordinator - main orchestrator for the export process
//!
//! One run is strictly sequential: fetch orders, flatten, load the country
//! reference, clean, publish, then check for possible truncation. Any error
//! aborts the run; nothing is retried and no state is kept between runs.

use crate::adapters::countries::{CountrySource, HttpCountrySource};
use crate::adapters::orders::{HttpOrdersClient, OrdersSource};
use crate::adapters::sheets::{DryRunWriter, GoogleSheetsClient, SheetTable, SheetWriter};
use crate::config::ShiplabelConfig;
use crate::core::export::summary::ExportSummary;
use crate::core::transform::{clean_orders, extract_orders};
use crate::domain::{Result, DATE_FORMAT};
use chrono::{Local, NaiveDate};
use std::time::Instant;

/// Whether a result of `row_count` rows may have been cut off by the page size
///
/// The orders API returns at most `limit` orders per request and only one
/// page is fetched.
pub fn is_possibly_truncated(row_count: usize, limit: u32) -> bool {
    row_count >= limit as usize
}

/// Export coordinator
pub struct ExportCoordinator {
    orders: Box<dyn OrdersSource>,
    countries: Box<dyn CountrySource>,
    writer: Box<dyn SheetWriter>,
    dry_run: bool,
}

impl ExportCoordinator {
    /// Wire the HTTP implementations from configuration
    ///
    /// In dry-run mode the Google Sheets client is never constructed, so no
    /// service account key is read.
    pub fn from_config(config: &ShiplabelConfig) -> Result<Self> {
        let orders = HttpOrdersClient::new(&config.orders)?;
        let countries = HttpCountrySource::new(&config.countries)?;
        let writer: Box<dyn SheetWriter> = if config.application.dry_run {
            Box::new(DryRunWriter::new())
        } else {
            Box::new(GoogleSheetsClient::new(&config.sheets)?)
        };

        Ok(Self {
            orders: Box::new(orders),
            countries: Box::new(countries),
            writer,
            dry_run: config.application.dry_run,
        })
    }

    /// Build a coordinator around arbitrary sources and writer
    pub fn with_sources(
        orders: Box<dyn OrdersSource>,
        countries: Box<dyn CountrySource>,
        writer: Box<dyn SheetWriter>,
    ) -> Self {
        Self {
            orders,
            countries,
            writer,
            dry_run: false,
        }
    }

    /// Mark the summary as a dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run the export, titling the worksheet with today's local date
    pub async fn run(&self) -> Result<ExportSummary> {
        self.run_on(Local::now().date_naive()).await
    }

    /// Run the export, titling the worksheet with `date`
    pub async fn run_on(&self, date: NaiveDate) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let title = date.format(DATE_FORMAT).to_string();
        let mut summary = ExportSummary::new(title.as_str());
        summary.dry_run = self.dry_run;

        tracing::info!(worksheet = %title, dry_run = self.dry_run, "Starting export");

        let orders = self.orders.fetch_orders().await?;
        summary.orders_fetched = orders.len();
        tracing::info!(count = orders.len(), "Fetched orders");

        let flattened = extract_orders(&orders)?;
        let reference = self.countries.load().await?;
        let rows = clean_orders(flattened, &reference);
        summary.rows_dropped = orders.len() - rows.len();
        if summary.rows_dropped > 0 {
            tracing::info!(
                dropped = summary.rows_dropped,
                "Dropped orders with unknown country codes"
            );
        }

        let table = SheetTable::from_rows(&rows);
        summary.rows_written = self.writer.write_sheet(&title, &table).await?;

        let limit = self.orders.page_limit();
        if is_possibly_truncated(table.row_count(), limit) {
            tracing::warn!(
                rows = table.row_count(),
                limit,
                "Row count reached the orders page size; older orders may have been left out"
            );
            summary.truncation_warning = true;
        }

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        Ok(summary)
    }
}
