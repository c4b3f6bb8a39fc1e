//! Dry-run writer: validates and logs, publishes nothing

use super::{SheetTable, SheetWriter};
use crate::domain::Result;
use async_trait::async_trait;

const PREVIEW_ROWS: usize = 5;

/// Stand-in writer used by `export --dry-run`
#[derive(Debug, Default)]
pub struct DryRunWriter;

impl DryRunWriter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SheetWriter for DryRunWriter {
    async fn write_sheet(&self, title: &str, table: &SheetTable) -> Result<usize> {
        tracing::info!(
            title = %title,
            rows = table.row_count(),
            "Dry run: skipping worksheet creation"
        );
        for row in table.rows().iter().take(PREVIEW_ROWS) {
            tracing::info!(row = %row.join(" | "), "Dry run row");
        }
        Ok(table.row_count())
    }
}
