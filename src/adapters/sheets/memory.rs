//! In-memory spreadsheet
//!
//! Behaves like the remote spreadsheet with respect to worksheet titles:
//! a title can be created once.

use super::{SheetTable, SheetWriter};
use crate::domain::{Result, SheetsError, ShiplabelError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct MemorySheetWriter {
    sheets: Mutex<BTreeMap<String, SheetTable>>,
}

impl MemorySheetWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a worksheet, as if created by an earlier run
    pub fn with_sheet(self, title: impl Into<String>, table: SheetTable) -> Self {
        if let Ok(mut sheets) = self.sheets.lock() {
            sheets.insert(title.into(), table);
        }
        self
    }

    /// Worksheet titles in sorted order
    pub fn titles(&self) -> Vec<String> {
        self.sheets
            .lock()
            .map(|s| s.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Contents of one worksheet
    pub fn sheet(&self, title: &str) -> Option<SheetTable> {
        self.sheets.lock().ok()?.get(title).cloned()
    }
}

#[async_trait]
impl SheetWriter for MemorySheetWriter {
    async fn write_sheet(&self, title: &str, table: &SheetTable) -> Result<usize> {
        let mut sheets = self
            .sheets
            .lock()
            .map_err(|_| ShiplabelError::Io("sheet store lock poisoned".to_string()))?;

        if sheets.contains_key(title) {
            return Err(SheetsError::WorksheetExists(title.to_string()).into());
        }
        sheets.insert(title.to_string(), table.clone());
        Ok(table.row_count())
    }
}
