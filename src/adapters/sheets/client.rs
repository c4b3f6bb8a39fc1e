//! Google Sheets REST client
//!
//! Publishing is two calls after authentication: list the existing
//! worksheets, then one `batchUpdate` that adds the new worksheet and writes
//! its cells. The second call is applied by the API as a whole, so a failed
//! run never leaves an empty worksheet behind.

use super::credentials::ServiceAccountKey;
use super::{SheetTable, SheetWriter};
use crate::config::SheetsConfig;
use crate::domain::{Result, SheetsError, ShiplabelError};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::json;
use url::Url;

/// Writes worksheets into one spreadsheet using a service account
pub struct GoogleSheetsClient {
    client: Client,
    api_base_url: Url,
    spreadsheet_id: String,
    key: ServiceAccountKey,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetInfo {
    #[serde(default)]
    sheets: Vec<SheetInfo>,
}

#[derive(Debug, Deserialize)]
struct SheetInfo {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SheetProperties {
    // omitted by the API when zero
    #[serde(default)]
    sheet_id: i32,
    title: String,
}

impl GoogleSheetsClient {
    /// Create a client from the `[sheets]` configuration section
    ///
    /// Reads the service account key file; the file is closed before this returns.
    pub fn new(config: &SheetsConfig) -> Result<Self> {
        let spreadsheet_id = config.spreadsheet_id.clone().ok_or_else(|| {
            ShiplabelError::Configuration("sheets.spreadsheet_id is not set".to_string())
        })?;
        let key = ServiceAccountKey::from_file(&config.service_account_path)?;
        Self::with_key(&config.api_base_url, spreadsheet_id, key)
    }

    /// Create a client with an already parsed service account key
    pub fn with_key(
        api_base_url: &str,
        spreadsheet_id: impl Into<String>,
        key: ServiceAccountKey,
    ) -> Result<Self> {
        let api_base_url = Url::parse(api_base_url).map_err(|e| {
            ShiplabelError::Configuration(format!("invalid sheets.api_base_url: {e}"))
        })?;
        let client = Client::builder().build().map_err(|e| {
            ShiplabelError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            api_base_url,
            spreadsheet_id: spreadsheet_id.into(),
            key,
        })
    }

    /// `<base>/v4/spreadsheets/<segments...>`
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.api_base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ShiplabelError::Configuration(
                    "sheets.api_base_url cannot be a base URL".to_string(),
                )
            })?
            .pop_if_empty()
            .push("v4")
            .push("spreadsheets")
            .extend(segments);
        Ok(url)
    }

    async fn sheets(&self, token: &str) -> Result<Vec<SheetProperties>> {
        let mut url = self.endpoint(&[self.spreadsheet_id.as_str()])?;
        url.query_pairs_mut()
            .append_pair("fields", "sheets.properties(sheetId,title)");

        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| SheetsError::Transport(e.to_string()))?;
        let info: SpreadsheetInfo = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| SheetsError::InvalidResponse(e.to_string()))?;

        Ok(info.sheets.into_iter().map(|s| s.properties).collect())
    }

    /// Build the single `batchUpdate` body that creates the worksheet and fills it
    ///
    /// Both requests travel together so the spreadsheet applies them as one
    /// unit: either the worksheet exists with every row, or it does not exist.
    fn publish_request(title: &str, sheet_id: i32, table: &SheetTable) -> serde_json::Value {
        let rows: Vec<_> = table
            .values()
            .into_iter()
            .map(|row| {
                let values: Vec<_> = row
                    .into_iter()
                    .map(|cell| json!({ "userEnteredValue": { "stringValue": cell } }))
                    .collect();
                json!({ "values": values })
            })
            .collect();

        json!({
            "requests": [
                {
                    "addSheet": {
                        "properties": {
                            "sheetId": sheet_id,
                            "title": title,
                            // header row plus data rows
                            "gridProperties": {
                                "rowCount": table.row_count() + 1,
                                "columnCount": table.column_count()
                            }
                        }
                    }
                },
                {
                    "updateCells": {
                        "start": { "sheetId": sheet_id, "rowIndex": 0, "columnIndex": 0 },
                        "rows": rows,
                        "fields": "userEnteredValue"
                    }
                }
            ]
        })
    }

    async fn publish(
        &self,
        token: &str,
        title: &str,
        sheet_id: i32,
        table: &SheetTable,
    ) -> Result<()> {
        let batch_update = format!("{}:batchUpdate", self.spreadsheet_id);
        let url = self.endpoint(&[batch_update.as_str()])?;
        let body = Self::publish_request(title, sheet_id, table);

        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| SheetsError::Transport(e.to_string()))?;

        match ensure_success(response).await {
            Err(SheetsError::Status { status: 400, message }) if message.contains("already exists") => {
                Err(SheetsError::WorksheetExists(title.to_string()).into())
            }
            Err(e) => Err(e.into()),
            Ok(_) => Ok(()),
        }
    }
}

#[async_trait]
impl SheetWriter for GoogleSheetsClient {
    async fn write_sheet(&self, title: &str, table: &SheetTable) -> Result<usize> {
        let token = self.key.fetch_access_token(&self.client).await?;

        let existing = self.sheets(&token.access_token).await?;
        if existing.iter().any(|p| p.title == title) {
            return Err(SheetsError::WorksheetExists(title.to_string()).into());
        }

        let sheet_id = next_sheet_id(&existing)?;
        tracing::debug!(
            title = %title,
            sheet_id,
            rows = table.row_count() + 1,
            cols = table.column_count(),
            "Publishing worksheet"
        );
        self.publish(&token.access_token, title, sheet_id, table).await?;

        tracing::info!(
            spreadsheet_id = %self.spreadsheet_id,
            title = %title,
            "{} new orders successfully uploaded",
            table.row_count()
        );
        Ok(table.row_count())
    }
}

/// One past the highest sheet id in use
fn next_sheet_id(existing: &[SheetProperties]) -> Result<i32> {
    match existing.iter().map(|p| p.sheet_id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or_else(|| {
            SheetsError::InvalidResponse("no free worksheet id left".to_string()).into()
        }),
    }
}

async fn ensure_success(response: Response) -> std::result::Result<Response, SheetsError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(SheetsError::Status {
        status: status.as_u16(),
        message,
    })
}
