//! Sheets values API calls

use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::error::{AppError, AppResult};

use super::auth::TokenProvider;
use crate::catalog::RowStore;

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Response of `values/{range}`
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

/// Body of `values/{range}:append`
#[derive(Debug, Serialize)]
struct AppendBody {
    values: Vec<Vec<String>>,
}

/// The sheet returns cells as JSON values; anything non-string is carried
/// over via its JSON rendering (numbers come back as numeric strings)
fn cell_to_string(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Values API client bound to one spreadsheet
pub struct SheetsClient {
    http: reqwest::Client,
    spreadsheet_id: String,
    auth: TokenProvider,
}

impl SheetsClient {
    pub fn new(http: reqwest::Client, spreadsheet_id: impl Into<String>, auth: TokenProvider) -> Self {
        Self {
            http,
            spreadsheet_id: spreadsheet_id.into(),
            auth,
        }
    }

    fn values_url(&self, range: &str) -> String {
        format!("{SHEETS_API_BASE}/{}/values/{range}", self.spreadsheet_id)
    }
}

#[async_trait::async_trait]
impl RowStore for SheetsClient {
    async fn read_rows(&self, range: &str) -> AppResult<Vec<Vec<String>>> {
        let token = self.auth.bearer_token().await?;

        let response = self
            .http
            .get(self.values_url(range))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                AppError::store_read("Failed to fetch from sheet").with_cause(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(range = %range, status = %status, body = %body, "Values read failed");
            return Err(
                AppError::store_read("Failed to fetch from sheet").with_cause(format!("HTTP {status}"))
            );
        }

        let value_range: ValueRange = response.json().await.map_err(|e| {
            AppError::store_read("Sheet returned an unexpected body").with_cause(e.to_string())
        })?;

        Ok(value_range
            .values
            .iter()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect())
    }

    async fn append_row(&self, range: &str, cells: Vec<String>) -> AppResult<()> {
        let token = self.auth.bearer_token().await?;

        // USER_ENTERED lets the sheet interpret typed values instead of
        // forcing literal text; INSERT_ROWS keeps appends append-only
        let response = self
            .http
            .post(format!("{}:append", self.values_url(range)))
            .query(&[
                ("valueInputOption", "USER_ENTERED"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .bearer_auth(token)
            .json(&AppendBody {
                values: vec![cells],
            })
            .send()
            .await
            .map_err(|e| {
                AppError::store_append("Failed to append to sheet").with_cause(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(range = %range, status = %status, body = %body, "Values append failed");
            return Err(AppError::store_append("Failed to append to sheet")
                .with_cause(format!("HTTP {status}")));
        }

        Ok(())
    }
}
