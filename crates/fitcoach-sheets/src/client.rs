// Google Sheets / Drive REST client
//
// Three calls are enough for the workout log:
// - Drive files.list to find a spreadsheet by name
// - Sheets spreadsheets.get to read worksheet titles
// - Sheets values.append to add one row

use reqwest::{Client, RequestBuilder, Response, Url};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::AccessTokenProvider;
use crate::error::{Result, SheetsError};

pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
pub const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3/files";

const SPREADSHEET_MIME_TYPE: &str = "application/vnd.google-apps.spreadsheet";

#[derive(Debug, Deserialize)]
struct DriveFileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
}

#[derive(Debug, Deserialize)]
struct Spreadsheet {
    #[serde(default)]
    sheets: Vec<Sheet>,
}

#[derive(Debug, Deserialize)]
struct Sheet {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorResponse {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct SheetsClient {
    http: Client,
    auth: Arc<dyn AccessTokenProvider>,
    sheets_base: String,
    drive_base: String,
    timeout: Duration,
}

impl SheetsClient {
    pub fn new(http: Client, auth: Arc<dyn AccessTokenProvider>, timeout: Duration) -> Self {
        Self {
            http,
            auth,
            sheets_base: SHEETS_API_BASE.to_string(),
            drive_base: DRIVE_API_BASE.to_string(),
            timeout,
        }
    }

    /// Point the client at different API roots (used against mock servers)
    pub fn with_base_urls(
        mut self,
        sheets_base: impl Into<String>,
        drive_base: impl Into<String>,
    ) -> Self {
        self.sheets_base = sheets_base.into();
        self.drive_base = drive_base.into();
        self
    }

    /// Id of the first non-trashed spreadsheet visible to the account with this exact name
    pub async fn find_spreadsheet_by_name(&self, name: &str) -> Result<String> {
        let query = format!(
            "name = '{}' and mimeType = '{}' and trashed = false",
            name.replace('\\', "\\\\").replace('\'', "\\'"),
            SPREADSHEET_MIME_TYPE
        );
        let request = self
            .http
            .get(&self.drive_base)
            .query(&[("q", query.as_str()), ("fields", "files(id,name)")]);

        let list: DriveFileList = self.send(request).await?.json().await.map_err(|e| {
            SheetsError::Http(format!("Failed to parse Drive file list: {}", e))
        })?;

        list.files
            .into_iter()
            .next()
            .map(|f| f.id)
            .ok_or_else(|| SheetsError::NotFound(format!("spreadsheet named '{}'", name)))
    }

    /// Worksheet titles in tab order
    pub async fn worksheet_titles(&self, spreadsheet_id: &str) -> Result<Vec<String>> {
        let url = self.sheets_url(&[spreadsheet_id])?;
        let request = self
            .http
            .get(url)
            .query(&[("fields", "sheets.properties.title")]);

        let spreadsheet: Spreadsheet = self.send(request).await?.json().await.map_err(|e| {
            SheetsError::Http(format!("Failed to parse spreadsheet metadata: {}", e))
        })?;

        Ok(spreadsheet
            .sheets
            .into_iter()
            .map(|s| s.properties.title)
            .collect())
    }

    /// Append one row after the last row of `worksheet`
    pub async fn append_row(
        &self,
        spreadsheet_id: &str,
        worksheet: &str,
        row: &[String],
    ) -> Result<()> {
        let range = format!("'{}'", worksheet.replace('\'', "''"));
        let url = self.sheets_url(&[spreadsheet_id, "values", &format!("{}:append", range)])?;

        let request = self
            .http
            .post(url)
            .query(&[
                ("valueInputOption", "RAW"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&json!({
                "majorDimension": "ROWS",
                "values": [row],
            }));

        self.send(request).await?;
        Ok(())
    }

    fn sheets_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.sheets_base)
            .map_err(|e| SheetsError::Http(format!("Invalid Sheets API base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| SheetsError::Http("Sheets API base URL cannot be a base".to_string()))?
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let token = self.auth.access_token().await?;
        let response = request
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| SheetsError::from_reqwest(e, self.timeout))?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<GoogleErrorResponse>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body);
        Err(SheetsError::Api { status, message })
    }
}

impl std::fmt::Debug for SheetsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsClient")
            .field("sheets_base", &self.sheets_base)
            .field("drive_base", &self.drive_base)
            .finish()
    }
}
