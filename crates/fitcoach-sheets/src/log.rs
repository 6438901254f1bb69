// Spreadsheet-backed workout log
//
// Resolves the target spreadsheet and worksheet once, then appends one row per
// logged workout.

use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use fitcoach_core::{CoachError, WorkoutLogSink};

use crate::auth::ServiceAccountAuth;
use crate::client::SheetsClient;
use crate::credentials::ServiceAccountKey;
use crate::error::{Result, SheetsError};

pub const DEFAULT_SPREADSHEET_NAME: &str = "AI Fitness Bot Workouts";

/// Which spreadsheet to write to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpreadsheetRef {
    Id(String),
    Name(String),
}

#[derive(Debug, Clone)]
pub struct SheetsConfig {
    /// Raw service-account JSON
    pub credentials_json: String,
    pub spreadsheet: SpreadsheetRef,
    /// Worksheet title; the first worksheet when unset
    pub worksheet: Option<String>,
    pub timeout: Duration,
}

impl SheetsConfig {
    pub fn new(credentials_json: impl Into<String>) -> Self {
        Self {
            credentials_json: credentials_json.into(),
            spreadsheet: SpreadsheetRef::Name(DEFAULT_SPREADSHEET_NAME.to_string()),
            worksheet: None,
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SheetsWorkoutLog {
    client: SheetsClient,
    spreadsheet_id: String,
    worksheet: String,
}

impl SheetsWorkoutLog {
    /// Authenticate with the service account and resolve the target worksheet
    pub async fn connect(config: &SheetsConfig) -> Result<Self> {
        let key = ServiceAccountKey::from_json(&config.credentials_json)?;
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SheetsError::Http(format!("Failed to build HTTP client: {}", e)))?;
        let auth = ServiceAccountAuth::new(key, http.clone(), config.timeout)?;
        let client = SheetsClient::new(http, Arc::new(auth), config.timeout);

        Self::resolve(client, &config.spreadsheet, config.worksheet.as_deref()).await
    }

    /// Resolve spreadsheet id and worksheet title with an existing client
    pub async fn resolve(
        client: SheetsClient,
        spreadsheet: &SpreadsheetRef,
        worksheet: Option<&str>,
    ) -> Result<Self> {
        let spreadsheet_id = match spreadsheet {
            SpreadsheetRef::Id(id) => id.clone(),
            SpreadsheetRef::Name(name) => client.find_spreadsheet_by_name(name).await?,
        };

        let titles = client.worksheet_titles(&spreadsheet_id).await?;
        let worksheet = match worksheet {
            Some(wanted) => titles
                .into_iter()
                .find(|t| t == wanted)
                .ok_or_else(|| SheetsError::NotFound(format!("worksheet '{}'", wanted)))?,
            None => titles
                .into_iter()
                .next()
                .ok_or_else(|| SheetsError::NotFound("any worksheet".to_string()))?,
        };

        tracing::info!(
            spreadsheet_id = %spreadsheet_id,
            worksheet = %worksheet,
            "Workout log spreadsheet resolved"
        );

        Ok(Self {
            client,
            spreadsheet_id,
            worksheet,
        })
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    pub fn worksheet(&self) -> &str {
        &self.worksheet
    }
}

#[async_trait]
impl WorkoutLogSink for SheetsWorkoutLog {
    async fn append_row(&self, row: Vec<String>) -> fitcoach_core::Result<()> {
        self.client
            .append_row(&self.spreadsheet_id, &self.worksheet, &row)
            .await
            .map_err(CoachError::from)
    }
}
