// Error types for the Sheets client

use fitcoach_core::CoachError;
use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SheetsError>;

#[derive(Debug, Error)]
pub enum SheetsError {
    /// Service-account JSON could not be used
    #[error("Invalid service account credentials: {0}")]
    InvalidCredentials(String),

    /// Token exchange failed
    #[error("Google auth failed: {0}")]
    Auth(String),

    /// Transport-level failure
    #[error("Google API request failed: {0}")]
    Http(String),

    /// Google answered with a non-success status
    #[error("Google API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// No spreadsheet or worksheet matched
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Google API request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

impl SheetsError {
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            SheetsError::Timeout(timeout)
        } else {
            SheetsError::Http(err.to_string())
        }
    }
}

impl From<SheetsError> for CoachError {
    fn from(err: SheetsError) -> Self {
        match err {
            SheetsError::Timeout(after) => CoachError::timeout("workout log append", after),
            SheetsError::InvalidCredentials(msg) => CoachError::config(msg),
            other => CoachError::log_append(other.to_string()),
        }
    }
}
