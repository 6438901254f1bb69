// Google Sheets Workout Log
//
// Implements the WorkoutLogSink trait from fitcoach-core on top of the Google
// Sheets v4 API, authenticating as a service account.

mod auth;
mod client;
mod credentials;
mod error;
mod log;

pub use auth::{AccessTokenProvider, AssertionClaims, ServiceAccountAuth, StaticToken};
pub use client::{SheetsClient, DRIVE_API_BASE, SHEETS_API_BASE};
pub use credentials::{ServiceAccountKey, DEFAULT_TOKEN_URI, SCOPES};
pub use error::{Result, SheetsError};
pub use log::{SheetsConfig, SheetsWorkoutLog, SpreadsheetRef, DEFAULT_SPREADSHEET_NAME};
