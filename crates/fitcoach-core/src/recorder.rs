// Workout log recording
//
// Appends one row per logged session to the workout log, then mirrors the
// completed/skipped lists into the user's feedback history. The append runs
// first; if it fails the history is left alone.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::config::CoachConfig;
use crate::error::{CoachError, Result};
use crate::log_entry::WorkoutLogEntry;
use crate::state::CoachState;
use crate::traits::WorkoutLogSink;

/// A session reported by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogWorkout {
    pub user: String,
    pub muscle_groups: Vec<String>,
    pub completed_exercises: Vec<String>,
    pub skipped_exercises: Vec<String>,
    pub reasons: Vec<String>,
}

impl LogWorkout {
    pub fn into_entry(self, date: NaiveDate) -> WorkoutLogEntry {
        WorkoutLogEntry {
            date,
            user: self.user,
            muscle_groups: self.muscle_groups,
            completed_exercises: self.completed_exercises,
            skipped_exercises: self.skipped_exercises,
            reasons: self.reasons,
        }
    }
}

pub struct WorkoutLogRecorder {
    sink: Arc<dyn WorkoutLogSink>,
    state: Arc<CoachState>,
    timeout: Duration,
}

impl WorkoutLogRecorder {
    pub fn new(sink: Arc<dyn WorkoutLogSink>, state: Arc<CoachState>, config: &CoachConfig) -> Self {
        Self {
            sink,
            state,
            timeout: config.log_timeout,
        }
    }

    /// Record a session dated with today's local date
    pub async fn record_log(&self, log: LogWorkout) -> Result<WorkoutLogEntry> {
        self.record_log_on(log, Local::now().date_naive()).await
    }

    pub async fn record_log_on(&self, log: LogWorkout, date: NaiveDate) -> Result<WorkoutLogEntry> {
        let entry = log.into_entry(date);

        tokio::time::timeout(self.timeout, self.sink.append_row(entry.to_row()))
            .await
            .map_err(|_| CoachError::timeout("workout log append", self.timeout))??;

        self.state
            .feedback
            .append(&entry.user, entry.feedback())
            .await;

        tracing::info!(
            user = %entry.user,
            completed = entry.completed_exercises.len(),
            skipped = entry.skipped_exercises.len(),
            "Workout logged"
        );
        Ok(entry)
    }
}
