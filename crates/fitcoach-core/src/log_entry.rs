// Workout log entry
//
// One completed (or partly skipped) session, written as a single spreadsheet row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::history::FeedbackRecord;

/// Separator used when a list is flattened into one cell
pub const CELL_SEPARATOR: &str = ", ";

/// Date format of the first cell
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutLogEntry {
    pub date: NaiveDate,
    pub user: String,
    pub muscle_groups: Vec<String>,
    pub completed_exercises: Vec<String>,
    pub skipped_exercises: Vec<String>,
    pub reasons: Vec<String>,
}

impl WorkoutLogEntry {
    /// Row cells: date, user, groups, completed, skipped, reasons
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.date.format(DATE_FORMAT).to_string(),
            self.user.clone(),
            self.muscle_groups.join(CELL_SEPARATOR),
            self.completed_exercises.join(CELL_SEPARATOR),
            self.skipped_exercises.join(CELL_SEPARATOR),
            self.reasons.join(CELL_SEPARATOR),
        ]
    }

    pub fn feedback(&self) -> FeedbackRecord {
        FeedbackRecord {
            completed: self.completed_exercises.clone(),
            skipped: self.skipped_exercises.clone(),
            reasons: self.reasons.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> WorkoutLogEntry {
        WorkoutLogEntry {
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            user: "ana".into(),
            muscle_groups: vec!["chest".into(), "triceps".into()],
            completed_exercises: vec!["bench press".into(), "dips".into()],
            skipped_exercises: vec![],
            reasons: vec![],
        }
    }

    #[test]
    fn test_row_layout() {
        assert_eq!(
            entry().to_row(),
            vec![
                "2024-03-09",
                "ana",
                "chest, triceps",
                "bench press, dips",
                "",
                ""
            ]
        );
    }

    #[test]
    fn test_feedback_copies_lists() {
        let mut e = entry();
        e.skipped_exercises = vec!["skull crushers".into()];
        e.reasons = vec!["elbow pain".into()];

        let feedback = e.feedback();
        assert_eq!(feedback.completed, e.completed_exercises);
        assert_eq!(feedback.skipped, vec!["skull crushers"]);
        assert_eq!(feedback.reasons, vec!["elbow pain"]);
    }
}
