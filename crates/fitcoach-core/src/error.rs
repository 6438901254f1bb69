// Error types for coaching operations

use std::time::Duration;
use thiserror::Error;

/// Result type alias for coaching operations
pub type Result<T> = std::result::Result<T, CoachError>;

/// Errors that can occur while generating plans or recording workouts
#[derive(Debug, Error)]
pub enum CoachError {
    /// Completion provider error
    #[error("Completion error: {0}")]
    Completion(String),

    /// Workout log append error
    #[error("Workout log error: {0}")]
    LogAppend(String),

    /// External call did not finish in time
    #[error("{operation} timed out after {}s", .after.as_secs())]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoachError {
    /// Create a completion error
    pub fn completion(msg: impl Into<String>) -> Self {
        CoachError::Completion(msg.into())
    }

    /// Create a workout log error
    pub fn log_append(msg: impl Into<String>) -> Self {
        CoachError::LogAppend(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        CoachError::Configuration(msg.into())
    }

    /// Create a timeout error for the named operation
    pub fn timeout(operation: &'static str, after: Duration) -> Self {
        CoachError::Timeout { operation, after }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message_names_operation() {
        let err = CoachError::timeout("completion", Duration::from_secs(60));
        assert_eq!(err.to_string(), "completion timed out after 60s");
    }

    #[test]
    fn test_helper_constructors() {
        assert!(matches!(
            CoachError::completion("boom"),
            CoachError::Completion(m) if m == "boom"
        ));
        assert_eq!(
            CoachError::log_append("sheet gone").to_string(),
            "Workout log error: sheet gone"
        );
    }

    #[test]
    fn test_every_variant_has_a_constructor() {
        let errors = [
            CoachError::completion("a"),
            CoachError::log_append("b"),
            CoachError::timeout("c", Duration::from_secs(1)),
            CoachError::config("d"),
        ];
        for err in errors {
            let label = match err {
                CoachError::Completion(_) => "completion",
                CoachError::LogAppend(_) => "log",
                CoachError::Timeout { .. } => "timeout",
                CoachError::Configuration(_) => "configuration",
            };
            assert!(!label.is_empty());
        }
    }
}
