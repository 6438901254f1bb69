// Coach configuration
//
// CoachConfig is a transport-agnostic configuration struct that can be:
// - Created directly for tests and standalone usage
// - Built by the API from environment variables

use chrono::Duration as ChronoDuration;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::tracker::DEFAULT_FRESHNESS_DAYS;

/// Persona given to the completion provider before every plan request
pub const DEFAULT_PERSONA: &str = "You are a fitness coach that generates detailed workout plans.";

/// Configuration for plan generation and workout logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachConfig {
    /// System instruction establishing the coach persona
    #[serde(default = "default_persona")]
    pub persona: String,

    /// Upper bound for a single completion call
    #[serde(default = "default_completion_timeout", with = "duration_secs")]
    pub completion_timeout: Duration,

    /// Upper bound for a single workout log append
    #[serde(default = "default_log_timeout", with = "duration_secs")]
    pub log_timeout: Duration,

    /// Days after which a trained muscle group is due again. Must be positive.
    #[serde(default = "default_freshness_days")]
    pub freshness_days: i64,
}

fn default_persona() -> String {
    DEFAULT_PERSONA.to_string()
}

fn default_completion_timeout() -> Duration {
    Duration::from_secs(60)
}

fn default_log_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_freshness_days() -> i64 {
    DEFAULT_FRESHNESS_DAYS
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            persona: default_persona(),
            completion_timeout: default_completion_timeout(),
            log_timeout: default_log_timeout(),
            freshness_days: default_freshness_days(),
        }
    }
}

impl CoachConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the persona instruction
    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = persona.into();
        self
    }

    /// Set the completion timeout
    pub fn with_completion_timeout(mut self, timeout: Duration) -> Self {
        self.completion_timeout = timeout;
        self
    }

    /// Set the workout log timeout
    pub fn with_log_timeout(mut self, timeout: Duration) -> Self {
        self.log_timeout = timeout;
        self
    }

    /// Set the freshness threshold in days
    pub fn with_freshness_days(mut self, days: i64) -> Self {
        self.freshness_days = days;
        self
    }

    /// Freshness threshold as a duration.
    ///
    /// Zero, negative or unrepresentable day counts fall back to
    /// `DEFAULT_FRESHNESS_DAYS`.
    pub fn freshness_threshold(&self) -> ChronoDuration {
        match ChronoDuration::try_days(self.freshness_days) {
            Some(threshold) if self.freshness_days > 0 => threshold,
            _ => {
                tracing::warn!(
                    freshness_days = self.freshness_days,
                    default = DEFAULT_FRESHNESS_DAYS,
                    "Invalid freshness threshold, using default"
                );
                ChronoDuration::days(DEFAULT_FRESHNESS_DAYS)
            }
        }
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
