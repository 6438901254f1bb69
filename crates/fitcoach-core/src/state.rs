// Process-wide coaching state
//
// Constructed once at startup and shared with every request handler behind an
// Arc. Lost on restart.

use crate::config::CoachConfig;
use crate::history::{FeedbackHistory, LastRequestedGroups};
use crate::tracker::FreshnessTracker;

#[derive(Debug, Default)]
pub struct CoachState {
    pub tracker: FreshnessTracker,
    pub feedback: FeedbackHistory,
    pub last_requested: LastRequestedGroups,
}

impl CoachState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &CoachConfig) -> Self {
        Self {
            tracker: FreshnessTracker::with_threshold(config.freshness_threshold()),
            ..Self::default()
        }
    }
}
