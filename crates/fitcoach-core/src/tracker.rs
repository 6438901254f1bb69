// Muscle-group freshness tracker
//
// Remembers, per user, the last instant each muscle group was requested in a
// generated plan, and reports which of those groups have gone stale.
//
// Only groups a user has trained at least once are ever reported; a group that
// was never requested is not considered overdue.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

use crate::user_map::UserMap;

/// Days after which a trained group is due again
pub const DEFAULT_FRESHNESS_DAYS: i64 = 7;

/// Outcome of an overdue check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overdue {
    /// The user has never recorded any training
    NoHistory,
    /// Every tracked group was trained within the threshold
    AllFresh,
    /// Groups whose elapsed time meets or exceeds the threshold, sorted by name
    Due(Vec<String>),
}

/// Tracks last-trained timestamps per (user, muscle group)
#[derive(Debug)]
pub struct FreshnessTracker {
    last_trained: UserMap<HashMap<String, DateTime<Utc>>>,
    threshold: Duration,
}

impl Default for FreshnessTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl FreshnessTracker {
    /// Create a tracker with the default 7-day threshold
    pub fn new() -> Self {
        Self::with_threshold(Duration::days(DEFAULT_FRESHNESS_DAYS))
    }

    pub fn with_threshold(threshold: Duration) -> Self {
        Self {
            last_trained: UserMap::new(),
            threshold,
        }
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    /// Mark each group as trained at `now`. Later calls overwrite earlier ones.
    ///
    /// An empty `groups` still registers the user, so a later `overdue` reports
    /// `AllFresh` rather than `NoHistory`.
    pub async fn record<S: AsRef<str>>(&self, user: &str, groups: &[S], now: DateTime<Utc>) {
        self.last_trained
            .update(user, |trained| {
                for group in groups {
                    trained.insert(group.as_ref().to_string(), now);
                }
            })
            .await;
    }

    /// Overdue groups for `user` using the tracker's threshold
    pub async fn overdue(&self, user: &str, now: DateTime<Utc>) -> Overdue {
        self.overdue_within(user, now, self.threshold).await
    }

    /// Overdue groups for `user` using an explicit threshold
    pub async fn overdue_within(
        &self,
        user: &str,
        now: DateTime<Utc>,
        threshold: Duration,
    ) -> Overdue {
        let due = self
            .last_trained
            .read(user, |trained| {
                let mut due: Vec<String> = trained
                    .iter()
                    .filter(|(_, last)| now.signed_duration_since(**last) >= threshold)
                    .map(|(group, _)| group.clone())
                    .collect();
                due.sort();
                due
            })
            .await;

        match due {
            None => Overdue::NoHistory,
            Some(due) if due.is_empty() => Overdue::AllFresh,
            Some(due) => Overdue::Due(due),
        }
    }

    /// Last time `group` was trained by `user`
    pub async fn last_trained(&self, user: &str, group: &str) -> Option<DateTime<Utc>> {
        self.last_trained
            .read(user, |trained| trained.get(group).copied())
            .await
            .flatten()
    }

    /// Groups the user has ever trained, sorted by name
    pub async fn tracked_groups(&self, user: &str) -> Vec<String> {
        self.last_trained
            .read(user, |trained| {
                let mut groups: Vec<String> = trained.keys().cloned().collect();
                groups.sort();
                groups
            })
            .await
            .unwrap_or_default()
    }
}
