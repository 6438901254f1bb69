// Per-user workout feedback and request snapshots
//
// Feedback is accumulated from logged workouts and kept for later plan
// adaptation; nothing reads it back yet besides inspection helpers.

use serde::{Deserialize, Serialize};

use crate::user_map::UserMap;

/// Completed/skipped summary mirrored from a logged workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub completed: Vec<String>,
    pub skipped: Vec<String>,
    pub reasons: Vec<String>,
}

/// Ordered feedback sequence per user
#[derive(Debug, Default)]
pub struct FeedbackHistory {
    records: UserMap<Vec<FeedbackRecord>>,
}

impl FeedbackHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, user: &str, record: FeedbackRecord) {
        self.records.update(user, |records| records.push(record)).await;
    }

    /// All feedback for `user`, oldest first
    pub async fn for_user(&self, user: &str) -> Vec<FeedbackRecord> {
        self.records
            .read(user, |records| records.clone())
            .await
            .unwrap_or_default()
    }
}

/// Muscle groups from each user's most recent plan request
#[derive(Debug, Default)]
pub struct LastRequestedGroups {
    groups: UserMap<Vec<String>>,
}

impl LastRequestedGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot for `user`
    pub async fn replace(&self, user: &str, groups: Vec<String>) {
        self.groups.update(user, |current| *current = groups).await;
    }

    pub async fn get(&self, user: &str) -> Option<Vec<String>> {
        self.groups.read(user, |groups| groups.clone()).await
    }
}
