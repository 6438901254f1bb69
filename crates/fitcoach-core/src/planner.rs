// Workout plan generation
//
// Interpolates the request into a fixed instruction, sends it to the
// completion provider after the coach persona, and returns the reply verbatim.
// The freshness tracker and last-requested snapshot are only touched once the
// provider has answered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::completion::CompletionRequest;
use crate::config::CoachConfig;
use crate::error::{CoachError, Result};
use crate::state::CoachState;
use crate::traits::CompletionProvider;

/// Parameters of a plan request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutParams {
    pub user: String,
    pub goal: String,
    pub muscle_groups: Vec<String>,
    pub length: String,
    pub difficulty: String,
}

impl WorkoutParams {
    /// User instruction sent to the provider
    pub fn instruction(&self) -> String {
        format!(
            "Create a {} workout focusing on {}, lasting {}, for a {} level lifter.",
            self.goal,
            self.muscle_groups.join(", "),
            self.length,
            self.difficulty
        )
    }
}

pub struct WorkoutPlanner {
    provider: Arc<dyn CompletionProvider>,
    state: Arc<CoachState>,
    persona: String,
    timeout: Duration,
}

impl WorkoutPlanner {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        state: Arc<CoachState>,
        config: &CoachConfig,
    ) -> Self {
        Self {
            provider,
            state,
            persona: config.persona.clone(),
            timeout: config.completion_timeout,
        }
    }

    pub fn build_request(&self, params: &WorkoutParams) -> CompletionRequest {
        CompletionRequest::with_persona(self.persona.clone(), params.instruction())
    }

    /// Generate a plan and mark the requested groups as trained now
    pub async fn generate(&self, params: &WorkoutParams) -> Result<String> {
        self.generate_at(params, Utc::now()).await
    }

    pub async fn generate_at(&self, params: &WorkoutParams, now: DateTime<Utc>) -> Result<String> {
        let request = self.build_request(params);

        tracing::debug!(
            user = %params.user,
            groups = ?params.muscle_groups,
            model = %self.provider.model(),
            "Requesting workout plan"
        );

        let plan = tokio::time::timeout(self.timeout, self.provider.complete(request))
            .await
            .map_err(|_| CoachError::timeout("completion", self.timeout))??;

        self.state
            .tracker
            .record(&params.user, params.muscle_groups.as_slice(), now)
            .await;
        self.state
            .last_requested
            .replace(&params.user, params.muscle_groups.clone())
            .await;

        tracing::info!(user = %params.user, chars = plan.len(), "Workout plan generated");
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::CompletionRole;
    use crate::memory::{FailingCompletionProvider, StaticCompletionProvider};
    use crate::tracker::Overdue;
    use chrono::{Duration as ChronoDuration, TimeZone};

    fn params() -> WorkoutParams {
        WorkoutParams {
            user: "ana".into(),
            goal: "hypertrophy".into(),
            muscle_groups: vec!["chest".into(), "triceps".into()],
            length: "45 minutes".into(),
            difficulty: "intermediate".into(),
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_instruction_template() {
        assert_eq!(
            params().instruction(),
            "Create a hypertrophy workout focusing on chest, triceps, lasting 45 minutes, for a intermediate level lifter."
        );
    }

    #[tokio::test]
    async fn test_generate_sends_persona_and_instruction() {
        let provider = StaticCompletionProvider::new("Day 1: bench press 4x8");
        let state = Arc::new(CoachState::new());
        let planner = WorkoutPlanner::new(
            Arc::new(provider.clone()),
            state.clone(),
            &CoachConfig::default(),
        );

        let plan = planner.generate_at(&params(), t0()).await.unwrap();
        assert_eq!(plan, "Day 1: bench press 4x8");

        let requests = provider.requests().await;
        assert_eq!(requests.len(), 1);
        let messages = &requests[0].messages;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, CompletionRole::System);
        assert_eq!(
            messages[0].content,
            "You are a fitness coach that generates detailed workout plans."
        );
        assert_eq!(messages[1].role, CompletionRole::User);
        for needle in ["hypertrophy", "chest, triceps", "45 minutes", "intermediate"] {
            assert!(messages[1].content.contains(needle), "missing {needle}");
        }
    }

    #[tokio::test]
    async fn test_generate_records_groups() {
        let state = Arc::new(CoachState::new());
        let planner = WorkoutPlanner::new(
            Arc::new(StaticCompletionProvider::new("plan")),
            state.clone(),
            &CoachConfig::default(),
        );

        planner.generate_at(&params(), t0()).await.unwrap();

        assert_eq!(state.tracker.last_trained("ana", "triceps").await, Some(t0()));
        assert_eq!(
            state.last_requested.get("ana").await,
            Some(vec!["chest".to_string(), "triceps".to_string()])
        );
        assert_eq!(
            state
                .tracker
                .overdue("ana", t0() + ChronoDuration::days(8))
                .await,
            Overdue::Due(vec!["chest".to_string(), "triceps".to_string()])
        );
    }

    #[tokio::test]
    async fn test_provider_failure_leaves_state_untouched() {
        let state = Arc::new(CoachState::new());
        let planner = WorkoutPlanner::new(
            Arc::new(FailingCompletionProvider::new("invalid api key")),
            state.clone(),
            &CoachConfig::default(),
        );

        let err = planner.generate_at(&params(), t0()).await.unwrap_err();
        assert_eq!(err.to_string(), "Completion error: invalid api key");
        assert_eq!(state.tracker.overdue("ana", t0()).await, Overdue::NoHistory);
        assert!(state.last_requested.get("ana").await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_provider_times_out() {
        let state = Arc::new(CoachState::new());
        let provider = StaticCompletionProvider::new("late").with_delay(Duration::from_secs(120));
        let config = CoachConfig::default().with_completion_timeout(Duration::from_secs(5));
        let planner = WorkoutPlanner::new(Arc::new(provider), state.clone(), &config);

        let err = planner.generate_at(&params(), t0()).await.unwrap_err();
        assert!(matches!(err, CoachError::Timeout { operation: "completion", .. }));
        assert_eq!(state.tracker.overdue("ana", t0()).await, Overdue::NoHistory);
    }
}
