// Muscle-group suggestion HTTP routes

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use axum_extra::extract::WithRejection;
use chrono::Utc;
use fitcoach_core::{CoachState, MuscleGroup, Overdue};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::common::{ApiError, ErrorBody};

pub const NO_HISTORY_MESSAGE: &str =
    "No workout history found. Generate a workout to start tracking your muscle groups.";
pub const BALANCED_MESSAGE: &str = "Your workout balance looks great!";

/// App state for suggestion routes
#[derive(Clone)]
pub struct AppState {
    pub coach: Arc<CoachState>,
}

impl AppState {
    pub fn new(coach: Arc<CoachState>) -> Self {
        Self { coach }
    }
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SuggestQuery {
    /// User to check
    pub user: String,
}

/// Either an informational message or the groups that are due.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum SuggestionResponse {
    Suggested { suggested_muscle_groups: Vec<String> },
    Message { message: String },
}

impl From<Overdue> for SuggestionResponse {
    fn from(overdue: Overdue) -> Self {
        match overdue {
            Overdue::NoHistory => SuggestionResponse::Message {
                message: NO_HISTORY_MESSAGE.to_string(),
            },
            Overdue::AllFresh => SuggestionResponse::Message {
                message: BALANCED_MESSAGE.to_string(),
            },
            Overdue::Due(groups) => SuggestionResponse::Suggested {
                suggested_muscle_groups: groups,
            },
        }
    }
}

/// Canonical muscle groups.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MuscleGroupsResponse {
    #[schema(example = json!(["chest", "back"]))]
    pub muscle_groups: Vec<String>,
}

/// Create suggestion routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/suggest_muscle_groups", get(suggest_muscle_groups))
        .route("/muscle_groups", get(list_muscle_groups))
        .with_state(state)
}

/// GET /suggest_muscle_groups - Muscle groups not trained within the freshness window
#[utoipa::path(
    get,
    path = "/suggest_muscle_groups",
    params(SuggestQuery),
    responses(
        (status = 200, description = "Suggestion or status message", body = SuggestionResponse),
        (status = 400, description = "Missing user parameter", body = ErrorBody)
    ),
    tag = "suggestions"
)]
pub async fn suggest_muscle_groups(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<SuggestQuery>, ApiError>,
) -> Json<SuggestionResponse> {
    let overdue = state.coach.tracker.overdue(&query.user, Utc::now()).await;
    tracing::debug!(user = %query.user, result = ?overdue, "Computed muscle group suggestions");
    Json(SuggestionResponse::from(overdue))
}

/// GET /muscle_groups - Canonical muscle group names
#[utoipa::path(
    get,
    path = "/muscle_groups",
    responses(
        (status = 200, description = "Canonical muscle groups", body = MuscleGroupsResponse)
    ),
    tag = "suggestions"
)]
pub async fn list_muscle_groups() -> Json<MuscleGroupsResponse> {
    Json(MuscleGroupsResponse {
        muscle_groups: MuscleGroup::ALL
            .iter()
            .map(|g| g.as_str().to_string())
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_shapes() {
        let fresh = serde_json::to_value(SuggestionResponse::from(Overdue::AllFresh)).unwrap();
        assert_eq!(fresh, json!({"message": "Your workout balance looks great!"}));

        let due = serde_json::to_value(SuggestionResponse::from(Overdue::Due(vec![
            "back".into(),
            "chest".into(),
        ])))
        .unwrap();
        assert_eq!(due, json!({"suggested_muscle_groups": ["back", "chest"]}));
    }
}
