// Workout plan and workout log HTTP routes

use axum::{extract::State, routing::post, Json, Router};
use axum_extra::extract::WithRejection;
use fitcoach_core::{LogWorkout, WorkoutLogRecorder, WorkoutParams, WorkoutPlanner};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::common::{ApiError, ErrorBody, MessageResponse};
use crate::services::CoachServices;

pub const WORKOUT_LOGGED_MESSAGE: &str = "Workout logged successfully!";

/// App state for workout routes
#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<WorkoutPlanner>,
    pub recorder: Arc<WorkoutLogRecorder>,
}

impl AppState {
    pub fn new(services: &CoachServices) -> Self {
        Self {
            planner: services.planner.clone(),
            recorder: services.recorder.clone(),
        }
    }
}

/// Request to generate a workout plan.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateWorkoutRequest {
    /// User the plan is for; used to track trained muscle groups.
    #[schema(example = "ana")]
    pub user: String,
    /// Training goal, free text.
    #[schema(example = "hypertrophy")]
    pub goal: String,
    /// Muscle groups to focus on, in the order they should appear.
    #[schema(example = json!(["chest", "triceps"]))]
    pub muscle_groups: Vec<String>,
    /// Session length, free text.
    #[schema(example = "45 minutes")]
    pub length: String,
    /// Lifter level, free text.
    #[schema(example = "intermediate")]
    pub difficulty: String,
}

impl From<GenerateWorkoutRequest> for WorkoutParams {
    fn from(req: GenerateWorkoutRequest) -> Self {
        WorkoutParams {
            user: req.user,
            goal: req.goal,
            muscle_groups: req.muscle_groups,
            length: req.length,
            difficulty: req.difficulty,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateWorkoutResponse {
    /// Plan text exactly as returned by the completion provider.
    pub workout_plan: String,
}

/// Request to log a completed workout.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogWorkoutRequest {
    #[schema(example = "ana")]
    pub user: String,
    #[schema(example = json!(["legs"]))]
    pub muscle_groups: Vec<String>,
    #[schema(example = json!(["squat", "leg press"]))]
    pub completed_exercises: Vec<String>,
    #[schema(example = json!(["lunges"]))]
    pub skipped_exercises: Vec<String>,
    #[schema(example = json!(["knee pain"]))]
    pub reasons: Vec<String>,
}

impl From<LogWorkoutRequest> for LogWorkout {
    fn from(req: LogWorkoutRequest) -> Self {
        LogWorkout {
            user: req.user,
            muscle_groups: req.muscle_groups,
            completed_exercises: req.completed_exercises,
            skipped_exercises: req.skipped_exercises,
            reasons: req.reasons,
        }
    }
}

/// Create workout routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/generate_workout", post(generate_workout))
        .route("/log_workout", post(log_workout))
        .with_state(state)
}

/// POST /generate_workout - Generate a workout plan
#[utoipa::path(
    post,
    path = "/generate_workout",
    request_body = GenerateWorkoutRequest,
    responses(
        (status = 200, description = "Workout plan generated", body = GenerateWorkoutResponse),
        (status = 422, description = "Malformed request body", body = ErrorBody),
        (status = 500, description = "Completion provider failed", body = ErrorBody)
    ),
    tag = "workouts"
)]
pub async fn generate_workout(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<GenerateWorkoutRequest>, ApiError>,
) -> Result<Json<GenerateWorkoutResponse>, ApiError> {
    let params = WorkoutParams::from(req);

    let workout_plan = state.planner.generate(&params).await.map_err(|e| {
        tracing::error!(user = %params.user, "Failed to generate workout: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(GenerateWorkoutResponse { workout_plan }))
}

/// POST /log_workout - Append a workout to the log
#[utoipa::path(
    post,
    path = "/log_workout",
    request_body = LogWorkoutRequest,
    responses(
        (status = 200, description = "Workout logged", body = MessageResponse),
        (status = 422, description = "Malformed request body", body = ErrorBody),
        (status = 500, description = "Workout log append failed", body = ErrorBody)
    ),
    tag = "workouts"
)]
pub async fn log_workout(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<LogWorkoutRequest>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user = req.user.clone();

    state
        .recorder
        .record_log(LogWorkout::from(req))
        .await
        .map_err(|e| {
            tracing::error!(user = %user, "Failed to log workout: {}", e);
            ApiError::from(e)
        })?;

    Ok(Json(MessageResponse::new(WORKOUT_LOGGED_MESSAGE)))
}
