// OpenAPI document for the Fitcoach API

use utoipa::OpenApi;

use crate::common::{ErrorBody, MessageResponse};
use crate::suggestions::{self, MuscleGroupsResponse, SuggestionResponse};
use crate::workouts::{
    self, GenerateWorkoutRequest, GenerateWorkoutResponse, LogWorkoutRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        workouts::generate_workout,
        workouts::log_workout,
        suggestions::suggest_muscle_groups,
        suggestions::list_muscle_groups,
    ),
    components(
        schemas(
            GenerateWorkoutRequest, GenerateWorkoutResponse,
            LogWorkoutRequest,
            SuggestionResponse, MuscleGroupsResponse,
            MessageResponse, ErrorBody,
        )
    ),
    tags(
        (name = "workouts", description = "Workout plan generation and workout logging"),
        (name = "suggestions", description = "Muscle group balance suggestions")
    ),
    info(
        title = "Fitcoach API",
        version = "0.1.0",
        description = "Generate workout plans, log workouts, and find neglected muscle groups",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;
