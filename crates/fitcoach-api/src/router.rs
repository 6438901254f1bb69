// Router assembly
//
// Kept separate from main so the full route table can be exercised in tests
// with in-memory collaborators.

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::common::MessageResponse;
use crate::openapi::ApiDoc;
use crate::services::CoachServices;
use crate::{suggestions, workouts};

pub const RUNNING_MESSAGE: &str = "API is running successfully!";

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(RUNNING_MESSAGE))
}

/// Build the application router
pub fn build_router(services: &CoachServices, api_prefix: &str) -> Router {
    let api_routes = Router::new()
        .merge(workouts::routes(workouts::AppState::new(services)))
        .merge(suggestions::routes(suggestions::AppState::new(
            services.state.clone(),
        )));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(build_router_with_prefix(api_routes, api_prefix))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}

/// Build router with optional API prefix
pub fn build_router_with_prefix<S: Clone + Send + Sync + 'static>(
    api_routes: Router<S>,
    api_prefix: &str,
) -> Router<S> {
    if api_prefix.is_empty() {
        api_routes
    } else {
        Router::new().nest(api_prefix, api_routes)
    }
}
