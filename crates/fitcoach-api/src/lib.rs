// Fitcoach API Library
// Decision: Library + thin binary so the router can be tested without a network

pub mod common;
pub mod config;
pub mod openapi;
pub mod router;
pub mod services;
pub mod suggestions;
pub mod workouts;

pub use config::ApiConfig;
pub use router::build_router;
pub use services::CoachServices;
