// Fitcoach Core
//
// Transport-agnostic coaching logic shared by the API server and tests.
//
// Key design decisions:
// - Per-user state lives in UserMap: one async mutex per user id, so concurrent
//   requests for the same user never lose updates
// - Collaborators (CompletionProvider, WorkoutLogSink) are traits; OpenAI and
//   Google Sheets implementations live in their own crates
// - Operations return CoachError; HTTP status mapping happens in the API only
// - In-memory state is updated only after the external call succeeds

pub mod completion;
pub mod config;
pub mod error;
pub mod history;
pub mod log_entry;
pub mod muscle_group;
pub mod planner;
pub mod recorder;
pub mod state;
pub mod tracker;
pub mod traits;
pub mod user_map;

// In-memory collaborators for tests and local runs
pub mod memory;

// Re-exports for convenience
pub use completion::{CompletionMessage, CompletionRequest, CompletionRole};
pub use config::{CoachConfig, DEFAULT_PERSONA};
pub use error::{CoachError, Result};
pub use history::{FeedbackHistory, FeedbackRecord, LastRequestedGroups};
pub use log_entry::WorkoutLogEntry;
pub use muscle_group::{MuscleGroup, UnknownMuscleGroup};
pub use planner::{WorkoutParams, WorkoutPlanner};
pub use recorder::{LogWorkout, WorkoutLogRecorder};
pub use state::CoachState;
pub use tracker::{FreshnessTracker, Overdue, DEFAULT_FRESHNESS_DAYS};
pub use traits::{CompletionProvider, WorkoutLogSink};
pub use user_map::UserMap;
