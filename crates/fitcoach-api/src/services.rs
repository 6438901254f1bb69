// Coaching services shared by the routes
//
// Built once at startup from the configured collaborators.

use fitcoach_core::{
    CoachConfig, CoachState, CompletionProvider, WorkoutLogRecorder, WorkoutLogSink,
    WorkoutPlanner,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct CoachServices {
    pub state: Arc<CoachState>,
    pub planner: Arc<WorkoutPlanner>,
    pub recorder: Arc<WorkoutLogRecorder>,
}

impl CoachServices {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        sink: Arc<dyn WorkoutLogSink>,
        config: &CoachConfig,
    ) -> Self {
        let state = Arc::new(CoachState::from_config(config));
        Self {
            planner: Arc::new(WorkoutPlanner::new(provider, state.clone(), config)),
            recorder: Arc::new(WorkoutLogRecorder::new(sink, state.clone(), config)),
            state,
        }
    }
}
