// Core traits for pluggable collaborators
//
// These traits let the generator and recorder run against:
// - Real HTTP services in production (OpenAI, Google Sheets)
// - In-memory implementations in tests

use async_trait::async_trait;

use crate::completion::CompletionRequest;
use crate::error::Result;

// ============================================================================
// CompletionProvider - Text generation
// ============================================================================

/// Trait for text-completion providers
///
/// Implementations return the text of the first completion choice unmodified.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String>;

    /// Model identifier used for logging
    fn model(&self) -> &str;
}

// ============================================================================
// WorkoutLogSink - Append-only workout log
// ============================================================================

/// Trait for append-only row logs
///
/// `append_row` is the only operation; rows are never edited afterwards.
#[async_trait]
pub trait WorkoutLogSink: Send + Sync {
    async fn append_row(&self, row: Vec<String>) -> Result<()>;
}
