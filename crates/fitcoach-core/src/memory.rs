// In-memory collaborators for tests and local runs
//
// These implementations keep everything in memory, making them useful for:
// - Unit tests of the generator and recorder
// - Router tests in fitcoach-api

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::completion::CompletionRequest;
use crate::error::{CoachError, Result};
use crate::traits::{CompletionProvider, WorkoutLogSink};

// ============================================================================
// StaticCompletionProvider - Returns a fixed reply and records requests
// ============================================================================

#[derive(Debug, Clone)]
pub struct StaticCompletionProvider {
    reply: String,
    delay: Option<Duration>,
    requests: Arc<RwLock<Vec<CompletionRequest>>>,
}

impl StaticCompletionProvider {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            delay: None,
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Sleep before replying (for timeout tests)
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Requests received so far
    pub async fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl CompletionProvider for StaticCompletionProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        self.requests.write().await.push(request);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.reply.clone())
    }

    fn model(&self) -> &str {
        "static"
    }
}

// ============================================================================
// FailingCompletionProvider - Always errors
// ============================================================================

#[derive(Debug, Clone)]
pub struct FailingCompletionProvider {
    message: String,
}

impl FailingCompletionProvider {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl CompletionProvider for FailingCompletionProvider {
    async fn complete(&self, _request: CompletionRequest) -> Result<String> {
        Err(CoachError::completion(self.message.clone()))
    }

    fn model(&self) -> &str {
        "failing"
    }
}

// ============================================================================
// InMemoryLogSink - Collects appended rows
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct InMemoryLogSink {
    rows: Arc<RwLock<Vec<Vec<String>>>>,
}

impl InMemoryLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows appended so far, oldest first
    pub async fn rows(&self) -> Vec<Vec<String>> {
        self.rows.read().await.clone()
    }
}

#[async_trait]
impl WorkoutLogSink for InMemoryLogSink {
    async fn append_row(&self, row: Vec<String>) -> Result<()> {
        self.rows.write().await.push(row);
        Ok(())
    }
}

// ============================================================================
// FailingLogSink - Always errors
// ============================================================================

#[derive(Debug, Clone)]
pub struct FailingLogSink {
    message: String,
}

impl FailingLogSink {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl WorkoutLogSink for FailingLogSink {
    async fn append_row(&self, _row: Vec<String>) -> Result<()> {
        Err(CoachError::log_append(self.message.clone()))
    }
}
