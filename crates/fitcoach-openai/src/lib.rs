// OpenAI Completion Provider
//
// This crate provides an OpenAI-compatible CompletionProvider implementation.
// It implements the CompletionProvider trait from fitcoach-core, so the plan
// generator can talk to OpenAI's chat completion API (or any compatible one).

mod driver;
mod types;


pub use driver::{OpenAICompletionDriver, DEFAULT_API_URL, DEFAULT_MODEL};
pub use types::{ChatRequest, OpenAiMessage, OpenAiResponse};

// Re-export core trait for convenience
pub use fitcoach_core::CompletionProvider;
