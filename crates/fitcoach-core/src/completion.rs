// Completion request types
//
// Provider-agnostic shape of a chat completion: an ordered list of role-tagged
// messages. Providers translate this into their own wire format.

use serde::{Deserialize, Serialize};

/// Message role in a completion exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionRole {
    System,
    User,
}

impl CompletionRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionRole::System => "system",
            CompletionRole::User => "user",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionMessage {
    pub role: CompletionRole,
    pub content: String,
}

impl CompletionMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: CompletionRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: CompletionRole::User,
            content: content.into(),
        }
    }
}

/// A single completion call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub messages: Vec<CompletionMessage>,
}

impl CompletionRequest {
    /// Persona instruction followed by one user instruction
    pub fn with_persona(persona: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self {
            messages: vec![
                CompletionMessage::system(persona),
                CompletionMessage::user(instruction),
            ],
        }
    }

    /// Content of the last user message, if any
    pub fn user_instruction(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == CompletionRole::User)
            .map(|m| m.content.as_str())
    }
}
