use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Interface for a stateless language model.
/// Stateless means the LLM doesn't store memory, system prompts, or
/// user messages between calls; every completion is independent.
#[async_trait]
pub trait StatelessLlm: Send + Sync {
    /// Generate a chat completion and return the full response text.
    /// `system`, when present, is prepended as the system turn.
    async fn chat_completion(
        &self,
        messages: &[Message],
        system: Option<&str>,
    ) -> Result<String, anyhow::Error>;
}

impl std::fmt::Debug for dyn StatelessLlm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StatelessLlm")
    }
}
