use std::sync::Arc;
use tracing::debug;

use crate::llm::{Message, StatelessLlm};
use crate::prompt;

/// User-safe text substituted whenever the upstream call fails. The
/// raw provider error never reaches the client.
pub const FALLBACK_TEXT: &str = "I'm sorry, I encountered an error while \
processing your request. Please try again later.";

/// The single shared chat relay: builds the system+user exchange,
/// forwards it to the provider, and returns the generated text.
/// Stateless and memoryless; every call is an independent single turn.
pub struct ChatRelay {
    llm: Arc<dyn StatelessLlm>,
}

impl ChatRelay {
    pub fn new(llm: Arc<dyn StatelessLlm>) -> Self {
        Self { llm }
    }

    pub async fn answer(&self, query: &str, language: &str) -> Result<String, anyhow::Error> {
        debug!("Relaying query ({} chars, language={})", query.len(), language);
        let system = prompt::system_instruction(language);
        let messages = [Message::user(query)];
        self.llm.chat_completion(&messages, Some(&system)).await
    }
}
