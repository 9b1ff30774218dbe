use std::sync::Arc;

use crate::config::Config;
use crate::llm::{self, StatelessLlm};
use crate::relay::ChatRelay;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub relay: Arc<ChatRelay>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let llm = llm::create_llm(&config.llm_config)?;
        Ok(Self::with_llm(config, llm))
    }

    /// Build state around an already-constructed LLM client; tests use
    /// this to substitute a fake provider.
    pub fn with_llm(config: Config, llm: Arc<dyn StatelessLlm>) -> Self {
        Self {
            config,
            relay: Arc::new(ChatRelay::new(llm)),
        }
    }
}
