use std::sync::Arc;
use std::time::Duration;
use anyhow::{anyhow, Context, Result};
use tracing::info;

use crate::config::LlmConfig;
use crate::llm::interface::StatelessLlm;
use crate::llm::openai_compatible::OpenAiCompatibleLlm;

/// Create an LLM client from configuration. The API key is read from
/// the environment variable named in the config, never from the file.
pub fn create_llm(config: &LlmConfig) -> Result<Arc<dyn StatelessLlm>> {
    info!("Initializing LLM provider: {}", config.provider);

    match config.provider.as_str() {
        "openai_compatible_llm" | "openai_llm" | "groq_llm" | "deepseek_llm"
        | "mistral_llm" => {
            let api_key = std::env::var(&config.api_key_env).with_context(|| {
                format!("API key environment variable {} is not set", config.api_key_env)
            })?;
            Ok(Arc::new(OpenAiCompatibleLlm::new(
                config.model.clone(),
                config.base_url.clone(),
                api_key,
                config.temperature,
                Duration::from_secs(config.timeout_secs),
            )?))
        }
        other => Err(anyhow!("Unsupported LLM provider: {}", other)),
    }
}
