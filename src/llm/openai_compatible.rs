use async_trait::async_trait;
use anyhow::{anyhow, Context};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

use super::interface::{Message, StatelessLlm};

/// Chat-completion client for OpenAI-compatible providers (Groq,
/// OpenAI, Deepseek, Mistral, ...). Non-streaming: one POST per
/// completion, full body awaited.
pub struct OpenAiCompatibleLlm {
    client: Client,
    model: String,
    base_url: String,
    api_key: String,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl OpenAiCompatibleLlm {
    pub fn new(
        model: String,
        base_url: String,
        api_key: String,
        temperature: f32,
        timeout: Duration,
    ) -> Result<Self, anyhow::Error> {
        info!(
            "Initialized OpenAiCompatibleLlm: model={}, base_url={}",
            model, base_url
        );
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            model,
            base_url,
            api_key,
            temperature,
        })
    }

    async fn send(&self, body: &CompletionRequest<'_>) -> Result<reqwest::Response, reqwest::Error> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        self.client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
    }
}

fn is_transient(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect()
}

#[async_trait]
impl StatelessLlm for OpenAiCompatibleLlm {
    async fn chat_completion(
        &self,
        messages: &[Message],
        system: Option<&str>,
    ) -> Result<String, anyhow::Error> {
        let mut all_messages = Vec::with_capacity(messages.len() + 1);
        if let Some(sys) = system {
            all_messages.push(Message::system(sys));
        }
        all_messages.extend_from_slice(messages);

        let body = CompletionRequest {
            model: &self.model,
            messages: &all_messages,
            temperature: self.temperature,
        };

        // One retry on connect/timeout failures only; anything the
        // provider actually answered is not retried.
        let response = match self.send(&body).await {
            Ok(resp) => resp,
            Err(err) if is_transient(&err) => {
                warn!("Transient error calling provider, retrying once: {}", err);
                self.send(&body).await?
            }
            Err(err) => return Err(err.into()),
        };

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            let truncated: String = detail.chars().take(200).collect();
            return Err(anyhow!("provider returned {}: {}", status, truncated));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .context("malformed provider response body")?;
        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("provider returned no choices"))?;
        Ok(choice.message.content)
    }
}
