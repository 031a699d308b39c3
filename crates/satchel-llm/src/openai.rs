//! OpenAI Responses API client
//!
//! Sends one completion request per call and extracts the answer text from
//! either the flat `output_text` field or the structured `output` list. The
//! response payload is handled as loose JSON so unexpected provider shapes
//! never fail the parse, and the raw body can be relayed on provider errors.

use async_trait::async_trait;
use reqwest::Client;
use satchel_core::{Completion, CompletionClient, LlmConfig, PromptBundle, RelayError, Result};
use serde::Serialize;
use serde_json::Value;

/// Placeholder answer when the provider returns no recoverable text.
const NO_OUTPUT_FALLBACK: &str = "(No text output found.)";

/// OpenAI API client
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ResponsesRequest {
    model: String,
    instructions: String,
    input: String,
    max_output_tokens: u32,
}

impl OpenAiClient {
    /// Create a new client against the public OpenAI endpoint
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        max_output_tokens: u32,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: model.into(),
            max_output_tokens,
        }
    }

    /// Create from config. The API key is required here, at startup, so a
    /// misconfigured deployment fails before it accepts traffic.
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_ref()
            .ok_or_else(|| RelayError::Config("OPENAI_API_KEY is required".to_string()))?;

        Ok(Self {
            client: Client::new(),
            api_key: api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            max_output_tokens: config.max_output_tokens,
        })
    }

    /// Set custom base URL (for Azure or compatible APIs)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Configured model name
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, prompt: &PromptBundle) -> Result<Completion> {
        let request = ResponsesRequest {
            model: self.model.clone(),
            instructions: prompt.instructions.clone(),
            input: prompt.input.clone(),
            max_output_tokens: self.max_output_tokens,
        };

        let started = std::time::Instant::now();

        let response = self
            .client
            .post(format!("{}/responses", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| RelayError::Request(format!("Request failed: {e}")))?;

        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .map_err(|e| RelayError::Request(format!("Failed to parse response: {e}")))?;

        if !status.is_success() {
            return Err(RelayError::Provider {
                message: provider_error_message(&payload),
                raw: payload,
            });
        }

        tracing::debug!(
            model = %self.model,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "completion finished"
        );

        Ok(Completion {
            answer: extract_answer(&payload),
            model: self.model.clone(),
        })
    }
}

/// Error message reported by the provider, or a generic fallback.
fn provider_error_message(payload: &Value) -> String {
    payload
        .pointer("/error/message")
        .and_then(Value::as_str)
        .unwrap_or("OpenAI error")
        .to_string()
}

/// Extract answer text from a Responses API payload.
///
/// Two-branch decision: use the flat `output_text` field when it is a
/// string; otherwise scan the `output` list for message items and
/// concatenate their text fragments in order. An empty result takes the
/// fixed placeholder.
fn extract_answer(payload: &Value) -> String {
    let mut answer = String::new();

    if let Some(text) = payload.get("output_text").and_then(Value::as_str) {
        answer.push_str(text);
    } else if let Some(items) = payload.get("output").and_then(Value::as_array) {
        for item in items {
            if item.get("type").and_then(Value::as_str) != Some("message") {
                continue;
            }
            let Some(parts) = item.get("content").and_then(Value::as_array) else {
                continue;
            };
            for part in parts {
                if part.get("type").and_then(Value::as_str) == Some("output_text") {
                    if let Some(text) = part.get("text").and_then(Value::as_str) {
                        answer.push_str(text);
                    }
                }
            }
        }
    }

    if answer.is_empty() {
        NO_OUTPUT_FALLBACK.to_string()
    } else {
        answer
    }
}
