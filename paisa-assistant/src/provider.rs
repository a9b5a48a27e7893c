//! Completion-provider boundary.
//!
//! One blocking HTTP call per question, no retries, no streaming. Provider
//! failures of any kind are flattened to a user-visible string at
//! [`answer_with`]; nothing here can abort the interaction.

use std::env;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::config::AssistantConfig;
use crate::prompt::{FinancialSummary, SYSTEM_PROMPT, build_user_prompt};

/// Prefix of the answer string shown when the provider fails.
const ERROR_PREFIX: &str = "Error generating answer";

/// Errors that can occur when talking to the completion provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The configured API key environment variable is missing or empty.
    #[error("API key environment variable {0} is missing or empty")]
    MissingApiKey(String),

    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not carry a completion.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

/// A black-box text completion capability.
pub trait CompletionProvider {
    fn complete(
        &self,
        question: &str,
        summary: &FinancialSummary,
    ) -> Result<String, ProviderError>;
}

/// OpenAI-compatible chat-completions response, reduced to what we read.
#[derive(Debug, Deserialize)]
struct ChatCompletion {
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

impl ChatCompletion {
    fn into_text(self) -> Result<String, ProviderError> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::MalformedResponse("no choices in response".to_string()))
    }
}

/// Blocking client for an OpenAI-compatible `/chat/completions` endpoint.
pub struct HttpCompletionProvider {
    config: AssistantConfig,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl HttpCompletionProvider {
    /// Reads the API key from the configured environment variable and
    /// builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingApiKey`] when the variable is unset
    /// or empty.
    pub fn new(config: AssistantConfig) -> Result<Self, ProviderError> {
        let api_key = match env::var(&config.api_key_env) {
            Ok(key) if !key.is_empty() => key,
            _ => return Err(ProviderError::MissingApiKey(config.api_key_env.clone())),
        };

        Ok(Self {
            config,
            api_key,
            client: reqwest::blocking::Client::new(),
        })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

impl CompletionProvider for HttpCompletionProvider {
    fn complete(
        &self,
        question: &str,
        summary: &FinancialSummary,
    ) -> Result<String, ProviderError> {
        let url = self.completions_url();
        let request_body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": build_user_prompt(question, summary) },
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        });

        debug!(model = %self.config.model, %url, "sending completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletion = response
            .json()
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        completion.into_text()
    }
}

/// Flattens provider failures into the displayed answer.
///
/// The interaction must never crash because the provider did; any error is
/// rendered with the `Error generating answer:` prefix and logged.
pub fn answer_with(
    provider: &dyn CompletionProvider,
    question: &str,
    summary: &FinancialSummary,
) -> String {
    match provider.complete(question, summary) {
        Ok(text) => text,
        Err(e) => {
            error!("completion failed: {e}");
            format!("{ERROR_PREFIX}: {e}")
        }
    }
}

/// Constructs the HTTP provider and answers in one step.
///
/// Construction failures (a missing API key) flatten to the same error
/// string as request failures, matching the single guarded region the
/// interaction expects.
pub fn generate_answer(
    config: &AssistantConfig,
    question: &str,
    summary: &FinancialSummary,
) -> String {
    match HttpCompletionProvider::new(config.clone()) {
        Ok(provider) => answer_with(&provider, question, summary),
        Err(e) => {
            error!("provider construction failed: {e}");
            format!("{ERROR_PREFIX}: {e}")
        }
    }
}
