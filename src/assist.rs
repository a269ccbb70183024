//! Optional generative-assist boundary.
//!
//! The assist service enriches per-entity files beyond their static
//! templates. It is never required for correctness: the caller constructs a
//! [`GenerativeAssist`] only when it has a credential, and every failure is
//! caught at the call site and answered with the local template. The core
//! never reads ambient environment state; configuration arrives through an
//! explicit [`AssistConfig`] populated at the CLI boundary.

use crate::error::ScaffoldError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Clone)]
pub struct AssistConfig {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl AssistConfig {
    /// Config with defaults for everything but the credential.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    text: String,
}

/// Capability handle for the text-generation service. Absence of an
/// instance and a failed call are treated identically by profiles.
#[derive(Debug, Clone)]
pub struct GenerativeAssist {
    client: reqwest::Client,
    config: AssistConfig,
}

impl GenerativeAssist {
    pub fn new(config: AssistConfig) -> Result<Self, ScaffoldError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|error| ScaffoldError::Assist(error.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Request generated source text for a prompt. Any transport, auth, or
    /// decoding failure surfaces as a recoverable [`ScaffoldError::Assist`].
    pub async fn generate(&self, prompt: &str) -> Result<String, ScaffoldError> {
        let request = CompletionRequest {
            model: &self.config.model,
            prompt,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|error| ScaffoldError::Assist(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScaffoldError::Assist(format!(
                "assist endpoint returned {status}"
            )));
        }

        let body: CompletionResponse = response
            .json()
            .await
            .map_err(|error| ScaffoldError::Assist(error.to_string()))?;

        body.choices
            .into_iter()
            .map(|choice| choice.text.trim().to_string())
            .find(|text| !text.is_empty())
            .ok_or_else(|| ScaffoldError::Assist("response contained no text".to_string()))
    }
}
