//! Blocking HTTP generator with a bounded timeout and at most one retry.

use std::time::Duration;

use icd_core::config::GenerationConfig;
use icd_core::errors::{GenerationError, IcdResult};
use icd_core::traits::IExplanationGenerator;

use crate::protocol::{self, ChatRequest};

/// OpenAI-compatible chat completions client.
pub struct OpenAiGenerator {
    config: GenerationConfig,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl std::fmt::Debug for OpenAiGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiGenerator")
            .field("endpoint", &self.config.endpoint)
            .field("model", &self.config.model)
            .finish_non_exhaustive()
    }
}

impl OpenAiGenerator {
    /// Build from config, reading the API key from `config.api_key_env`.
    pub fn from_config(config: GenerationConfig) -> IcdResult<Self> {
        let api_key = config
            .api_key()
            .ok_or_else(|| GenerationError::MissingApiKey {
                env_var: config.api_key_env.clone(),
            })?;
        Self::with_api_key(config, api_key)
    }

    pub fn with_api_key(config: GenerationConfig, api_key: impl Into<String>) -> IcdResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .build()
            .map_err(|e| GenerationError::Network {
                reason: e.to_string(),
            })?;
        Ok(Self {
            config,
            api_key: api_key.into(),
            client,
        })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    fn attempt(&self, request: &ChatRequest) -> Result<String, GenerationError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().map_err(|e| self.transport_error(e))?;
        if status.is_success() {
            protocol::parse_response(&body)
        } else {
            Err(protocol::parse_error(status.as_u16(), &body))
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> GenerationError {
        if e.is_timeout() {
            GenerationError::Timeout {
                after_secs: self.config.timeout_secs,
            }
        } else {
            GenerationError::Network {
                reason: e.to_string(),
            }
        }
    }
}

impl IExplanationGenerator for OpenAiGenerator {
    fn generate(&self, system_prompt: &str, user_query: &str) -> IcdResult<String> {
        let request = ChatRequest::new(&self.config, system_prompt, user_query);
        let max_retries = self.config.effective_max_retries();
        let backoff = Duration::from_millis(self.config.retry_backoff_ms);

        let mut attempt = 0;
        loop {
            match self.attempt(&request) {
                Ok(text) => {
                    tracing::debug!(model = %self.config.model, attempt, "generation succeeded");
                    return Ok(text);
                }
                Err(e) if attempt < max_retries && protocol::is_transient(&e) => {
                    attempt += 1;
                    tracing::debug!(error = %e, attempt, ?backoff, "generation failed, retrying");
                    std::thread::sleep(backoff);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn name(&self) -> &str {
        "openai"
    }
}
