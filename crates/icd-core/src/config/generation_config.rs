use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MAX_GENERATION_RETRIES;

/// Configuration for the text-generation collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// When false the guard always answers from the database only.
    pub enabled: bool,
    /// OpenAI-compatible chat completions endpoint.
    pub endpoint: String,
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Automatic retries after the first attempt. Clamped to [`MAX_GENERATION_RETRIES`].
    pub max_retries: u32,
    pub retry_backoff_ms: u64,
    pub temperature: f32,
}

impl GenerationConfig {
    /// Retries actually performed, never more than one.
    pub fn effective_max_retries(&self) -> u32 {
        self.max_retries.min(MAX_GENERATION_RETRIES)
    }

    /// Read the API key from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_GENERATION_ENABLED,
            endpoint: defaults::DEFAULT_GENERATION_ENDPOINT.to_string(),
            model: defaults::DEFAULT_GENERATION_MODEL.to_string(),
            api_key_env: defaults::DEFAULT_API_KEY_ENV.to_string(),
            timeout_secs: defaults::DEFAULT_GENERATION_TIMEOUT_SECS,
            max_retries: defaults::DEFAULT_GENERATION_MAX_RETRIES,
            retry_backoff_ms: defaults::DEFAULT_RETRY_BACKOFF_MS,
            temperature: defaults::DEFAULT_TEMPERATURE,
        }
    }
}
