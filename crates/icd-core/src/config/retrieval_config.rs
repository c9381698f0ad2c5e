use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of ranked results returned when the caller gives no limit.
    pub default_limit: usize,
    /// Maximum number of candidates fetched from the store before ranking.
    pub candidate_pool: usize,
    /// Optional TOML file extending the built-in synonym table.
    pub synonyms_path: Option<String>,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_limit: defaults::DEFAULT_RESULT_LIMIT,
            candidate_pool: defaults::DEFAULT_CANDIDATE_POOL,
            synonyms_path: None,
        }
    }
}
