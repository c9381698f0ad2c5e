//! Workspace configuration, loaded from TOML. Every section falls back to
//! [`defaults`] for fields the file leaves out.

pub mod defaults;
pub mod generation_config;
pub mod observability_config;
pub mod retrieval_config;
pub mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use generation_config::GenerationConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;
pub use storage_config::StorageConfig;

use crate::errors::{ConfigError, IcdResult};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IcdConfig {
    pub storage: StorageConfig,
    pub retrieval: RetrievalConfig,
    pub generation: GenerationConfig,
    pub observability: ObservabilityConfig,
}

impl IcdConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml(source: &str) -> IcdResult<Self> {
        let config: IcdConfig = toml::from_str(source).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file. A missing file yields the defaults.
    pub fn load(path: &Path) -> IcdResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&source)
    }

    fn validate(&self) -> IcdResult<()> {
        if self.retrieval.default_limit == 0 {
            return Err(invalid("retrieval.default_limit", "must be at least 1"));
        }
        if self.retrieval.candidate_pool < self.retrieval.default_limit {
            return Err(invalid(
                "retrieval.candidate_pool",
                "must not be smaller than retrieval.default_limit",
            ));
        }
        if self.storage.read_pool_size == 0 {
            return Err(invalid("storage.read_pool_size", "must be at least 1"));
        }
        if self.generation.timeout_secs == 0 {
            return Err(invalid("generation.timeout_secs", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> crate::errors::IcdError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
