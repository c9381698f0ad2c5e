//! Everything a command needs: resolved config and the opened store.

use std::path::{Path, PathBuf};

use anyhow::Context;

use icd_core::IcdConfig;
use icd_storage::StorageEngine;

pub struct AppContext {
    pub config: IcdConfig,
    pub store: StorageEngine,
}

impl AppContext {
    /// Load config (missing file means defaults), apply the `--db` override and
    /// open the store. Failing to open the store is fatal for every command.
    pub fn open(config_path: &Path, db_override: Option<PathBuf>) -> anyhow::Result<Self> {
        let mut config = IcdConfig::load(config_path)
            .with_context(|| format!("cannot load config {}", config_path.display()))?;
        if let Some(db) = db_override {
            config.storage.db_path = db.display().to_string();
        }
        Self::with_config(config)
    }

    pub fn with_config(config: IcdConfig) -> anyhow::Result<Self> {
        let db_path = PathBuf::from(&config.storage.db_path);
        let store = StorageEngine::open_with_config(&db_path, &config.storage)
            .with_context(|| format!("cannot open code database {}", db_path.display()))?;
        Ok(Self { config, store })
    }
}
