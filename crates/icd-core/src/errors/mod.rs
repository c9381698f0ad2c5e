//! Error handling for icdgraph.
//! One error enum per subsystem, `thiserror` only, wrapped by [`IcdError`].

pub mod config_error;
pub mod generation_error;
pub mod ingest_error;
pub mod retrieval_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use generation_error::GenerationError;
pub use ingest_error::IngestError;
pub use retrieval_error::RetrievalError;
pub use storage_error::StorageError;

/// Top-level error for every fallible operation in the workspace.
#[derive(Debug, thiserror::Error)]
pub enum IcdError {
    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("retrieval error: {0}")]
    RetrievalError(#[from] RetrievalError),

    #[error("generation error: {0}")]
    GenerationError(#[from] GenerationError),

    #[error("ingest error: {0}")]
    IngestError(#[from] IngestError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),
}

impl IcdError {
    /// True when the store could not be reached at all, as opposed to a single failed query.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, IcdError::StorageError(StorageError::Unavailable { .. }))
    }
}

pub type IcdResult<T> = Result<T, IcdError>;
