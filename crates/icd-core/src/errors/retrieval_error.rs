/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("search failed: {reason}")]
    SearchFailed { reason: String },

    #[error("invalid synonym table {path}: {reason}")]
    InvalidSynonymTable { path: String, reason: String },
}
