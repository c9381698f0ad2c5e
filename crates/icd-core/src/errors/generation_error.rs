/// Failures of the text-generation collaborator.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("API key not found, set {env_var}")]
    MissingApiKey { env_var: String },

    #[error("generation timed out after {after_secs}s")]
    Timeout { after_secs: u64 },

    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("quota exceeded: {reason}")]
    QuotaExceeded { reason: String },

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("failed to parse generation response: {reason}")]
    ParseError { reason: String },

    #[error("generator panicked: {reason}")]
    Panicked { reason: String },
}
