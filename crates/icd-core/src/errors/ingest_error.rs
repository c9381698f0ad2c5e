/// Ingestion errors.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// A source row failed validation. Counted and skipped, never fatal.
    #[error("invalid row at line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },

    #[error("cannot read {path}: {reason}")]
    SourceUnreadable { path: String, reason: String },

    #[error("CSV error: {reason}")]
    Csv { reason: String },
}
