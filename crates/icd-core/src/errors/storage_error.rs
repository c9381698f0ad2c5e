/// Storage-layer errors for the SQLite graph store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The database could not be opened or a connection could not be obtained.
    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    /// A read failed on the store side (bad statement, locked table, corrupt row).
    #[error("query failed: {reason}")]
    QueryFailed { reason: String },

    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },
}
