/// icdgraph version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Character position after which the display separator is inserted.
pub const DISPLAY_SEPARATOR_POS: usize = 3;

/// Separator used by the display form of a code (`A00.1`).
pub const DISPLAY_SEPARATOR: char = '.';

/// Tokens at or below this length are dropped from query expansion unless mapped.
pub const MIN_TOKEN_LEN: usize = 2;

/// Number of fields in an ingestion row.
pub const INGEST_ROW_ARITY: usize = 6;

/// Upper bound on automatic retries of the generation call.
pub const MAX_GENERATION_RETRIES: u32 = 1;
