// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "icdgraph.db";
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Retrieval ---
pub const DEFAULT_RESULT_LIMIT: usize = 10;
pub const DEFAULT_CANDIDATE_POOL: usize = 200;

// --- Generation ---
pub const DEFAULT_GENERATION_ENABLED: bool = true;
pub const DEFAULT_GENERATION_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_GENERATION_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_GENERATION_MAX_RETRIES: u32 = 1;
pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 500;
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
