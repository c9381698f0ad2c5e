//! StorageEngine: owns the ConnectionPool, runs migrations at startup,
//! implements ICodeStore.

use std::path::Path;

use icd_core::config::StorageConfig;
use icd_core::errors::IcdResult;
use icd_core::models::{CandidateQuery, CodeDetails, CodeEntry, CodeRecord, GraphCounts};
use icd_core::traits::ICodeStore;

use crate::migrations;
use crate::pool::read_pool::ReadPool;
use crate::pool::ConnectionPool;
use crate::queries;

/// The code graph store. Construct once and hand a reference to every component.
pub struct StorageEngine {
    pool: ConnectionPool,
    /// When true, use the read pool for read operations (file-backed mode).
    /// When false, route all reads through the writer (in-memory mode,
    /// because in-memory read pool connections are isolated databases).
    use_read_pool: bool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk with default pool settings.
    pub fn open(path: &Path) -> IcdResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    /// Open a file-backed engine using the pool size and busy timeout from config.
    /// `path` takes precedence over `config.db_path`.
    pub fn open_with_config(path: &Path, config: &StorageConfig) -> IcdResult<Self> {
        let pool = ConnectionPool::open(path, config.read_pool_size, config.busy_timeout_ms)?;
        let engine = Self {
            pool,
            use_read_pool: true,
        };
        engine.initialize()?;
        tracing::info!(
            path = %path.display(),
            readers = engine.pool.readers.size(),
            "code graph store opened"
        );
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    /// Routes all reads through the writer since in-memory read pool
    /// connections can't see the writer's changes.
    pub fn open_in_memory() -> IcdResult<Self> {
        let pool = ConnectionPool::open_in_memory(1)?;
        let engine = Self {
            pool,
            use_read_pool: false,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Run migrations.
    fn initialize(&self) -> IcdResult<()> {
        self.pool.writer.with_conn(migrations::run_migrations)
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Number of connections serving reads.
    pub fn reader_count(&self) -> usize {
        if self.use_read_pool {
            self.pool.readers.size()
        } else {
            1
        }
    }

    /// Default read pool size for file-backed engines.
    pub fn default_reader_count() -> usize {
        ReadPool::default_size()
    }

    /// Execute a read-only query on the best available connection.
    /// File-backed: uses the read pool (no writer contention).
    /// In-memory: uses the writer (read pool is isolated).
    fn with_reader<F, T>(&self, f: F) -> IcdResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> IcdResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn(f)
        }
    }
}

impl ICodeStore for StorageEngine {
    fn upsert(&self, entry: &CodeEntry) -> IcdResult<()> {
        self.pool
            .writer
            .with_conn(|conn| queries::code_upsert::upsert_entry(conn, entry))
    }

    fn get_by_code(&self, code: &str) -> IcdResult<Option<CodeDetails>> {
        self.with_reader(|conn| queries::code_lookup::get_by_code(conn, code))
    }

    fn find_candidates(
        &self,
        query: &CandidateQuery,
        limit: usize,
    ) -> IcdResult<Vec<CodeRecord>> {
        self.with_reader(|conn| queries::candidate_search::find_candidates(conn, query, limit))
    }

    fn codes_in_category(&self, category_term: &str) -> IcdResult<Vec<CodeRecord>> {
        self.with_reader(|conn| queries::category_ops::codes_in_category(conn, category_term))
    }

    fn counts(&self) -> IcdResult<GraphCounts> {
        self.with_reader(queries::graph_stats::counts)
    }
}
