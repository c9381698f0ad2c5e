//! Single write connection behind a mutex.
//! Every upsert holds the lock for its whole transaction, so two upserts of the
//! same key can never interleave.

use std::path::Path;
use std::sync::{Mutex, PoisonError};

use rusqlite::Connection;

use icd_core::config::defaults::DEFAULT_BUSY_TIMEOUT_MS;
use icd_core::errors::IcdResult;

use super::pragmas::apply_pragmas;
use crate::to_unavailable_err;

/// A single write connection protected by a mutex.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open a new write connection to the given database path.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> IcdResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_unavailable_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> IcdResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_unavailable_err(e.to_string()))?;
        apply_pragmas(&conn, DEFAULT_BUSY_TIMEOUT_MS)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the write lock and execute a closure with the connection.
    ///
    /// The guard is dropped on every exit path. A lock poisoned by a panicking
    /// closure is recovered: any open transaction was rolled back when it unwound.
    pub fn with_conn<F, T>(&self, f: F) -> IcdResult<T>
    where
        F: FnOnce(&Connection) -> IcdResult<T>,
    {
        let guard = self.conn.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("write connection lock was poisoned, recovering");
            PoisonError::into_inner(poisoned)
        });
        f(&guard)
    }
}
