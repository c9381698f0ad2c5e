//! Outcome of one ingestion run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-row failures kept in the summary beyond this are counted but not recorded.
pub const MAX_RECORDED_FAILURES: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The row failed validation and was skipped.
    Invalid,
    /// The row was valid but the store rejected the upsert.
    Store,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFailure {
    pub line: u64,
    pub kind: FailureKind,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestSummary {
    pub source: String,
    pub total_rows: u64,
    pub upserted: u64,
    /// Rows that failed validation.
    pub skipped: u64,
    /// Valid rows the store failed to upsert.
    pub failed: u64,
    pub failures: Vec<RowFailure>,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: i64,
}

impl IngestSummary {
    pub(crate) fn start(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            total_rows: 0,
            upserted: 0,
            skipped: 0,
            failed: 0,
            failures: Vec::new(),
            started_at: Utc::now(),
            elapsed_ms: 0,
        }
    }

    pub(crate) fn record_failure(&mut self, line: u64, kind: FailureKind, reason: String) {
        match kind {
            FailureKind::Invalid => self.skipped += 1,
            FailureKind::Store => self.failed += 1,
        }
        if self.failures.len() < MAX_RECORDED_FAILURES {
            self.failures.push(RowFailure { line, kind, reason });
        }
    }

    pub(crate) fn finish(mut self) -> Self {
        self.elapsed_ms = (Utc::now() - self.started_at).num_milliseconds();
        self
    }

    /// True when every row made it into the store.
    pub fn is_clean(&self) -> bool {
        self.skipped == 0 && self.failed == 0
    }
}
