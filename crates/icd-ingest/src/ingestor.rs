//! Ingestor: stream CSV rows into the store in source order.

use std::io::Read;
use std::path::Path;

use tracing::{info, warn};

use icd_core::errors::{IcdResult, IngestError};
use icd_core::models::CodeEntry;
use icd_core::traits::ICodeStore;

use crate::row::parse_fields;
use crate::summary::{FailureKind, IngestSummary};

/// Rows between progress log lines.
pub const PROGRESS_EVERY: u64 = 100;

pub struct Ingestor<'a> {
    store: &'a dyn ICodeStore,
}

impl<'a> Ingestor<'a> {
    pub fn new(store: &'a dyn ICodeStore) -> Self {
        Self { store }
    }

    /// Ingest a headerless CSV file.
    pub fn ingest_path(&self, path: &Path) -> IcdResult<IngestSummary> {
        let file = std::fs::File::open(path).map_err(|e| IngestError::SourceUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(self.ingest_reader(file, &path.display().to_string()))
    }

    /// Ingest headerless CSV from any reader. Rows of the wrong arity are read
    /// (the reader is flexible) and then rejected by validation.
    pub fn ingest_reader<R: Read>(&self, reader: R, source: &str) -> IngestSummary {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut summary = IngestSummary::start(source);
        info!(source, "ingestion started");

        for (index, result) in csv_reader.records().enumerate() {
            summary.total_rows += 1;
            let fallback_line = index as u64 + 1;

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    let line = e
                        .position()
                        .map(|p| p.line())
                        .unwrap_or(fallback_line);
                    let reason = IngestError::Csv {
                        reason: e.to_string(),
                    }
                    .to_string();
                    warn!(line, %reason, "unreadable row skipped");
                    summary.record_failure(line, FailureKind::Invalid, reason);
                    continue;
                }
            };

            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(fallback_line);
            let fields: Vec<&str> = record.iter().collect();

            match parse_fields(&fields, line) {
                Ok(entry) => self.upsert_row(&entry, line, &mut summary),
                Err(e) => {
                    warn!(line, error = %e, "invalid row skipped");
                    summary.record_failure(line, FailureKind::Invalid, e.to_string());
                }
            }

            if summary.total_rows % PROGRESS_EVERY == 0 {
                info!(
                    rows = summary.total_rows,
                    upserted = summary.upserted,
                    skipped = summary.skipped,
                    failed = summary.failed,
                    "ingestion progress"
                );
            }
        }

        let summary = summary.finish();
        info!(
            source,
            rows = summary.total_rows,
            upserted = summary.upserted,
            skipped = summary.skipped,
            failed = summary.failed,
            elapsed_ms = summary.elapsed_ms,
            "ingestion finished"
        );
        summary
    }

    fn upsert_row(&self, entry: &CodeEntry, line: u64, summary: &mut IngestSummary) {
        match self.store.upsert(entry) {
            Ok(()) => summary.upserted += 1,
            Err(e) => {
                warn!(line, code = %entry.full_code, error = %e, "upsert failed");
                summary.record_failure(line, FailureKind::Store, e.to_string());
            }
        }
    }
}
