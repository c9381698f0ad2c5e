//! # icd-ingest
//!
//! Reads six-field ICD-10 rows (`categoryCode, subcategory, fullCode, shortDescription,
//! longDescription, categoryName`) and upserts them in source order. Bad rows and
//! failed upserts are counted, never fatal.

pub mod ingestor;
pub mod row;
pub mod summary;

pub use ingestor::Ingestor;
pub use row::parse_fields;
pub use summary::{FailureKind, IngestSummary, RowFailure};
