//! # icd-storage
//!
//! SQLite persistence for the ICD-10 code graph.
//!
//! Nodes live in `categories` and `codes`; `CONTAINS` edges in `category_members`
//! (one row per code, so a code belongs to exactly one category); `HAS_SUBCATEGORY`
//! edges in `code_hierarchy`; `BELONGS_TO` is the `code_categories` view.
//!
//! One write connection serializes upserts, a small read pool serves concurrent lookups.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use icd_core::errors::{IcdError, StorageError};

/// Failure on the write path.
pub(crate) fn to_storage_err(message: String) -> IcdError {
    StorageError::SqliteError { message }.into()
}

/// Failure on the read path; callers may degrade to an empty result.
pub(crate) fn to_query_err(reason: String) -> IcdError {
    StorageError::QueryFailed { reason }.into()
}

/// The database or a connection to it could not be obtained.
pub(crate) fn to_unavailable_err(reason: String) -> IcdError {
    StorageError::Unavailable { reason }.into()
}
