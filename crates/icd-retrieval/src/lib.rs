//! # icd-retrieval
//!
//! Turns free text into ranked ICD-10 codes and guards generated explanations.
//!
//! Pipeline: normalize + expand the query, gather candidates from the store,
//! score and order them, format for display. The [`generation::GroundingGuard`]
//! wraps the pipeline when an explanation is requested.

pub mod engine;
pub mod expansion;
pub mod format;
pub mod generation;
pub mod hierarchy;
pub mod ranking;

pub use engine::SearchEngine;
pub use expansion::SynonymTable;
pub use format::{format_code, LookupView};
pub use generation::GroundingGuard;
pub use hierarchy::HierarchyResolver;
pub use ranking::ScoredCode;
