//! # icd-core
//!
//! Foundation crate for the ICD-10 code graph.
//! Defines the graph models, the store and generator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::IcdConfig;
pub use errors::{IcdError, IcdResult};
pub use models::{CodeDetails, CodeEntry, CodeRecord, CodeView, IcdCode};
