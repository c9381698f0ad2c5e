//! One module per subcommand. Each `run` returns the text for stdout.

pub mod ask;
pub mod category;
pub mod ingest;
pub mod lookup;
pub mod search;
pub mod stats;

use icd_core::IcdError;

use crate::output::READ_FAILURE_MESSAGE;

/// Log the real failure, hand the user the generic one.
pub(crate) fn read_failure(operation: &str, error: IcdError) -> anyhow::Error {
    tracing::warn!(operation, error = %error, "read failed");
    anyhow::anyhow!(READ_FAILURE_MESSAGE)
}
