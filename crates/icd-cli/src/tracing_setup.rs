//! Tracing subscriber setup. Logs go to stderr; stdout carries command output.

use tracing_subscriber::EnvFilter;

use icd_core::config::ObservabilityConfig;

/// Environment variable holding an `EnvFilter` directive, e.g. `icd_storage=debug`.
pub const LOG_ENV_VAR: &str = "ICDGRAPH_LOG";

/// Install the global subscriber. `ICDGRAPH_LOG` wins over config; `verbose`
/// raises the config level to `debug`. A second call is a no-op.
pub fn init_tracing(config: &ObservabilityConfig, verbose: bool) {
    let fallback = if verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let _ = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
