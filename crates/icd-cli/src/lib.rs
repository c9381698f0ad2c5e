//! Library side of the `icdgraph` binary: context setup, commands, rendering.
//! Commands return the text to print so they can be tested without a terminal.

pub mod commands;
pub mod context;
pub mod output;
pub mod tracing_setup;

pub use context::AppContext;
