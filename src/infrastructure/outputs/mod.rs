//! Result Sink Implementations
//!
//! - ActionsResultSink: `$GITHUB_OUTPUT` file and `::error::` annotations
//! - JsonResultSink: NDJSON records for `--json` mode

mod actions;
mod json;

pub use actions::{heredoc_entry, ActionsResultSink, GITHUB_OUTPUT_ENV};
pub use json::JsonResultSink;
