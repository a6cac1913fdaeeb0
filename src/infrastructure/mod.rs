//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `http/` - reqwest transport for the deploy service (`DeployApi`)
//! - `inputs/` - `INPUT_*` environment and CLI-over-env input sources
//! - `outputs/` - Actions and NDJSON result sinks
//! - `events/` - Console and NDJSON event sinks

pub mod events;
pub mod http;
pub mod inputs;
pub mod outputs;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use http::HttpDeployApi;
pub use inputs::{ActionInputs, LayeredInputs};
pub use outputs::{ActionsResultSink, JsonResultSink};
