//! remote-deploy - trigger a remote deployment and follow it to completion
//!
//! A deployment is started with one HTTP request, then observed over the
//! service's event stream. If the stream cannot be used the run falls back to
//! polling the status endpoint. Either way the run ends with a status, an
//! exit code and the captured output, reported to the calling pipeline.
//!
//! ## Layers
//!
//! - `domain` - entities, ports and pure services (stream parser, truncation)
//! - `application` - the deploy use case and its two wait paths
//! - `infrastructure` - reqwest transport, input sources, result and event sinks
//! - `presentation` - CLI and wiring
//! - `ui` - console rendering

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{DeployUseCase, RunReport, RunVerdict};
pub use config::DeployConfig;
pub use domain::entities::{DeployOutcome, ExecutionRef, ExecutionStatus};
pub use domain::ports::{DeployApi, DeployEventSink, InputSource, ResultSink};
pub use error::{ErrorCategory, RemoteDeployError, RemoteDeployResult};
