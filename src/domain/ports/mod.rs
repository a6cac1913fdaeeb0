//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deploy_api;
pub mod deploy_events;
pub mod input_source;
pub mod result_sink;

pub use deploy_api::{ByteStream, DeployApi};
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink, WaitMode};
pub use input_source::InputSource;
pub use result_sink::{outputs, ResultSink};
