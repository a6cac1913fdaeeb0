//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Trigger, then wait on the stream with polling as fallback
//!
//! ## Services
//!
//! - `StreamObserver` / `CompletionPoller` - the two wait paths

pub mod deploy;
pub mod observe;

pub use deploy::{DeployUseCase, RunReport, RunVerdict};
pub use observe::{CompletionPoller, StreamObserver, WaitPolicy};
