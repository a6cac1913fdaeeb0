//! Domain Entities
//!
//! - `ExecutionRef` - Identifies one remote deployment run
//! - `ExecutionStatus` - Status values reported by the deploy service
//! - `DeployOutcome` - The `{status, exit_code, output}` every wait path converges on

mod execution;
mod outcome;

pub use execution::{Completion, ExecutionRef, ExecutionStatus, StatusSnapshot, TriggerResponse};
pub use outcome::{DeployOutcome, TIMEOUT_EXIT_CODE};
