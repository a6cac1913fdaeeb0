//! Deploy Outcome
//!
//! Every wait path (stream, reconciliation, polling, deadline) resolves to
//! this one shape.

use serde::Serialize;

use super::execution::{Completion, ExecutionStatus, StatusSnapshot};

/// Exit code reported when the local deadline is reached
pub const TIMEOUT_EXIT_CODE: i64 = -1;

/// Final `{status, exit_code, output}` of an observed execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployOutcome {
    pub status: ExecutionStatus,
    pub exit_code: Option<i64>,
    pub output: String,
}

impl DeployOutcome {
    pub fn timed_out(output: impl Into<String>) -> Self {
        Self {
            status: ExecutionStatus::Timeout,
            exit_code: Some(TIMEOUT_EXIT_CODE),
            output: output.into(),
        }
    }

    pub fn from_completion(completion: Completion, output: String) -> Self {
        Self {
            status: completion.status,
            exit_code: completion.exit_code,
            output,
        }
    }

    /// Adopt a status snapshot, using `local_output` when the snapshot has
    /// no (or empty) output of its own.
    pub fn from_snapshot(snapshot: StatusSnapshot, local_output: String) -> Self {
        let output = snapshot
            .output
            .filter(|output| !output.is_empty())
            .unwrap_or(local_output);
        Self {
            status: snapshot.status,
            exit_code: snapshot.exit_code,
            output,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ExecutionStatus::Success
    }

    /// Exit code as reported to the result sink (empty when unknown)
    pub fn exit_code_string(&self) -> String {
        self.exit_code.map(|code| code.to_string()).unwrap_or_default()
    }
}
