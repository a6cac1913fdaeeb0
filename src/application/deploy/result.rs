//! Deploy Result
//!
//! Result types for a trigger-and-observe run.

use crate::domain::entities::{DeployOutcome, ExecutionStatus};

/// How the run ends for the calling pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunVerdict {
    /// Triggered without waiting
    Pending,
    Succeeded,
    /// Local deadline reached
    TimedOut { timeout_secs: u64 },
    /// Any final status other than success
    Failed { exit_code: Option<i64> },
    /// Trigger or reporting failed before an outcome was produced
    Aborted { message: String },
}

impl RunVerdict {
    pub fn from_outcome(outcome: &DeployOutcome, timeout_secs: u64) -> Self {
        match outcome.status {
            ExecutionStatus::Success => Self::Succeeded,
            ExecutionStatus::Timeout => Self::TimedOut { timeout_secs },
            _ => Self::Failed {
                exit_code: outcome.exit_code,
            },
        }
    }

    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::Pending | Self::Succeeded)
    }

    /// Message the run is marked failed with, if any
    pub fn failure_message(&self) -> Option<String> {
        match self {
            Self::Pending | Self::Succeeded => None,
            Self::TimedOut { timeout_secs } => {
                Some(format!("Deployment timed out after {timeout_secs}s"))
            }
            Self::Failed { exit_code } => Some(format!(
                "Deployment failed with exit code: {}",
                exit_code.map_or_else(|| "unknown".to_string(), |code| code.to_string())
            )),
            Self::Aborted { message } => Some(message.clone()),
        }
    }
}

/// Result of a run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Set once the trigger is accepted
    pub execution_id: Option<String>,
    /// Final outcome; `None` when not waiting or aborted
    pub outcome: Option<DeployOutcome>,
    pub verdict: RunVerdict,
}

impl RunReport {
    pub fn new() -> Self {
        Self {
            execution_id: None,
            outcome: None,
            verdict: RunVerdict::Pending,
        }
    }

    pub fn is_success(&self) -> bool {
        !self.verdict.is_failure()
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}
