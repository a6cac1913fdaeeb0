//! Execution Entity
//!
//! A remote deployment run. This crate never writes execution state; every
//! value here is read back from the deploy service.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Status of an execution as reported by the deploy service
///
/// Unknown values are kept verbatim in `Other` so they can be reported back
/// to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExecutionStatus {
    /// Triggered, not yet observed (also reported when not waiting)
    #[default]
    Pending,
    Running,
    Success,
    Failed,
    /// Local deadline reached; never sent by the service
    Timeout,
    Other(String),
}

impl ExecutionStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "pending" => Self::Pending,
            "running" => Self::Running,
            "success" => Self::Success,
            "failed" => Self::Failed,
            "timeout" => Self::Timeout,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Success => "success",
            Self::Failed => "failed",
            Self::Timeout => "timeout",
            Self::Other(value) => value,
        }
    }

    /// Statuses that end polling when the service reports them.
    pub fn is_final_remote(&self) -> bool {
        matches!(self, Self::Success | Self::Failed)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Failed | Self::Timeout)
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ExecutionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ExecutionStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Identifies one execution for every call made after the trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRef {
    pub app_id: String,
    pub execution_id: String,
}

impl ExecutionRef {
    pub fn new(app_id: impl Into<String>, execution_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            execution_id: execution_id.into(),
        }
    }
}

/// Validated trigger response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerResponse {
    pub execution_id: String,
    pub app_name: Option<String>,
}

/// Point-in-time status envelope from the status endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusSnapshot {
    pub status: ExecutionStatus,
    #[serde(default)]
    pub exit_code: Option<i64>,
    #[serde(default)]
    pub output: Option<String>,
}

/// Payload of a `complete` stream event
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Completion {
    pub status: ExecutionStatus,
    #[serde(default)]
    pub exit_code: Option<i64>,
}
