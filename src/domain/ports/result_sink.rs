//! Result Sink Port
//!
//! Where named outputs of the run are recorded and where the run is marked
//! failed.

use crate::error::RemoteDeployResult;

/// Output names as exposed to later workflow steps
pub mod outputs {
    pub const EXECUTION_ID: &str = "execution-id";
    pub const STATUS: &str = "status";
    pub const EXIT_CODE: &str = "exit-code";
    pub const OUTPUT: &str = "output";
}

pub trait ResultSink {
    /// Record a named string output
    fn set_output(&mut self, name: &str, value: &str) -> RemoteDeployResult<()>;

    /// Mark the run as failed with a user-visible message
    fn set_failed(&mut self, message: &str);

    /// Whether `set_failed` has been called
    fn has_failed(&self) -> bool;
}
