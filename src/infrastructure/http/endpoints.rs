//! Deploy service URL layout
//!
//! Identifiers are inserted verbatim, without percent-encoding.

use crate::config::DeployConfig;
use crate::domain::entities::ExecutionRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// `{base}{prefix}/deploy`
    root: String,
}

impl Endpoints {
    pub fn new(base_url: &str, path_prefix: &str) -> Self {
        Self {
            root: format!("{base_url}{path_prefix}/deploy"),
        }
    }

    pub fn from_config(config: &DeployConfig) -> Self {
        Self::new(config.base_url(), &config.path_prefix)
    }

    /// `POST {base}{prefix}/deploy/{app_id}`
    pub fn trigger(&self, app_id: &str) -> String {
        format!("{}/{app_id}", self.root)
    }

    /// `GET {base}{prefix}/deploy/{app_id}/status/{execution_id}`
    pub fn status(&self, execution: &ExecutionRef) -> String {
        format!(
            "{}/{}/status/{}",
            self.root, execution.app_id, execution.execution_id
        )
    }

    /// `GET {base}{prefix}/deploy/{app_id}/stream/{execution_id}`
    pub fn stream(&self, execution: &ExecutionRef) -> String {
        format!(
            "{}/{}/stream/{}",
            self.root, execution.app_id, execution.execution_id
        )
    }
}
