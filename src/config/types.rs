//! Configuration type definitions

use std::fmt;
use std::time::Duration;

use crate::domain::ports::InputSource;
use crate::error::RemoteDeployResult;

use super::loader;

/// Default path prefix in front of `/deploy/...`
pub const DEFAULT_PATH_PREFIX: &str = "/devops";

/// Default wait deadline in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Input names as they appear in the workflow `with:` block
pub mod inputs {
    pub const REMOTE_URL: &str = "remote-url";
    pub const APP_ID: &str = "app-id";
    pub const DEPLOY_TOKEN: &str = "deploy-token";
    pub const COMMAND_ID: &str = "command-id";
    pub const PATH_PREFIX: &str = "path-prefix";
    pub const WAIT: &str = "wait";
    pub const TIMEOUT: &str = "timeout";
    pub const VERBOSE: &str = "verbose";

    pub const ALL: &[&str] = &[
        REMOTE_URL,
        APP_ID,
        DEPLOY_TOKEN,
        COMMAND_ID,
        PATH_PREFIX,
        WAIT,
        TIMEOUT,
        VERBOSE,
    ];
}

/// Validated configuration for one trigger-and-observe run
///
/// Built once at startup and passed by reference to every component.
#[derive(Clone, PartialEq, Eq)]
pub struct DeployConfig {
    /// Deploy service URL as supplied (may end in `/`)
    pub remote_url: String,
    pub app_id: String,
    /// Sent as `X-Deploy-Token`; never printed
    pub deploy_token: String,
    pub command_id: Option<String>,
    pub path_prefix: String,
    /// Observe the execution after triggering it
    pub wait: bool,
    pub timeout_secs: u64,
    pub verbose: bool,
}

impl DeployConfig {
    pub fn new(
        remote_url: impl Into<String>,
        app_id: impl Into<String>,
        deploy_token: impl Into<String>,
    ) -> Self {
        Self {
            remote_url: remote_url.into(),
            app_id: app_id.into(),
            deploy_token: deploy_token.into(),
            command_id: None,
            path_prefix: DEFAULT_PATH_PREFIX.to_string(),
            wait: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            verbose: false,
        }
    }

    /// Load and validate from an input source
    pub fn from_inputs(source: &dyn InputSource) -> RemoteDeployResult<Self> {
        loader::load(source)
    }

    pub fn with_command_id(mut self, command_id: impl Into<String>) -> Self {
        self.command_id = Some(command_id.into());
        self
    }

    pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix = prefix.into();
        self
    }

    pub fn with_wait(mut self, wait: bool) -> Self {
        self.wait = wait;
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// `remote_url` with one trailing `/` removed
    pub fn base_url(&self) -> &str {
        self.remote_url
            .strip_suffix('/')
            .unwrap_or(self.remote_url.as_str())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl fmt::Debug for DeployConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeployConfig")
            .field("remote_url", &self.remote_url)
            .field("app_id", &self.app_id)
            .field("deploy_token", &"***")
            .field("command_id", &self.command_id)
            .field("path_prefix", &self.path_prefix)
            .field("wait", &self.wait)
            .field("timeout_secs", &self.timeout_secs)
            .field("verbose", &self.verbose)
            .finish()
    }
}
