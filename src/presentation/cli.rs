//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Every flag mirrors an action input of the same name
//! - Flags are kept as raw strings and validated by `config`, exactly like
//!   `INPUT_*` values, so both sources report the same errors
//! - A flag overrides the matching `INPUT_*` variable

use std::collections::HashMap;

use clap::Parser;

use crate::config::inputs;

/// Trigger a remote deployment and follow it to completion
#[derive(Parser, Debug, Default)]
#[command(name = "remote-deploy")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Inputs not given as flags are read from INPUT_<NAME> variables.")]
pub struct Cli {
    /// Base URL of the deploy service
    #[arg(long, value_name = "URL")]
    pub remote_url: Option<String>,

    /// Application to deploy
    #[arg(long, value_name = "ID")]
    pub app_id: Option<String>,

    /// Token sent as X-Deploy-Token
    #[arg(long, value_name = "TOKEN")]
    pub deploy_token: Option<String>,

    /// Command to run instead of the application's default
    #[arg(long, value_name = "ID")]
    pub command_id: Option<String>,

    /// Path prefix in front of /deploy (default: /devops)
    #[arg(long, value_name = "PATH")]
    pub path_prefix: Option<String>,

    /// Wait for completion (default: true)
    #[arg(long, value_name = "BOOL")]
    pub wait: Option<String>,

    /// Wait deadline in seconds (default: 600)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<String>,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit NDJSON events and outputs instead of console output
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Flag values keyed by input name, for layering over `INPUT_*`
    pub fn input_overrides(&self) -> HashMap<String, String> {
        let flags = [
            (inputs::REMOTE_URL, self.remote_url.as_deref()),
            (inputs::APP_ID, self.app_id.as_deref()),
            (inputs::DEPLOY_TOKEN, self.deploy_token.as_deref()),
            (inputs::COMMAND_ID, self.command_id.as_deref()),
            (inputs::PATH_PREFIX, self.path_prefix.as_deref()),
            (inputs::WAIT, self.wait.as_deref()),
            (inputs::TIMEOUT, self.timeout.as_deref()),
            (inputs::VERBOSE, self.verbose.then_some("true")),
        ];

        flags
            .into_iter()
            .filter_map(|(name, value)| value.map(|value| (name.to_string(), value.to_string())))
            .collect()
    }
}
