//! Configuration loading from an input source

use crate::domain::ports::InputSource;
use crate::error::{RemoteDeployError, RemoteDeployResult};

use super::env_validator::InputValidator;
use super::types::{inputs, DeployConfig, DEFAULT_PATH_PREFIX, DEFAULT_TIMEOUT_SECS};

const BOOLEAN_VALUES: &[&str] = &["true", "false"];

/// Build a [`DeployConfig`], failing on the first missing or invalid input.
pub fn load(source: &dyn InputSource) -> RemoteDeployResult<DeployConfig> {
    let remote_url = required(source, inputs::REMOTE_URL)?;
    let app_id = required(source, inputs::APP_ID)?;
    let deploy_token = required(source, inputs::DEPLOY_TOKEN)?;

    let mut config = DeployConfig::new(remote_url, app_id, deploy_token);
    config.command_id = optional(source, inputs::COMMAND_ID);
    config.path_prefix =
        optional(source, inputs::PATH_PREFIX).unwrap_or_else(|| DEFAULT_PATH_PREFIX.to_string());
    config.wait = boolean(source, inputs::WAIT, true)?;
    config.timeout_secs = match optional(source, inputs::TIMEOUT) {
        Some(raw) => InputValidator::new(inputs::TIMEOUT, "a whole number of seconds", &[])
            .parse(&raw, |s| s.parse::<u64>().ok())?,
        None => DEFAULT_TIMEOUT_SECS,
    };
    config.verbose = boolean(source, inputs::VERBOSE, false)?;

    Ok(config)
}

/// Trimmed value; empty counts as absent
fn optional(source: &dyn InputSource, name: &str) -> Option<String> {
    source
        .get(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required(source: &dyn InputSource, name: &str) -> RemoteDeployResult<String> {
    optional(source, name).ok_or_else(|| RemoteDeployError::MissingInput {
        name: name.to_string(),
    })
}

/// YAML 1.2 core booleans, as accepted by workflow `with:` blocks
fn boolean(source: &dyn InputSource, name: &str, default: bool) -> RemoteDeployResult<bool> {
    match optional(source, name) {
        Some(raw) => InputValidator::new(name, "true or false", BOOLEAN_VALUES).parse(&raw, |s| {
            match s {
                "true" | "True" | "TRUE" => Some(true),
                "false" | "False" | "FALSE" => Some(false),
                _ => None,
            }
        }),
        None => Ok(default),
    }
}
