//! Response envelopes of the trigger and status endpoints
//!
//! Kept apart from the transport so status-code and body validation can be
//! tested without a server.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{StatusSnapshot, TriggerResponse};
use crate::error::{RemoteDeployError, RemoteDeployResult};

/// Trigger request body: `{"command_id":"..."}` or `{}`
#[derive(Debug, Serialize)]
pub struct TriggerRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<&'a str>,
}

impl<'a> TriggerRequest<'a> {
    /// An empty command id is treated as absent
    pub fn new(command_id: Option<&'a str>) -> Self {
        Self {
            command_id: command_id.filter(|id| !id.is_empty()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TriggerEnvelope {
    #[serde(default)]
    execution_id: Option<String>,
    #[serde(default)]
    app_name: Option<String>,
}

/// Validate a trigger response: 200/202 with a non-empty `execution_id`.
pub fn parse_trigger(status: u16, body: &str) -> RemoteDeployResult<TriggerResponse> {
    if status != 200 && status != 202 {
        return Err(RemoteDeployError::TriggerRejected {
            status,
            body: body.to_string(),
        });
    }

    let envelope: TriggerEnvelope = serde_json::from_str(body)
        .map_err(|err| RemoteDeployError::invalid_response("trigger", err))?;

    match envelope.execution_id {
        Some(execution_id) if !execution_id.is_empty() => Ok(TriggerResponse {
            execution_id,
            app_name: envelope.app_name,
        }),
        _ => Err(RemoteDeployError::MissingExecutionId {
            body: body.to_string(),
        }),
    }
}

/// Validate a status response: 200 with a `{status, exit_code?, output?}` body.
pub fn parse_status(status: u16, body: &str) -> RemoteDeployResult<StatusSnapshot> {
    if status != 200 {
        return Err(RemoteDeployError::StatusRejected {
            status,
            body: body.to_string(),
        });
    }

    serde_json::from_str(body).map_err(|err| RemoteDeployError::invalid_response("status", err))
}
