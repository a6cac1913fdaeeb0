//! Error types for remote-deploy
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use thiserror::Error;

/// Result type alias for remote-deploy operations
pub type RemoteDeployResult<T> = Result<T, RemoteDeployError>;

/// Main error type for remote-deploy operations
#[derive(Error, Debug)]
pub enum RemoteDeployError {
    /// Required input was not supplied
    #[error("Input required and not supplied: {name}")]
    MissingInput { name: String },

    /// Input was supplied but could not be interpreted
    #[error("invalid value '{value}' for input '{name}': expected {expected}{suggestion}")]
    InvalidInput {
        name: String,
        value: String,
        expected: String,
        suggestion: String,
    },

    /// Trigger endpoint answered with something other than 200/202
    #[error("Deployment trigger failed with HTTP {status}: {body}")]
    TriggerRejected { status: u16, body: String },

    /// Trigger response parsed but carried no execution id
    #[error("Invalid response: missing execution_id")]
    MissingExecutionId { body: String },

    /// Response body was not the JSON envelope we expected
    #[error("invalid {context} response: {message}")]
    InvalidResponse { context: String, message: String },

    /// Status endpoint answered with something other than 200
    #[error("Status check failed with HTTP {status}: {body}")]
    StatusRejected { status: u16, body: String },

    /// Stream endpoint answered with something other than 200
    #[error("Stream failed with HTTP {status}")]
    StreamRejected { status: u16 },

    /// `complete` event payload was not valid JSON
    #[error("Invalid complete event: {payload}")]
    MalformedCompletion { payload: String },

    /// HTTP transport error (connect, TLS, mid-body failure)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where an error sits in the failure taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad or missing configuration, raised before any network call
    Input,
    /// The trigger request was refused
    Trigger,
    /// The event stream could not be used
    Stream,
    /// A point-in-time status check was refused
    Status,
    /// The remote service answered with an unexpected payload
    Protocol,
    /// The connection itself failed
    Transport,
}

impl RemoteDeployError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingInput { .. } | Self::InvalidInput { .. } => ErrorCategory::Input,
            Self::TriggerRejected { .. } => ErrorCategory::Trigger,
            Self::StatusRejected { .. } => ErrorCategory::Status,
            Self::StreamRejected { .. } => ErrorCategory::Stream,
            Self::MissingExecutionId { .. }
            | Self::InvalidResponse { .. }
            | Self::MalformedCompletion { .. } => ErrorCategory::Protocol,
            Self::Http(_) | Self::Io(_) => ErrorCategory::Transport,
        }
    }

    pub(crate) fn invalid_response(context: &str, message: impl ToString) -> Self {
        Self::InvalidResponse {
            context: context.to_string(),
            message: message.to_string(),
        }
    }
}
