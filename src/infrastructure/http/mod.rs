//! HTTP transport for the deploy service
//!
//! - `endpoints` - URL layout
//! - `envelope` - request body and response validation
//! - `client` - `HttpDeployApi`, the reqwest implementation of `DeployApi`

mod client;
mod endpoints;
mod envelope;

pub use client::{HttpDeployApi, RawResponse, TOKEN_HEADER};
pub use endpoints::Endpoints;
pub use envelope::{parse_status, parse_trigger, TriggerRequest};
