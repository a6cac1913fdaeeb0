//! Deploy API Port
//!
//! The three calls the deploy service exposes. The observation protocol is
//! written against this trait so it can be exercised without a network.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::domain::entities::{ExecutionRef, StatusSnapshot, TriggerResponse};
use crate::error::RemoteDeployResult;

/// Raw body chunks of an open event stream, in arrival order
pub type ByteStream = BoxStream<'static, RemoteDeployResult<Vec<u8>>>;

#[async_trait]
pub trait DeployApi: Send + Sync {
    /// Start a deployment of `app_id`. Never retried.
    async fn trigger(
        &self,
        app_id: &str,
        command_id: Option<&str>,
    ) -> RemoteDeployResult<TriggerResponse>;

    /// Point-in-time status of an execution
    async fn status(&self, execution: &ExecutionRef) -> RemoteDeployResult<StatusSnapshot>;

    /// Open the event stream of an execution.
    ///
    /// Resolves once the response head has arrived with a 200; the body is
    /// returned unparsed.
    async fn open_stream(&self, execution: &ExecutionRef) -> RemoteDeployResult<ByteStream>;
}
