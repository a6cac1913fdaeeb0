//! reqwest transport for the deploy service

use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, StatusCode};
use tracing::debug;

use crate::config::DeployConfig;
use crate::domain::entities::{ExecutionRef, StatusSnapshot, TriggerResponse};
use crate::domain::ports::{ByteStream, DeployApi};
use crate::error::{RemoteDeployError, RemoteDeployResult};

use super::endpoints::Endpoints;
use super::envelope::{parse_status, parse_trigger, TriggerRequest};

/// Header carrying the caller-supplied deploy token
pub const TOKEN_HEADER: &str = "X-Deploy-Token";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Status code and full body of a completed request
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// HTTP client for the deploy service
#[derive(Debug, Clone)]
pub struct HttpDeployApi {
    client: Client,
    endpoints: Endpoints,
    token: String,
}

impl HttpDeployApi {
    /// Create a client from configuration.
    pub fn new(config: &DeployConfig) -> RemoteDeployResult<Self> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(RemoteDeployError::Http)?;

        Ok(Self {
            client,
            endpoints: Endpoints::from_config(config),
            token: config.deploy_token.clone(),
        })
    }

    /// Send a point-in-time request and read the whole body.
    async fn send(&self, request: RequestBuilder) -> RemoteDeployResult<RawResponse> {
        let response = request
            .header(TOKEN_HEADER, &self.token)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl DeployApi for HttpDeployApi {
    async fn trigger(
        &self,
        app_id: &str,
        command_id: Option<&str>,
    ) -> RemoteDeployResult<TriggerResponse> {
        let url = self.endpoints.trigger(app_id);
        debug!(%url, "Triggering deployment");

        let request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&TriggerRequest::new(command_id));
        let response = self.send(request).await?;
        parse_trigger(response.status, &response.body)
    }

    async fn status(&self, execution: &ExecutionRef) -> RemoteDeployResult<StatusSnapshot> {
        let url = self.endpoints.status(execution);
        let response = self.send(self.client.get(&url)).await?;
        debug!(status = response.status, "Status response");
        parse_status(response.status, &response.body)
    }

    async fn open_stream(&self, execution: &ExecutionRef) -> RemoteDeployResult<ByteStream> {
        let url = self.endpoints.stream(execution);
        debug!(%url, "Opening event stream");

        let response = self
            .client
            .get(&url)
            .header(TOKEN_HEADER, &self.token)
            .header(ACCEPT, "text/event-stream")
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(RemoteDeployError::StreamRejected {
                status: response.status().as_u16(),
            });
        }

        Ok(response
            .bytes_stream()
            .map(|chunk| chunk.map(|bytes| bytes.to_vec()).map_err(RemoteDeployError::Http))
            .boxed())
    }
}
