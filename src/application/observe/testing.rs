//! Scripted port implementations shared by application tests

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};

use crate::domain::entities::{ExecutionRef, ExecutionStatus, StatusSnapshot, TriggerResponse};
use crate::domain::ports::{ByteStream, DeployApi, DeployEvent, DeployEventSink, ResultSink};
use crate::error::{RemoteDeployError, RemoteDeployResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Trigger {
        app_id: String,
        command_id: Option<String>,
    },
    Status(ExecutionRef),
    Stream(ExecutionRef),
}

pub enum TriggerReply {
    Accepted {
        execution_id: String,
        app_name: Option<String>,
    },
    Rejected {
        status: u16,
        body: String,
    },
}

pub enum StreamScript {
    /// Connection refused before any response
    Refused,
    /// Non-200 response head
    Rejected(u16),
    /// Deliver chunks, then close cleanly
    Chunks(Vec<&'static str>),
    /// Deliver chunks, then stay open forever
    ChunksThenHang(Vec<&'static str>),
    /// Deliver chunks, then fail mid-body
    ChunksThenError(Vec<&'static str>),
}

pub enum StatusReply {
    Snapshot(StatusSnapshot),
    Rejected(u16),
}

impl StatusReply {
    pub fn status(status: &str, exit_code: Option<i64>, output: Option<&str>) -> Self {
        Self::Snapshot(StatusSnapshot {
            status: ExecutionStatus::parse(status),
            exit_code,
            output: output.map(str::to_string),
        })
    }
}

/// Deploy API that replays scripted replies and records every call
pub struct ScriptedApi {
    trigger: TriggerReply,
    stream: StreamScript,
    statuses: Mutex<VecDeque<StatusReply>>,
    calls: Mutex<Vec<ApiCall>>,
}

impl ScriptedApi {
    pub fn new(stream: StreamScript) -> Self {
        Self {
            trigger: TriggerReply::Accepted {
                execution_id: "exec-42".to_string(),
                app_name: None,
            },
            stream,
            statuses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_trigger(mut self, trigger: TriggerReply) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn with_statuses(self, statuses: Vec<StatusReply>) -> Self {
        *self.statuses.lock().unwrap() = statuses.into();
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }
}

fn chunk_stream(chunks: &[&'static str]) -> stream::Iter<std::vec::IntoIter<RemoteDeployResult<Vec<u8>>>> {
    let items: Vec<RemoteDeployResult<Vec<u8>>> = chunks
        .iter()
        .map(|chunk| Ok(chunk.as_bytes().to_vec()))
        .collect();
    stream::iter(items)
}

#[async_trait]
impl DeployApi for ScriptedApi {
    async fn trigger(
        &self,
        app_id: &str,
        command_id: Option<&str>,
    ) -> RemoteDeployResult<TriggerResponse> {
        self.record(ApiCall::Trigger {
            app_id: app_id.to_string(),
            command_id: command_id.map(str::to_string),
        });
        match &self.trigger {
            TriggerReply::Accepted {
                execution_id,
                app_name,
            } => Ok(TriggerResponse {
                execution_id: execution_id.clone(),
                app_name: app_name.clone(),
            }),
            TriggerReply::Rejected { status, body } => Err(RemoteDeployError::TriggerRejected {
                status: *status,
                body: body.clone(),
            }),
        }
    }

    async fn status(&self, execution: &ExecutionRef) -> RemoteDeployResult<StatusSnapshot> {
        self.record(ApiCall::Status(execution.clone()));
        let reply = self.statuses.lock().unwrap().pop_front();
        match reply {
            Some(StatusReply::Snapshot(snapshot)) => Ok(snapshot),
            Some(StatusReply::Rejected(status)) => Err(RemoteDeployError::StatusRejected {
                status,
                body: "unavailable".to_string(),
            }),
            None => Ok(StatusSnapshot {
                status: ExecutionStatus::Running,
                exit_code: None,
                output: None,
            }),
        }
    }

    async fn open_stream(&self, execution: &ExecutionRef) -> RemoteDeployResult<ByteStream> {
        self.record(ApiCall::Stream(execution.clone()));
        match &self.stream {
            StreamScript::Refused => Err(RemoteDeployError::Io(io::Error::from(
                io::ErrorKind::ConnectionRefused,
            ))),
            StreamScript::Rejected(status) => {
                Err(RemoteDeployError::StreamRejected { status: *status })
            }
            StreamScript::Chunks(chunks) => Ok(chunk_stream(chunks).boxed()),
            StreamScript::ChunksThenHang(chunks) => {
                Ok(chunk_stream(chunks).chain(stream::pending()).boxed())
            }
            StreamScript::ChunksThenError(chunks) => Ok(chunk_stream(chunks)
                .chain(stream::once(async {
                    Err(RemoteDeployError::Io(io::Error::from(
                        io::ErrorKind::ConnectionReset,
                    )))
                }))
                .boxed()),
        }
    }
}

/// Event sink that records all events
#[derive(Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<DeployEvent>>,
}

impl RecordingEventSink {
    pub fn events(&self) -> Vec<DeployEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn output_lines(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                DeployEvent::OutputLine { line } => Some(line),
                _ => None,
            })
            .collect()
    }
}

impl DeployEventSink for RecordingEventSink {
    fn on_event(&self, event: DeployEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Result sink that keeps outputs in call order
#[derive(Debug, Default)]
pub struct RecordingResultSink {
    pub outputs: Vec<(String, String)>,
    pub failure: Option<String>,
}

impl RecordingResultSink {
    pub fn output(&self, name: &str) -> Option<&str> {
        self.outputs
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl ResultSink for RecordingResultSink {
    fn set_output(&mut self, name: &str, value: &str) -> RemoteDeployResult<()> {
        self.outputs.push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn set_failed(&mut self, message: &str) {
        self.failure = Some(message.to_string());
    }

    fn has_failed(&self) -> bool {
        self.failure.is_some()
    }
}
