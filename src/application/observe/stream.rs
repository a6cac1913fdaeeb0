//! Stream Observer
//!
//! Follows an execution over its event stream until a `complete` record
//! arrives, the stream ends, or the local deadline is reached.
//!
//! The deadline is checked on a fixed ticker rather than per chunk, so a
//! silent stream still times out. A stream that ends without a `complete`
//! record is reconciled with one status request.

use std::time::Duration;

use futures::StreamExt;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, trace};

use crate::domain::entities::{DeployOutcome, ExecutionRef};
use crate::domain::ports::{DeployApi, DeployEvent, DeployEventSink};
use crate::domain::services::{EventStreamParser, StreamEvent};
use crate::error::{RemoteDeployError, RemoteDeployResult};

use super::policy::WaitPolicy;

/// Push-based wait path
pub struct StreamObserver<'a> {
    api: &'a dyn DeployApi,
    events: &'a dyn DeployEventSink,
    policy: WaitPolicy,
}

impl<'a> StreamObserver<'a> {
    pub fn new(api: &'a dyn DeployApi, events: &'a dyn DeployEventSink, policy: WaitPolicy) -> Self {
        Self {
            api,
            events,
            policy,
        }
    }

    /// Observe `execution` until it completes or `timeout` elapses.
    ///
    /// Errors mean the stream was unusable (refused, rejected, broken
    /// mid-body, malformed `complete`, or a failed reconciliation); the
    /// caller is expected to fall back to polling.
    pub async fn observe(
        &self,
        execution: &ExecutionRef,
        timeout: Duration,
    ) -> RemoteDeployResult<DeployOutcome> {
        let mut session = ObservationSession::start();
        let mut ticker = interval_at(
            session.started + self.policy.check_interval,
            self.policy.check_interval,
        );
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut open = self.api.open_stream(execution);
        let mut chunks = loop {
            tokio::select! {
                opened = &mut open => break opened?,
                _ = ticker.tick() => {
                    if session.elapsed() >= timeout {
                        debug!("Deadline reached before the stream opened");
                        return Ok(session.into_timed_out());
                    }
                }
            }
        };
        debug!(execution_id = %execution.execution_id, "Stream opened");

        let mut parser = EventStreamParser::new();
        loop {
            tokio::select! {
                next = chunks.next() => match next {
                    Some(Ok(chunk)) => {
                        session.touch();
                        for event in parser.feed(&chunk) {
                            if let Some(outcome) = self.handle(event, &mut session)? {
                                return Ok(outcome);
                            }
                        }
                    }
                    Some(Err(err)) => return Err(err),
                    None => {
                        debug!(
                            buffered = parser.pending_len(),
                            "Stream ended without a complete event, reconciling"
                        );
                        return self.reconcile(execution, session).await;
                    }
                },
                _ = ticker.tick() => {
                    if session.elapsed() >= timeout {
                        return Ok(session.into_timed_out());
                    }
                    let idle = session.idle();
                    if idle > self.policy.idle_threshold {
                        info!(
                            "No activity for {}s, stream might have disconnected",
                            idle.as_secs()
                        );
                    }
                }
            }
        }
    }

    fn handle(
        &self,
        event: StreamEvent,
        session: &mut ObservationSession,
    ) -> RemoteDeployResult<Option<DeployOutcome>> {
        match event {
            StreamEvent::Output(line) => {
                self.events.on_event(DeployEvent::OutputLine { line: line.clone() });
                session.lines.push(line);
                Ok(None)
            }
            StreamEvent::Complete(completion) => Ok(Some(DeployOutcome::from_completion(
                completion,
                session.output(),
            ))),
            StreamEvent::MalformedComplete(payload) => {
                Err(RemoteDeployError::MalformedCompletion { payload })
            }
            StreamEvent::Unrecognized { event } => {
                trace!(?event, "Ignoring stream record");
                Ok(None)
            }
        }
    }

    async fn reconcile(
        &self,
        execution: &ExecutionRef,
        session: ObservationSession,
    ) -> RemoteDeployResult<DeployOutcome> {
        let snapshot = self.api.status(execution).await?;
        Ok(DeployOutcome::from_snapshot(snapshot, session.output()))
    }
}

/// State of one stream observation
struct ObservationSession {
    started: Instant,
    last_activity: Instant,
    lines: Vec<String>,
}

impl ObservationSession {
    fn start() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_activity: now,
            lines: Vec::new(),
        }
    }

    fn touch(&mut self) {
        self.last_activity = Instant::now();
    }

    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    fn idle(&self) -> Duration {
        self.last_activity.elapsed()
    }

    fn output(&self) -> String {
        self.lines.join("\n")
    }

    fn into_timed_out(self) -> DeployOutcome {
        DeployOutcome::timed_out(self.output())
    }
}
