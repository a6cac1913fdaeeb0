//! Completion Poller
//!
//! Pull-based wait path used when the stream is unusable. Asks the status
//! endpoint on a fixed interval until the service reports a final status or
//! the deadline passes. Transient status errors are logged and retried.

use std::time::Duration;

use tokio::time::{sleep, Instant};
use tracing::{debug, warn};

use crate::domain::entities::{DeployOutcome, ExecutionRef};
use crate::domain::ports::{DeployApi, DeployEvent, DeployEventSink};

use super::policy::WaitPolicy;

pub struct CompletionPoller<'a> {
    api: &'a dyn DeployApi,
    events: &'a dyn DeployEventSink,
    policy: WaitPolicy,
}

impl<'a> CompletionPoller<'a> {
    pub fn new(api: &'a dyn DeployApi, events: &'a dyn DeployEventSink, policy: WaitPolicy) -> Self {
        Self {
            api,
            events,
            policy,
        }
    }

    /// Poll until the execution succeeds or fails, or `timeout` elapses.
    ///
    /// Never errors: a deadline yields a timed-out outcome with empty output.
    pub async fn poll(&self, execution: &ExecutionRef, timeout: Duration) -> DeployOutcome {
        let started = Instant::now();

        loop {
            let elapsed = started.elapsed();
            if elapsed >= timeout {
                debug!(elapsed_secs = elapsed.as_secs(), "Polling deadline reached");
                return DeployOutcome::timed_out("");
            }

            match self.api.status(execution).await {
                Ok(snapshot) if snapshot.status.is_final_remote() => {
                    return DeployOutcome::from_snapshot(snapshot, String::new());
                }
                Ok(snapshot) => {
                    if self.events.wants_detailed_events() {
                        self.events.on_event(DeployEvent::StatusPolled {
                            status: snapshot.status.to_string(),
                            elapsed_secs: started.elapsed().as_secs(),
                        });
                    }
                }
                Err(err) => {
                    warn!("Status check failed: {err}");
                }
            }

            sleep(self.policy.poll_interval).await;
        }
    }
}
