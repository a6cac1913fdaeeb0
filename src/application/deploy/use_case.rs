//! Deploy Use Case
//!
//! Orchestrates a run:
//! 1. Trigger the deployment (fatal on failure)
//! 2. Record the execution id
//! 3. Wait on the event stream, falling back to polling if it is unusable
//! 4. Bound the output and report status, exit code and output
//! 5. Map the final status to the run verdict
//!
//! This use case is pure orchestration - parsing and truncation live in domain services.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::DeployConfig;
use crate::domain::entities::{DeployOutcome, ExecutionRef};
use crate::domain::ports::{
    outputs, DeployApi, DeployEvent, DeployEventSink, NoopEventSink, ResultSink, WaitMode,
};
use crate::domain::services::{truncate_output, MAX_OUTPUT_CHARS};
use crate::error::RemoteDeployResult;

use crate::application::observe::{CompletionPoller, StreamObserver, WaitPolicy};

use super::result::{RunReport, RunVerdict};

/// Deploy use case - orchestrates the trigger-and-observe flow
///
/// Parameterized by the deploy API port, allowing for easy testing and
/// different transports.
pub struct DeployUseCase<A: DeployApi> {
    api: A,
    events: Arc<dyn DeployEventSink>,
    policy: WaitPolicy,
}

impl<A: DeployApi> DeployUseCase<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            events: Arc::new(NoopEventSink),
            policy: WaitPolicy::default(),
        }
    }

    /// Report progress to `events`
    pub fn with_events(mut self, events: Arc<dyn DeployEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn with_policy(mut self, policy: WaitPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Run the full flow, recording outputs and the failure marker in `sink`.
    ///
    /// Never returns an error: a trigger or reporting failure becomes an
    /// `Aborted` verdict and is recorded as "Action failed: ...".
    pub async fn run(&self, config: &DeployConfig, sink: &mut dyn ResultSink) -> RunReport {
        let mut report = RunReport::new();

        if let Err(err) = self.execute(config, sink, &mut report).await {
            let message = format!("Action failed: {err}");
            sink.set_failed(&message);
            report.verdict = RunVerdict::Aborted { message };
            return report;
        }

        if let Some(message) = report.verdict.failure_message() {
            sink.set_failed(&message);
        }
        report
    }

    async fn execute(
        &self,
        config: &DeployConfig,
        sink: &mut dyn ResultSink,
        report: &mut RunReport,
    ) -> RemoteDeployResult<()> {
        let trigger = self
            .api
            .trigger(&config.app_id, config.command_id.as_deref())
            .await?;
        debug!(execution_id = %trigger.execution_id, "Deployment triggered");

        self.events.on_event(DeployEvent::Triggered {
            execution_id: trigger.execution_id.clone(),
            app_name: trigger
                .app_name
                .clone()
                .unwrap_or_else(|| config.app_id.clone()),
        });
        sink.set_output(outputs::EXECUTION_ID, &trigger.execution_id)?;
        report.execution_id = Some(trigger.execution_id.clone());

        if !config.wait {
            self.events.on_event(DeployEvent::WaitSkipped);
            sink.set_output(outputs::STATUS, "pending")?;
            report.verdict = RunVerdict::Pending;
            return Ok(());
        }

        let execution = ExecutionRef::new(config.app_id.clone(), trigger.execution_id);
        let outcome = self.wait(&execution, config).await;

        self.events.on_event(DeployEvent::Finished {
            status: outcome.status.to_string(),
            exit_code: outcome.exit_code,
        });
        sink.set_output(outputs::STATUS, outcome.status.as_str())?;
        sink.set_output(outputs::EXIT_CODE, &outcome.exit_code_string())?;
        sink.set_output(
            outputs::OUTPUT,
            &truncate_output(&outcome.output, MAX_OUTPUT_CHARS),
        )?;

        report.verdict = RunVerdict::from_outcome(&outcome, config.timeout_secs);
        report.outcome = Some(outcome);
        Ok(())
    }

    /// Stream first; on any stream error, poll the same execution.
    async fn wait(&self, execution: &ExecutionRef, config: &DeployConfig) -> DeployOutcome {
        let events = self.events.as_ref();

        events.on_event(DeployEvent::WaitStarted {
            mode: WaitMode::Stream,
            timeout_secs: config.timeout_secs,
        });
        let observer = StreamObserver::new(&self.api, events, self.policy);
        match observer.observe(execution, config.timeout()).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!("Stream failed, falling back to polling: {err}");
                events.on_event(DeployEvent::FallbackToPolling {
                    reason: err.to_string(),
                });
                events.on_event(DeployEvent::WaitStarted {
                    mode: WaitMode::Polling,
                    timeout_secs: config.timeout_secs,
                });
                CompletionPoller::new(&self.api, events, self.policy)
                    .poll(execution, config.timeout())
                    .await
            }
        }
    }
}
