//! Deploy Event Port
//!
//! Provides an observable interface for a trigger-and-observe run.
//! Drives the live console view and the NDJSON event stream.

/// How the run is waiting for completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitMode {
    Stream,
    Polling,
}

/// Event emitted during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Trigger accepted
    Triggered {
        execution_id: String,
        app_name: String,
    },

    /// `wait` is off; the run ends after the trigger
    WaitSkipped,

    /// A wait path started
    WaitStarted { mode: WaitMode, timeout_secs: u64 },

    /// One line of deployment output, forwarded as soon as it is parsed
    OutputLine { line: String },

    /// The stream was unusable; polling takes over
    FallbackToPolling { reason: String },

    /// Non-terminal status seen while polling
    StatusPolled { status: String, elapsed_secs: u64 },

    /// A wait path produced the final outcome
    Finished {
        status: String,
        exit_code: Option<i64>,
    },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Live output in terminal
/// - JsonEventSink: NDJSON event stream for automation
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);

    /// Check if this sink wants detailed events (e.g., per-poll status)
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {
        // Do nothing
    }

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
