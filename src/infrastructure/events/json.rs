//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink, WaitMode};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn mode_name(mode: WaitMode) -> &'static str {
    match mode {
        WaitMode::Stream => "stream",
        WaitMode::Polling => "polling",
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Triggered {
                execution_id,
                app_name,
            } => {
                serde_json::json!({
                    "event": "triggered",
                    "execution_id": execution_id,
                    "app_name": app_name,
                })
            }

            DeployEvent::WaitSkipped => {
                serde_json::json!({
                    "event": "wait_skipped",
                })
            }

            DeployEvent::WaitStarted { mode, timeout_secs } => {
                serde_json::json!({
                    "event": "wait_started",
                    "mode": mode_name(mode),
                    "timeout_secs": timeout_secs,
                })
            }

            DeployEvent::OutputLine { line } => {
                serde_json::json!({
                    "event": "line",
                    "line": line,
                })
            }

            DeployEvent::FallbackToPolling { reason } => {
                serde_json::json!({
                    "event": "fallback",
                    "mode": "polling",
                    "reason": reason,
                })
            }

            DeployEvent::StatusPolled {
                status,
                elapsed_secs,
            } => {
                serde_json::json!({
                    "event": "status",
                    "status": status,
                    "elapsed_secs": elapsed_secs,
                })
            }

            DeployEvent::Finished { status, exit_code } => {
                serde_json::json!({
                    "event": "finished",
                    "status": status,
                    "exit_code": exit_code,
                })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(buffer: &Arc<Mutex<Vec<u8>>>) -> Vec<serde_json::Value> {
        String::from_utf8(buffer.lock().unwrap().clone())
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn json_sink_outputs_triggered_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::Triggered {
            execution_id: "exec-1".to_string(),
            app_name: "web".to_string(),
        });

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(output.contains("\"event\":\"triggered\""));
        assert!(output.contains("\"execution_id\":\"exec-1\""));
    }

    #[test]
    fn json_sink_writes_one_object_per_line() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::OutputLine {
            line: "multi\nline".to_string(),
        });
        sink.on_event(DeployEvent::Finished {
            status: "failed".to_string(),
            exit_code: None,
        });

        let events = lines(&buffer);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["line"], "multi\nline");
        assert_eq!(events[1]["event"], "finished");
        assert!(events[1]["exit_code"].is_null());
    }

    #[test]
    fn json_sink_names_wait_mode() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::WaitStarted {
            mode: WaitMode::Polling,
            timeout_secs: 60,
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["mode"], "polling");
        assert_eq!(events[0]["timeout_secs"], 60);
    }
}
