//! Console Event Sink
//!
//! Human-readable live view: trigger confirmation, output lines as they
//! arrive, fallback warnings and the final status line.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::entities::ExecutionStatus;
use crate::domain::ports::{DeployEvent, DeployEventSink, WaitMode};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{ColoredText, SemanticColor};
use crate::ui::UiContext;

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    color: bool,
    unicode: bool,
    verbose: bool,
}

impl ConsoleEventSink {
    pub fn stdout(ui: &UiContext, verbose: bool) -> Self {
        Self::with_writer(io::stdout(), ui.color, ui.unicode, verbose)
    }

    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        color: bool,
        unicode: bool,
        verbose: bool,
    ) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            color,
            unicode,
            verbose,
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.color, self.unicode)
    }

    fn render(&self, event: DeployEvent) -> String {
        match event {
            DeployEvent::Triggered {
                execution_id,
                app_name,
            } => format!(
                "{} Deployment triggered for {} {}",
                self.icon(Icon::Success),
                ColoredText::plain(app_name).bold().render(self.color),
                ColoredText::dim(format!("(execution {execution_id})")).render(self.color),
            ),
            DeployEvent::WaitSkipped => format!(
                "{} Not waiting for completion",
                self.icon(Icon::Pending)
            ),
            DeployEvent::WaitStarted { mode, timeout_secs } => {
                let (icon, label) = match mode {
                    WaitMode::Stream => (Icon::Remote, "Streaming deployment output"),
                    WaitMode::Polling => (Icon::Progress, "Polling for completion"),
                };
                format!(
                    "{} {} {}",
                    self.icon(icon),
                    label,
                    ColoredText::dim(format!("(timeout {timeout_secs}s)")).render(self.color)
                )
            }
            DeployEvent::OutputLine { line } => line,
            DeployEvent::FallbackToPolling { reason } => format!(
                "{} {}",
                self.icon(Icon::Warning),
                ColoredText::warning(format!("Stream unavailable: {reason}")).render(self.color)
            ),
            DeployEvent::StatusPolled {
                status,
                elapsed_secs,
            } => format!(
                "{} {}",
                self.icon(Icon::Arrow),
                ColoredText::dim(format!("Status: {status} ({elapsed_secs}s)")).render(self.color)
            ),
            DeployEvent::Finished { status, exit_code } => {
                let parsed = ExecutionStatus::parse(&status);
                let icon = match parsed {
                    ExecutionStatus::Success => Icon::Success,
                    ExecutionStatus::Timeout => Icon::Warning,
                    _ => Icon::Error,
                };
                let exit = exit_code.map_or_else(|| "unknown".to_string(), |c| c.to_string());
                format!(
                    "{} {} {}",
                    self.icon(icon),
                    ColoredText::new(
                        format!("Deployment {status}"),
                        SemanticColor::for_status(&parsed)
                    )
                    .bold()
                    .render(self.color),
                    ColoredText::dim(format!("(exit code {exit})")).render(self.color)
                )
            }
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        let line = self.render(event);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{line}");
            let _ = writer.flush();
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose
    }
}
