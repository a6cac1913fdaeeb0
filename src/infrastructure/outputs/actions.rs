//! GitHub Actions result sink
//!
//! Outputs are appended to the file named by `$GITHUB_OUTPUT` in heredoc
//! form. Outside a runner they are printed as `name=value` lines.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::ports::ResultSink;
use crate::error::RemoteDeployResult;
use crate::ui::ci::{github_actions_annotation, AnnotationLevel};

/// Environment variable naming the runner's output file
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

pub struct ActionsResultSink {
    output_file: Option<PathBuf>,
    console: Box<dyn Write + Send>,
    failed: bool,
}

impl ActionsResultSink {
    /// Sink for the current process: `$GITHUB_OUTPUT` if set, stdout otherwise.
    pub fn from_env() -> Self {
        let output_file = std::env::var_os(GITHUB_OUTPUT_ENV)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        Self::new(output_file, io::stdout())
    }

    pub fn new<W: Write + Send + 'static>(output_file: Option<PathBuf>, console: W) -> Self {
        Self {
            output_file,
            console: Box::new(console),
            failed: false,
        }
    }
}

/// Heredoc delimiter not occurring anywhere in `value`
fn delimiter_for(value: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();
    let base = format!("ghadelimiter_{}_{}", process::id(), nanos);

    let mut candidate = base.clone();
    let mut attempt = 0u32;
    while value.contains(&candidate) {
        attempt += 1;
        candidate = format!("{base}_{attempt}");
    }
    candidate
}

/// `name<<DELIM\nvalue\nDELIM\n`
pub fn heredoc_entry(name: &str, value: &str) -> String {
    let delimiter = delimiter_for(value);
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

impl ResultSink for ActionsResultSink {
    fn set_output(&mut self, name: &str, value: &str) -> RemoteDeployResult<()> {
        match &self.output_file {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                file.write_all(heredoc_entry(name, value).as_bytes())?;
            }
            None => {
                writeln!(self.console, "{name}={value}")?;
            }
        }
        Ok(())
    }

    fn set_failed(&mut self, message: &str) {
        self.failed = true;
        let annotation = github_actions_annotation(AnnotationLevel::Error, message, None);
        let _ = writeln!(self.console, "{annotation}");
        let _ = self.console.flush();
    }

    fn has_failed(&self) -> bool {
        self.failed
    }
}
