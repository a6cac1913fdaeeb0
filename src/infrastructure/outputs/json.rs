//! NDJSON result sink for `--json` mode

use std::io::{self, Write};

use serde::Serialize;

use crate::domain::ports::ResultSink;
use crate::error::RemoteDeployResult;

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum ResultRecord<'a> {
    Output { name: &'a str, value: &'a str },
    Failed { message: &'a str },
}

pub struct JsonResultSink {
    writer: Box<dyn Write + Send>,
    failed: bool,
}

impl JsonResultSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
            failed: false,
        }
    }

    fn write_record(&mut self, record: &ResultRecord<'_>) -> RemoteDeployResult<()> {
        let line = serde_json::to_string(record).map_err(io::Error::from)?;
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl ResultSink for JsonResultSink {
    fn set_output(&mut self, name: &str, value: &str) -> RemoteDeployResult<()> {
        self.write_record(&ResultRecord::Output { name, value })
    }

    fn set_failed(&mut self, message: &str) {
        self.failed = true;
        let _ = self.write_record(&ResultRecord::Failed { message });
    }

    fn has_failed(&self) -> bool {
        self.failed
    }
}
