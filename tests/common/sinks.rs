//! In-memory result sink for driving the use case from integration tests.

use remote_deploy::{RemoteDeployResult, ResultSink};

#[derive(Debug, Default)]
pub struct MemorySink {
    pub outputs: Vec<(String, String)>,
    pub failure: Option<String>,
}

impl MemorySink {
    pub fn output(&self, name: &str) -> Option<&str> {
        self.outputs
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl ResultSink for MemorySink {
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
