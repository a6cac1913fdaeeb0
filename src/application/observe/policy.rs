use std::time::Duration;

/// Timing knobs shared by both wait paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    /// How often the stream deadline and idle time are checked
    pub check_interval: Duration,
    /// Silence after which an idle stream is logged (never acted on)
    pub idle_threshold: Duration,
    /// Delay between status checks while polling
    pub poll_interval: Duration,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            check_interval: Duration::from_secs(5),
            idle_threshold: Duration::from_secs(30),
            poll_interval: Duration::from_secs(5),
        }
    }
}
