//! Event-stream record parser
//!
//! Bytes arrive in arbitrary chunks. They are appended to a buffer, the buffer
//! is split on the blank-line record delimiter, every complete record is
//! parsed into a [`StreamEvent`], and the trailing partial record stays
//! buffered for the next chunk.
//!
//! Records are only decoded once complete, so a UTF-8 sequence split across
//! two chunks is reassembled before decoding. `\r\n` is folded to `\n` as it
//! is buffered, even when the two bytes arrive in different chunks.

use crate::domain::entities::Completion;

/// Event name carrying one line of deployment output
pub const OUTPUT_EVENT: &str = "output";
/// Event name carrying the terminal `{status, exit_code}` payload
pub const COMPLETE_EVENT: &str = "complete";

const RECORD_DELIMITER: &[u8] = b"\n\n";

/// A parsed event-stream record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// One line of output, verbatim
    Output(String),
    /// Terminal event
    Complete(Completion),
    /// `complete` event whose payload is not a valid completion object
    MalformedComplete(String),
    /// Any other record (unknown name, no `event:` line, no payload)
    Unrecognized { event: Option<String> },
}

/// Incremental parser for the deploy service's event stream
#[derive(Debug, Default)]
pub struct EventStreamParser {
    buffer: Vec<u8>,
}

impl EventStreamParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk and return every record it completed, in order.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<StreamEvent> {
        self.buffer.reserve(chunk.len());
        for &byte in chunk {
            if byte == b'\n' && self.buffer.last() == Some(&b'\r') {
                self.buffer.pop();
            }
            self.buffer.push(byte);
        }

        let mut events = Vec::new();
        while let Some(end) = find_delimiter(&self.buffer) {
            let record: Vec<u8> = self.buffer.drain(..end + RECORD_DELIMITER.len()).collect();
            let text = String::from_utf8_lossy(&record[..end]);
            if let Some(event) = parse_record(&text) {
                events.push(event);
            }
        }
        events
    }

    /// Bytes held back waiting for a record delimiter
    pub fn pending_len(&self) -> usize {
        self.buffer.len()
    }
}

fn find_delimiter(buffer: &[u8]) -> Option<usize> {
    buffer
        .windows(RECORD_DELIMITER.len())
        .position(|window| window == RECORD_DELIMITER)
}

fn parse_record(record: &str) -> Option<StreamEvent> {
    if record.trim().is_empty() {
        return None;
    }

    let mut event: Option<String> = None;
    let mut data: Option<String> = None;

    for line in record.split('\n') {
        if line.starts_with(':') {
            continue;
        }
        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };
        match field {
            "event" => event = Some(value.to_string()),
            "data" => match data.as_mut() {
                Some(existing) => {
                    existing.push('\n');
                    existing.push_str(value);
                }
                None => data = Some(value.to_string()),
            },
            _ => {}
        }
    }

    let parsed = match (event.as_deref(), data) {
        (Some(OUTPUT_EVENT), Some(line)) => StreamEvent::Output(line),
        (Some(COMPLETE_EVENT), Some(payload)) => match serde_json::from_str(&payload) {
            Ok(completion) => StreamEvent::Complete(completion),
            Err(_) => StreamEvent::MalformedComplete(payload),
        },
        (Some(COMPLETE_EVENT), None) => StreamEvent::MalformedComplete(String::new()),
        _ => StreamEvent::Unrecognized { event },
    };
    Some(parsed)
}
