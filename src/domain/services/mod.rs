//! Domain Services
//!
//! Pure logic with no I/O: the event-stream record parser and the output
//! bound applied before results leave the process.

mod event_stream;
mod truncation;

pub use event_stream::{EventStreamParser, StreamEvent, COMPLETE_EVENT, OUTPUT_EVENT};
pub use truncation::{truncate_output, MAX_OUTPUT_CHARS, TRUNCATION_MARKER};
