//! Output truncation
//!
//! Result sinks (workflow output files in particular) have size limits, so
//! captured output is bounded before it is reported.

use std::borrow::Cow;

/// Maximum number of characters of output that are reported
pub const MAX_OUTPUT_CHARS: usize = 50_000;

/// Appended after the retained prefix when output was cut
pub const TRUNCATION_MARKER: &str = "\n... (truncated)";

/// Bound `output` to `max_chars` characters, appending [`TRUNCATION_MARKER`]
/// when anything was removed.
pub fn truncate_output(output: &str, max_chars: usize) -> Cow<'_, str> {
    match output.char_indices().nth(max_chars) {
        None => Cow::Borrowed(output),
        Some((cut, _)) => {
            let mut bounded = String::with_capacity(cut + TRUNCATION_MARKER.len());
            bounded.push_str(&output[..cut]);
            bounded.push_str(TRUNCATION_MARKER);
            Cow::Owned(bounded)
        }
    }
}
