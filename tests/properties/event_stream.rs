//! Property tests for the event-stream record parser.

use proptest::prelude::*;

use remote_deploy::domain::services::{EventStreamParser, StreamEvent};

/// Output text: any characters except the line terminators
fn output_line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[^\r\n]{0,40}").unwrap()
}

fn record() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => output_line().prop_map(|line| format!("event: output\ndata: {line}\n\n")),
        1 => (prop_oneof![Just("success"), Just("failed")], -2i64..256).prop_map(
            |(status, code)| format!(
                "event: complete\ndata: {{\"status\":\"{status}\",\"exit_code\":{code}}}\n\n"
            )
        ),
        1 => Just(": keep-alive\n\n".to_string()),
        1 => output_line().prop_map(|line| format!("event: progress\ndata: {line}\n\n")),
    ]
}

/// A full stream body, optionally with CRLF line endings
fn stream_body() -> impl Strategy<Value = Vec<u8>> {
    (proptest::collection::vec(record(), 0..12), any::<bool>()).prop_map(|(records, crlf)| {
        let body = records.concat();
        let body = if crlf {
            body.replace('\n', "\r\n")
        } else {
            body
        };
        body.into_bytes()
    })
}

fn parse_chunked(body: &[u8], cuts: &[usize]) -> Vec<StreamEvent> {
    let mut cuts: Vec<usize> = cuts.iter().map(|cut| cut % (body.len() + 1)).collect();
    cuts.sort_unstable();

    let mut parser = EventStreamParser::new();
    let mut events = Vec::new();
    let mut start = 0;
    for cut in cuts {
        events.extend(parser.feed(&body[start..cut]));
        start = cut;
    }
    events.extend(parser.feed(&body[start..]));
    events
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Chunk boundaries never change the parsed events.
    #[test]
    fn property_events_are_independent_of_chunking(
        body in stream_body(),
        cuts in proptest::collection::vec(any::<usize>(), 0..16)
    ) {
        let whole = EventStreamParser::new().feed(&body);
        let chunked = parse_chunked(&body, &cuts);
        prop_assert_eq!(whole, chunked);
    }

    /// PROPERTY: Byte-at-a-time feeding matches single-shot parsing.
    #[test]
    fn property_single_bytes_match_whole_body(body in stream_body()) {
        let whole = EventStreamParser::new().feed(&body);

        let mut parser = EventStreamParser::new();
        let mut events = Vec::new();
        for byte in &body {
            events.extend(parser.feed(std::slice::from_ref(byte)));
        }

        prop_assert_eq!(whole, events);
        prop_assert_eq!(parser.pending_len(), 0);
    }

    /// PROPERTY: Output payloads survive verbatim, including multi-byte text.
    #[test]
    fn property_output_lines_are_verbatim(lines in proptest::collection::vec(output_line(), 1..6)) {
        let body: String = lines
            .iter()
            .map(|line| format!("event: output\ndata: {line}\n\n"))
            .collect();

        let parsed: Vec<String> = parse_chunked(body.as_bytes(), &[1, 7, 13])
            .into_iter()
            .filter_map(|event| match event {
                StreamEvent::Output(line) => Some(line),
                _ => None,
            })
            .collect();

        prop_assert_eq!(parsed, lines);
    }

    /// PROPERTY: Arbitrary bytes never panic the parser.
    #[test]
    fn property_arbitrary_bytes_never_panic(
        chunks in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..64), 0..8)
    ) {
        let mut parser = EventStreamParser::new();
        for chunk in &chunks {
            let _ = parser.feed(chunk);
        }
    }
}
