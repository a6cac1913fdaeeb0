#![no_main]

use libfuzzer_sys::fuzz_target;
use remote_deploy::domain::services::EventStreamParser;

fuzz_target!(|data: &[u8]| {
    // First byte picks the chunk size so split points vary between runs
    let Some((&size, body)) = data.split_first() else {
        return;
    };
    let size = usize::from(size).max(1);

    let whole = EventStreamParser::new().feed(body);

    let mut parser = EventStreamParser::new();
    let mut chunked = Vec::new();
    for chunk in body.chunks(size) {
        chunked.extend(parser.feed(chunk));
    }

    assert_eq!(whole, chunked);
});
