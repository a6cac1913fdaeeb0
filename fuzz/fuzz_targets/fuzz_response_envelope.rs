#![no_main]

use libfuzzer_sys::fuzz_target;
use remote_deploy::infrastructure::http::{parse_status, parse_trigger};

fuzz_target!(|data: &[u8]| {
    if let Ok(body) = std::str::from_utf8(data) {
        // Envelope validation must reject, never panic
        let _ = parse_trigger(200, body);
        let _ = parse_status(200, body);
    }
});
