// Fuzz target exploring clock text and JSON parsing of time values.
#![no_main]

use libfuzzer_sys::fuzz_target;
use visugps_protocol::time::TimeValue;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(time) = text.parse::<TimeValue>() {
            let reparsed: TimeValue = time.to_string().parse().expect("display output parses");
            assert_eq!(reparsed, time);
        }
    }

    if let Ok(time) = serde_json::from_slice::<TimeValue>(data) {
        let _ = time.timestamp();
        let _ = time.to_naive_time();
    }
});
