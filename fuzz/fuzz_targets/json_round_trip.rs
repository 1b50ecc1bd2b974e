#![no_main]

use libfuzzer_sys::fuzz_target;

// Treat the fuzz input as JSON text; if it parses, round-trip it through
// BOS and make sure encode/decode never panic and never disagree with
// each other about the resulting value.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(json) = serde_json::from_str::<serde_json::Value>(text) else {
        return;
    };
    let Some(value) = bos::json::from_json(&json) else {
        return;
    };
    if let Ok(bytes) = bos::encode(&value) {
        let decoded = bos::decode(&bytes);
        assert!(decoded.is_ok(), "encode produced a buffer decode rejects");
    }
});
