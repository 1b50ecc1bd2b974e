#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // must not panic on any input, valid or not
    let _ = bos::decode(data);
});
