#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let out = lodas::lodas::format_numeric(s);
        assert!(out.is_empty() || out.contains(','));
    }
});
