#![no_main]

use libfuzzer_sys::fuzz_target;
use lodas::core::Scalar;
use lodas::died::{SourceField, translate};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic for any field, mapped or not.
        let value = Scalar::from(s);
        for field in SourceField::ALL {
            let _ = translate(*field, Some(&value));
        }
    }
});
