#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary text must parse or fail with a precondition error, never panic
    if let Ok(s) = std::str::from_utf8(data) {
        if let Err(err) = fibseq::SequenceLength::parse_literal(s) {
            assert!(err.is_precondition());
        }
    }
});
