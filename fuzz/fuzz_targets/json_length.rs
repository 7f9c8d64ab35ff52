#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use serde_json::{Value, json};

/// Shapes a caller might hand across the JSON boundary.
#[derive(Arbitrary, Debug)]
enum FuzzValue {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
    Flag(bool),
    Null,
    List(Vec<u16>),
}

impl FuzzValue {
    fn to_json(&self) -> Value {
        match self {
            FuzzValue::Signed(n) => json!(n),
            FuzzValue::Unsigned(n) => json!(n),
            FuzzValue::Float(x) => json!(x),
            FuzzValue::Text(s) => json!(s),
            FuzzValue::Flag(b) => json!(b),
            FuzzValue::Null => Value::Null,
            FuzzValue::List(items) => json!(items),
        }
    }
}

fuzz_target!(|input: FuzzValue| {
    let value = input.to_json();
    // Only small lengths are actually built
    match fibseq::SequenceLength::try_from(&value) {
        Ok(len) if len.get() <= 256 => {
            let seq = fibseq::FibonacciSequence::generate(len.get()).unwrap();
            assert_eq!(seq.len(), len.get());
            assert!(seq.verify().is_ok());
        }
        Ok(_) => {}
        Err(err) => assert!(err.is_precondition()),
    }
});
