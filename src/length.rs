//! Validated sequence lengths.
//!
//! Every value a caller hands to the generator passes through
//! [`SequenceLength`]. Integer types are accepted when non-negative; anything
//! that is not an integer (floats, JSON strings, booleans, malformed text) is
//! rejected with [`SequenceError::NotInteger`] before any work is done.

use std::fmt;

use serde_json::Value;

use crate::diagnostics::SequenceError;

/// A count of leading Fibonacci terms, known to be an integer >= 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SequenceLength(usize);

impl SequenceLength {
    pub const ZERO: SequenceLength = SequenceLength(0);

    pub fn new(len: usize) -> Self {
        SequenceLength(len)
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Parse a decimal integer literal such as `8`, `+8`, `-1` or `1_000`.
    ///
    /// Leading and trailing whitespace is ignored. Fractions, exponents and
    /// anything else that is not an integer literal are `NotInteger`, even
    /// when the value is integral (`4.0`).
    pub fn parse_literal(text: &str) -> Result<Self, SequenceError> {
        let trimmed = text.trim();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        if !is_integer_digits(digits) {
            return Err(SequenceError::NotInteger);
        }

        let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
        if negative {
            // "-0" is still zero.
            if cleaned.bytes().all(|b| b == b'0') {
                return Ok(SequenceLength::ZERO);
            }
            return Err(SequenceError::Negative);
        }

        cleaned
            .parse::<usize>()
            .map(SequenceLength)
            .map_err(|_| SequenceError::overflow(trimmed))
    }
}

/// Digits with single underscores between them, as in Rust integer literals.
fn is_integer_digits(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.is_empty() || !bytes[0].is_ascii_digit() || !bytes[bytes.len() - 1].is_ascii_digit() {
        return false;
    }
    bytes.iter().all(|b| b.is_ascii_digit() || *b == b'_') && !s.contains("__")
}

impl fmt::Display for SequenceLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SequenceLength> for usize {
    fn from(len: SequenceLength) -> usize {
        len.0
    }
}

macro_rules! impl_try_from_signed {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for SequenceLength {
                type Error = SequenceError;

                fn try_from(value: $t) -> Result<Self, Self::Error> {
                    if value < 0 {
                        return Err(SequenceError::Negative);
                    }
                    usize::try_from(value)
                        .map(SequenceLength)
                        .map_err(|_| SequenceError::overflow(value.to_string()))
                }
            }
        )*
    };
}

macro_rules! impl_try_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for SequenceLength {
                type Error = SequenceError;

                fn try_from(value: $t) -> Result<Self, Self::Error> {
                    usize::try_from(value)
                        .map(SequenceLength)
                        .map_err(|_| SequenceError::overflow(value.to_string()))
                }
            }
        )*
    };
}

impl_try_from_signed!(i8, i16, i32, i64, i128, isize);
impl_try_from_unsigned!(u8, u16, u32, u64, u128, usize);

// Floating-point values are never lengths, integral or not.
impl TryFrom<f32> for SequenceLength {
    type Error = SequenceError;

    fn try_from(_: f32) -> Result<Self, Self::Error> {
        Err(SequenceError::NotInteger)
    }
}

impl TryFrom<f64> for SequenceLength {
    type Error = SequenceError;

    fn try_from(_: f64) -> Result<Self, Self::Error> {
        Err(SequenceError::NotInteger)
    }
}

/// The dynamically typed boundary: only JSON integers are lengths.
/// `"4"`, `4.0`, `true` and `null` are all `NotInteger`.
impl TryFrom<&Value> for SequenceLength {
    type Error = SequenceError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    SequenceLength::try_from(u)
                } else if let Some(i) = n.as_i64() {
                    SequenceLength::try_from(i)
                } else {
                    Err(SequenceError::NotInteger)
                }
            }
            _ => Err(SequenceError::NotInteger),
        }
    }
}

impl TryFrom<Value> for SequenceLength {
    type Error = SequenceError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        SequenceLength::try_from(&value)
    }
}
