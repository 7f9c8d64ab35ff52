use std::fmt;
use std::mem;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::Deserialize;

use crate::diagnostics::SequenceError;
use crate::length::SequenceLength;

/// How the sequence is built. Both produce identical output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Preallocate the output and fill forward from the two seeds.
    #[default]
    Iterative,
    /// Extend the sequence of length n-1 by one term, starting from the base cases.
    Recursive,
}

/// Generate the first `sequence_length` Fibonacci numbers: 0, 1, 1, 2, 3, 5, ...
///
/// The length is validated before anything is computed; see [`SequenceLength`]
/// for what is accepted. Every call returns a freshly allocated vector.
///
/// ```
/// use fibseq::fibonacci_list;
/// use num_bigint::BigUint;
///
/// let seq = fibonacci_list(8).unwrap();
/// let expected: Vec<BigUint> = [0u32, 1, 1, 2, 3, 5, 8, 13].into_iter().map(BigUint::from).collect();
/// assert_eq!(seq, expected);
/// ```
pub fn fibonacci_list<L>(sequence_length: L) -> Result<Vec<BigUint>, SequenceError>
where
    L: TryInto<SequenceLength, Error = SequenceError>,
{
    let len = sequence_length.try_into()?;
    Ok(build_iterative(len.get()))
}

/// Same contract as [`fibonacci_list`], built by recursion on the length.
///
/// The recursion is unrolled: each prefix is extended in place, so call depth
/// stays constant however long the sequence is.
pub fn fibonacci_list_recursive<L>(sequence_length: L) -> Result<Vec<BigUint>, SequenceError>
where
    L: TryInto<SequenceLength, Error = SequenceError>,
{
    let len = sequence_length.try_into()?;
    Ok(build_recursive(len.get()))
}

/// Generate with an explicit strategy.
pub fn fibonacci_list_with<L>(sequence_length: L, strategy: Strategy) -> Result<Vec<BigUint>, SequenceError>
where
    L: TryInto<SequenceLength, Error = SequenceError>,
{
    let len = sequence_length.try_into()?;
    Ok(match strategy {
        Strategy::Iterative => build_iterative(len.get()),
        Strategy::Recursive => build_recursive(len.get()),
    })
}

fn build_iterative(n: usize) -> Vec<BigUint> {
    let mut values = Vec::with_capacity(n);
    values.extend(Fibonacci::new().take(n));
    values
}

fn build_recursive(n: usize) -> Vec<BigUint> {
    // Three base cases: the step below reads back two entries.
    let mut values = match n {
        0 => return Vec::new(),
        1 => return vec![BigUint::zero()],
        _ => {
            let mut seed = Vec::with_capacity(n);
            seed.push(BigUint::zero());
            seed.push(BigUint::one());
            seed
        }
    };
    // Sequence of length k -> length k + 1.
    for k in 2..n {
        let next = &values[k - 2] + &values[k - 1];
        values.push(next);
    }
    values
}

/// Unbounded iterator over the Fibonacci numbers, starting at F(0) = 0.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    current: BigUint,
    next: BigUint,
}

impl Fibonacci {
    pub fn new() -> Self {
        Self { current: BigUint::zero(), next: BigUint::one() }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        let following = &self.current + &self.next;
        let next = mem::replace(&mut self.next, following);
        Some(mem::replace(&mut self.current, next))
    }
}

/// The first `len()` Fibonacci numbers, owned by whoever asked for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FibonacciSequence {
    values: Vec<BigUint>,
}

impl FibonacciSequence {
    pub fn generate<L>(sequence_length: L) -> Result<Self, SequenceError>
    where
        L: TryInto<SequenceLength, Error = SequenceError>,
    {
        Self::generate_with(sequence_length, Strategy::Iterative)
    }

    pub fn generate_with<L>(sequence_length: L, strategy: Strategy) -> Result<Self, SequenceError>
    where
        L: TryInto<SequenceLength, Error = SequenceError>,
    {
        fibonacci_list_with(sequence_length, strategy).map(|values| Self { values })
    }

    /// Wrap values from elsewhere. Nothing is checked until [`verify`](Self::verify).
    pub fn from_values(values: Vec<BigUint>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&BigUint> {
        self.values.get(index)
    }

    pub fn values(&self) -> &[BigUint] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [BigUint] {
        &mut self.values
    }

    pub fn into_values(self) -> Vec<BigUint> {
        self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BigUint> {
        self.values.iter()
    }

    /// Check the seeds and the recurrence. Reports the first bad index.
    pub fn verify(&self) -> Result<(), SequenceError> {
        if let Some(first) = self.values.first() {
            if !first.is_zero() {
                return Err(SequenceError::Recurrence { index: 0 });
            }
        }
        if let Some(second) = self.values.get(1) {
            if !second.is_one() {
                return Err(SequenceError::Recurrence { index: 1 });
            }
        }
        for (offset, window) in self.values.windows(3).enumerate() {
            if &window[0] + &window[1] != window[2] {
                return Err(SequenceError::Recurrence { index: offset + 2 });
            }
        }
        Ok(())
    }

    /// Whether both sequences are backed by the same allocation.
    pub fn shares_storage_with(&self, other: &FibonacciSequence) -> bool {
        !self.values.is_empty() && std::ptr::eq(self.values.as_ptr(), other.values.as_ptr())
    }

    /// True when `self` is a value-wise prefix of `other`.
    pub fn is_prefix_of(&self, other: &FibonacciSequence) -> bool {
        other.values.starts_with(&self.values)
    }
}

impl fmt::Display for FibonacciSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

impl<'a> IntoIterator for &'a FibonacciSequence {
    type Item = &'a BigUint;
    type IntoIter = std::slice::Iter<'a, BigUint>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl IntoIterator for FibonacciSequence {
    type Item = BigUint;
    type IntoIter = std::vec::IntoIter<BigUint>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
