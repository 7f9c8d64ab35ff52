pub mod diagnostics;
pub mod length;
pub mod sequence;
pub mod render;
pub mod config;
pub mod demo;

pub use diagnostics::SequenceError;
pub use length::SequenceLength;
pub use sequence::{
    Fibonacci, FibonacciSequence, Strategy, fibonacci_list, fibonacci_list_recursive, fibonacci_list_with,
};

/// Parse a length literal, apply the configured limit, and generate with the
/// configured strategy. This is what the `generate` and `verify` commands run.
pub fn generate_from_literal(literal: &str, config: &config::Config) -> Result<FibonacciSequence, SequenceError> {
    let len = SequenceLength::parse_literal(literal)?;
    let len = config.check_length(len)?;
    FibonacciSequence::generate_with(len.get(), config.strategy)
}
