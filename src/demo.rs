//! Exploratory scenarios: big terms, recurrence over a long prefix, and
//! independence of the vectors handed out by separate calls.

use std::io::Write;

use crate::diagnostics::SequenceError;
use crate::render::{self, OutputFormat};
use crate::sequence::{FibonacciSequence, Strategy};

pub const PRINTED_LENGTH: usize = 150;
pub const VERIFIED_LENGTH: usize = 500;
pub const SHORT_LENGTH: usize = 4;
pub const LONG_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub printed_terms: usize,
    pub verified_terms: usize,
    /// The shorter sequence is a value-wise prefix of the longer one.
    pub prefix_shared: bool,
    /// The two sequences live in separate allocations.
    pub distinct_storage: bool,
    /// Mutating one sequence left the other unchanged.
    pub mutation_isolated: bool,
}

impl DemoReport {
    pub fn passed(&self) -> bool {
        self.prefix_shared && self.distinct_storage && self.mutation_isolated
    }
}

/// Run every scenario, printing the big sequence to `out` in `format`.
pub fn run(out: &mut impl Write, format: OutputFormat, strategy: Strategy) -> anyhow::Result<DemoReport> {
    let big = FibonacciSequence::generate_with(PRINTED_LENGTH, strategy)?;
    let printed = match format {
        OutputFormat::Json => render::render_json(&big, Some("big numbers"))?,
        other => render::render(&big, other)?,
    };
    out.write_all(printed.as_bytes())?;

    let huge = FibonacciSequence::generate_with(VERIFIED_LENGTH, strategy)?;
    huge.verify()?;
    tracing::debug!(terms = huge.len(), "recurrence holds");

    let (prefix_shared, distinct_storage, mutation_isolated) = check_independence(strategy)?;

    Ok(DemoReport {
        printed_terms: big.len(),
        verified_terms: huge.len(),
        prefix_shared,
        distinct_storage,
        mutation_isolated,
    })
}

fn check_independence(strategy: Strategy) -> Result<(bool, bool, bool), SequenceError> {
    let short = FibonacciSequence::generate_with(SHORT_LENGTH, strategy)?;
    let mut long = FibonacciSequence::generate_with(LONG_LENGTH, strategy)?;

    let prefix_shared = short.is_prefix_of(&long);
    let distinct_storage = !short.shares_storage_with(&long);

    let before = short.clone();
    if let Some(first) = long.values_mut().first_mut() {
        *first += 1u32;
    }
    let mutation_isolated = short == before;

    Ok((prefix_shared, distinct_storage, mutation_isolated))
}

/// Summary lines printed after the demo.
pub fn summary(report: &DemoReport) -> String {
    format!(
        "printed {} terms\nverified {} terms\nprefix shared: {}\ndistinct storage: {}\nmutation isolated: {}\n",
        report.printed_terms,
        report.verified_terms,
        report.prefix_shared,
        report.distinct_storage,
        report.mutation_isolated,
    )
}
