use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("sequence length is not an integer")]
    NotInteger,

    #[error("sequence length is less than 0")]
    Negative,

    #[error("sequence length {literal} does not fit in memory on this platform")]
    Overflow { literal: String },

    #[error("entry {index} is not correct")]
    Recurrence { index: usize },

    #[error("sequence length {requested} exceeds the configured maximum of {max}")]
    LimitExceeded { requested: usize, max: usize },

    #[error("Config error: {msg}")]
    Config { msg: String, path: PathBuf },
}

impl SequenceError {
    pub fn overflow(literal: impl Into<String>) -> Self {
        Self::Overflow { literal: literal.into() }
    }

    pub fn config(msg: impl Into<String>, path: PathBuf) -> Self {
        Self::Config { msg: msg.into(), path }
    }

    /// True for the errors raised while turning a caller value into a length.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::NotInteger | Self::Negative | Self::Overflow { .. })
    }
}

/// Render a SequenceError with ariadne for nice terminal output.
///
/// `source` is the raw text the length was parsed from (a CLI argument);
/// precondition errors get a label spanning it.
pub fn render_error(source: &str, err: &SequenceError) {
    use ariadne::{Label, Report, ReportKind, Source};

    match err {
        _ if err.is_precondition() && source.trim().is_empty() => {
            eprintln!("error: {err}");
        }
        SequenceError::NotInteger | SequenceError::Negative | SequenceError::Overflow { .. } => {
            let kind_str = match err {
                SequenceError::NotInteger => "type",
                _ => "range",
            };
            let _ = Report::build(ReportKind::Error, (), 0)
                .with_message(format!("{kind_str} error: {err}"))
                .with_label(Label::new(0..source.len()).with_message(format!("`{source}` given here")))
                .finish()
                .eprint(Source::from(source));
        }
        SequenceError::Recurrence { .. } | SequenceError::LimitExceeded { .. } => {
            eprintln!("error: {err}");
        }
        SequenceError::Config { msg, path } => {
            eprintln!("error[config]: {msg}");
            eprintln!("  --> {}", path.display());
        }
    }
}
