use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::sequence::FibonacciSequence;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `[0, 1, 1, 2]`
    #[default]
    Plain,
    /// One term per line.
    Lines,
    /// `{"length": 4, "values": ["0", "1", "1", "2"]}`
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(OutputFormat::Plain),
            "lines" => Ok(OutputFormat::Lines),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'; expected 'plain', 'lines' or 'json'", other)),
        }
    }
}

// Terms are serialized as decimal strings.
#[derive(Serialize)]
struct JsonSequence<'a> {
    length: usize,
    values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
}

/// Render a sequence in the given format. The result always ends with a newline.
pub fn render(seq: &FibonacciSequence, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Plain => Ok(format!("{seq}\n")),
        OutputFormat::Lines => Ok(seq.iter().map(|value| format!("{value}\n")).collect()),
        OutputFormat::Json => render_json(seq, None),
    }
}

/// JSON rendering with an optional label field, used by the demo report.
pub fn render_json(seq: &FibonacciSequence, label: Option<&str>) -> Result<String, serde_json::Error> {
    let doc = JsonSequence {
        length: seq.len(),
        values: seq.iter().map(ToString::to_string).collect(),
        label,
    };
    let mut out = serde_json::to_string(&doc)?;
    out.push('\n');
    Ok(out)
}
