//! Errors raised while extracting or persisting word mappings.
//!
//! Every variant is fatal: extraction is a run-once batch job and nothing
//! is retried or recovered.

use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ExtractError {
    /// A non-empty, non-`NULL` pair with no `-` separator.
    MalformedPair {
        pair: String,
        row: Vec<String>,
        line: u64,
    },
    /// A row with fewer fields than the grapheme-phoneme column needs.
    ShortRow {
        row: Vec<String>,
        line: u64,
        fields: usize,
    },
    Csv(csv::Error),
    Json(serde_json::Error),
    Io(io::Error),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::MalformedPair { pair, row, line } => {
                write!(f, "Failed on: '{pair}' in {row:?} (line {line})")
            }
            ExtractError::ShortRow { row, line, fields } => write!(
                f,
                "row on line {line} has {fields} field(s), expected at least 4: {row:?}"
            ),
            ExtractError::Csv(e) => write!(f, "could not read dictionary row: {e}"),
            ExtractError::Json(e) => write!(f, "could not (de)serialize word mappings: {e}"),
            ExtractError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl Error for ExtractError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ExtractError::Csv(e) => Some(e),
            ExtractError::Json(e) => Some(e),
            ExtractError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for ExtractError {
    fn from(e: csv::Error) -> Self {
        ExtractError::Csv(e)
    }
}

impl From<serde_json::Error> for ExtractError {
    fn from(e: serde_json::Error) -> Self {
        ExtractError::Json(e)
    }
}

impl From<io::Error> for ExtractError {
    fn from(e: io::Error) -> Self {
        ExtractError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_pair_message_names_pair_and_row() {
        let err = ExtractError::MalformedPair {
            pair: "badpair".to_string(),
            row: vec!["Z".to_string(), "Z".to_string(), "0".to_string(), "badpair".to_string()],
            line: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("'badpair'"));
        assert!(msg.contains("\"Z\""));
        assert!(msg.contains("line 7"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_error_has_source() {
        let err: ExtractError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing"));
    }
}
