//! The mapping extractor.
//!
//! Reads the tab-delimited phonics dictionary and builds a [`WordMapping`]
//! from column 0 (the word) and column 3 (the grapheme-phoneme pairs). The
//! first malformed pair or short row aborts the whole extraction.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::error::ExtractError;
use crate::mapping::WordMapping;
use crate::normalize::Normalization;
use crate::pairparse::parse_pairs;

pub const WORD_FIELD: usize = 0;
pub const PAIRS_FIELD: usize = 3;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    pub normalize: Normalization,
}

/// Extract the word mapping from the dictionary at `path` with default options.
pub fn extract<P: AsRef<Path>>(path: P) -> Result<WordMapping, ExtractError> {
    extract_with(path, &ExtractOptions::default())
}

/// Like [`extract`], with explicit [`ExtractOptions`].
pub fn extract_with<P: AsRef<Path>>(
    path: P,
    options: &ExtractOptions,
) -> Result<WordMapping, ExtractError> {
    let path = path.as_ref();
    info!("reading dictionary {}", path.display());
    let file = File::open(path)?;
    extract_from_reader(BufReader::new(file), options)
}

/// Build the mapping from any tab-delimited source.
///
/// No header row is skipped. Rows may carry any number of fields beyond
/// the fourth; those are ignored. A later row for the same word replaces
/// the earlier one. A blank line is a row with no fields and aborts the
/// extraction like any other short row.
pub fn extract_from_reader<R: Read>(
    mut reader: R,
    options: &ExtractOptions,
) -> Result<WordMapping, ExtractError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    // csv drops empty lines without reporting them
    let blank_line = first_blank_line(&data);

    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(data.as_slice());

    let mut mapping = WordMapping::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        if let Some(blank) = blank_line.filter(|&blank| line >= blank) {
            return Err(blank_row(blank));
        }
        let (word, pairs) = match (record.get(WORD_FIELD), record.get(PAIRS_FIELD)) {
            (Some(word), Some(pairs)) => (word, pairs),
            _ => {
                return Err(ExtractError::ShortRow {
                    row: row_fields(&record),
                    line,
                    fields: record.len(),
                })
            }
        };

        let entries = parse_pairs(pairs).map_err(|pair| ExtractError::MalformedPair {
            pair: pair.to_string(),
            row: row_fields(&record),
            line,
        })?;

        if entries.is_empty() {
            debug!("line {line}: no pairs for '{word}', skipping");
            continue;
        }

        let entries = entries
            .into_iter()
            .map(|entry| options.normalize.apply_entry(entry))
            .collect();
        if mapping.insert(word.to_string(), entries).is_some() {
            debug!("line {line}: '{word}' seen before, keeping the later row");
        }
    }

    if let Some(blank) = blank_line {
        return Err(blank_row(blank));
    }

    info!("extracted {} words", mapping.len());
    Ok(mapping)
}

fn blank_row(line: u64) -> ExtractError {
    ExtractError::ShortRow {
        row: Vec::new(),
        line,
        fields: 0,
    }
}

/// Line number (1-based) of the first empty line outside a quoted field.
///
/// A `\r\n` pair counts as one line terminator. A `"` opens a quoted field
/// only at the start of a field, so stray quotes inside a field are literal.
fn first_blank_line(data: &[u8]) -> Option<u64> {
    let mut line = 1;
    let mut line_start = true;
    let mut field_start = true;
    let mut quoted = false;
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if quoted {
            if b == b'"' {
                if data.get(i + 1) == Some(&b'"') {
                    i += 1;
                } else {
                    quoted = false;
                }
            } else if b == b'\n' {
                line += 1;
            }
            field_start = false;
        } else if b == b'\n' || (b == b'\r' && data.get(i + 1) == Some(&b'\n')) {
            if line_start {
                return Some(line);
            }
            if b == b'\r' {
                i += 1;
            }
            line += 1;
            line_start = true;
            field_start = true;
            i += 1;
            continue;
        } else {
            quoted = b == b'"' && field_start;
            field_start = b == b'\t';
        }
        line_start = false;
        i += 1;
    }
    None
}

fn row_fields(record: &StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::MappingEntry;

    fn run(data: &str) -> Result<WordMapping, ExtractError> {
        extract_from_reader(data.as_bytes(), &ExtractOptions::default())
    }

    #[test]
    fn test_basic_row() {
        let mapping = run("AM\tAM\t0\tae-a,m-m\n").expect("valid dictionary");
        assert_eq!(
            mapping.get("AM"),
            Some(&vec![MappingEntry::new("ae", "a"), MappingEntry::new("m", "m")])
        );
        assert_eq!(mapping.len(), 1);
    }

    #[test]
    fn test_empty_pairs_omit_word() {
        let mapping = run("X\tX\t0\t\nW\tW\t0\tNULL,,NULL\n").expect("valid dictionary");
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_null_entries_skipped() {
        let mapping = run("Y\tY\t0\tai-eɪ,NULL,d-d\n").expect("valid dictionary");
        assert_eq!(
            mapping["Y"],
            vec![MappingEntry::new("ai", "eɪ"), MappingEntry::new("d", "d")]
        );
    }

    #[test]
    fn test_hyphenated_phoneme_kept_whole() {
        let mapping = run("Q\tQ\t0\ta-b-c\n").expect("valid dictionary");
        assert_eq!(mapping["Q"], vec![MappingEntry::new("a", "b-c")]);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let mapping = run("AM\tAM\t0\tae-a\nAM\tAM\t1\ta-ə,m-m\n").expect("valid dictionary");
        assert_eq!(
            mapping["AM"],
            vec![MappingEntry::new("a", "ə"), MappingEntry::new("m", "m")]
        );
    }

    #[test]
    fn test_case_is_preserved() {
        let mapping = run("African\tAfrican\t0\ta-æ\nafrican\tafrican\t0\ta-ə\n")
            .expect("valid dictionary");
        assert_eq!(mapping.len(), 2);
        assert!(mapping.contains_key("African"));
        assert!(mapping.contains_key("african"));
    }

    #[test]
    fn test_extra_fields_ignored() {
        let mapping = run("AM\tAM\t0\tae-a,m-m\textra\tmore\n").expect("valid dictionary");
        assert_eq!(mapping["AM"].len(), 2);
    }

    #[test]
    fn test_malformed_pair_aborts() {
        let err = run("AM\tAM\t0\tae-a\nZ\tZ\t0\tbadpair\n").unwrap_err();
        match err {
            ExtractError::MalformedPair { pair, row, line } => {
                assert_eq!(pair, "badpair");
                assert_eq!(row, vec!["Z", "Z", "0", "badpair"]);
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_short_row_aborts() {
        let err = run("AM\tAM\t0\n").unwrap_err();
        assert!(matches!(err, ExtractError::ShortRow { fields: 3, line: 1, .. }));
    }

    #[test]
    fn test_blank_line_aborts() {
        let err = run("AM\tAM\t0\tae-a\n\nB\tB\t0\tb-b\n").unwrap_err();
        match err {
            ExtractError::ShortRow { row, line, fields } => {
                assert!(row.is_empty());
                assert_eq!(line, 2);
                assert_eq!(fields, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_trailing_blank_line_aborts() {
        let err = run("AM\tAM\t0\tae-a\r\n\r\n").unwrap_err();
        assert!(matches!(err, ExtractError::ShortRow { line: 2, fields: 0, .. }));
    }

    #[test]
    fn test_first_blank_line() {
        assert_eq!(first_blank_line(b""), None);
        assert_eq!(first_blank_line(b"a\tb\n"), None);
        assert_eq!(first_blank_line(b"a\r\nb\r\n"), None);
        assert_eq!(first_blank_line(b"\na\n"), Some(1));
        assert_eq!(first_blank_line(b"a\n\n"), Some(2));
        assert_eq!(first_blank_line(b"a\t\"x\n\ny\"\nb\n"), None);
        assert_eq!(first_blank_line(b"a\t\"x\n\ny\"\n\n"), Some(4));
        assert_eq!(first_blank_line(b"a\tsa\"y\n\n"), Some(2));
    }

    #[test]
    fn test_nfd_option() {
        let options = ExtractOptions {
            normalize: Normalization::Nfd,
        };
        let mapping =
            extract_from_reader("café\tcafé\t0\té-eɪ\n".as_bytes(), &options).expect("valid dictionary");
        assert_eq!(mapping["café"], vec![MappingEntry::new("e\u{0301}", "eɪ")]);
    }
}
