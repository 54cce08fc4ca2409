//! Splitting of the comma-separated grapheme-phoneme column.
//!
//! A pair is written `grapheme-phoneme`. Only the first `-` separates the two
//! halves; phonemes may contain further hyphens.

use nom::{
    bytes::complete::take_till,
    character::complete::char,
    combinator::rest,
    sequence::separated_pair,
    IResult,
};

use crate::mapping::MappingEntry;

/// Placeholder the dictionary uses for a missing pair.
pub const NULL_PAIR: &str = "NULL";

/// Outcome of reading a single candidate from the pair column.
#[derive(Debug, PartialEq, Eq)]
pub enum Candidate<'a> {
    /// Empty or `NULL`; contributes nothing.
    Skip,
    Pair(&'a str, &'a str),
    /// Has content but no `-`.
    Malformed(&'a str),
}

fn grapheme_phoneme(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(take_till(|c: char| c == '-'), char('-'), rest)(input)
}

/// Split `pair` on its first `-`.
pub fn split_pair(pair: &str) -> Option<(&str, &str)> {
    grapheme_phoneme(pair).ok().map(|(_, halves)| halves)
}

pub fn classify(candidate: &str) -> Candidate<'_> {
    if candidate.is_empty() || candidate == NULL_PAIR {
        return Candidate::Skip;
    }
    match split_pair(candidate) {
        Some((grapheme, phoneme)) => Candidate::Pair(grapheme, phoneme),
        None => Candidate::Malformed(candidate),
    }
}

/// Parse a whole pair column into entries, stopping at the first malformed
/// candidate, which is returned as the error.
pub fn parse_pairs(field: &str) -> Result<Vec<MappingEntry>, &str> {
    let mut entries = Vec::new();
    for candidate in field.split(',') {
        match classify(candidate) {
            Candidate::Skip => continue,
            Candidate::Pair(grapheme, phoneme) => entries.push(MappingEntry::new(grapheme, phoneme)),
            Candidate::Malformed(pair) => return Err(pair),
        }
    }
    Ok(entries)
}
