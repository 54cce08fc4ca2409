//! Selecting the mappings a piece of text needs.
//!
//! Tokens are split on single spaces and reduced to their ASCII letters. A
//! token is looked up as written first, then lowercased; a hit is reported
//! under the stripped token as it appeared in the text.

use crate::mapping::{MappingEntry, WordMapping};

pub fn strip_token(token: &str) -> String {
    token.chars().filter(char::is_ascii_alphabetic).collect()
}

/// Entries for `word`, falling back to its lowercase form.
pub fn find<'a>(mapping: &'a WordMapping, word: &str) -> Option<&'a Vec<MappingEntry>> {
    if word.is_empty() {
        return None;
    }
    mapping
        .get(word)
        .or_else(|| mapping.get(&word.to_lowercase()))
}

/// Collect the mappings for every known word in `sentences`.
///
/// # Arguments
/// * `mapping` - The full word mapping
/// * `sentences` - Free text; each is split on single spaces
///
/// # Returns
/// A mapping keyed by the stripped tokens that had an entry
pub fn relevant_mappings<S: AsRef<str>>(mapping: &WordMapping, sentences: &[S]) -> WordMapping {
    let mut relevant = WordMapping::new();
    for token in sentences.iter().flat_map(|s| s.as_ref().split(' ')) {
        let word = strip_token(token);
        if let Some(entries) = find(mapping, &word) {
            relevant.insert(word, entries.clone());
        }
    }
    relevant
}
