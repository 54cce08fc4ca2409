use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One grapheme and the phoneme it spells.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct MappingEntry {
    pub grapheme: String,
    pub phoneme: String,
}

impl MappingEntry {
    pub fn new(grapheme: impl Into<String>, phoneme: impl Into<String>) -> Self {
        Self {
            grapheme: grapheme.into(),
            phoneme: phoneme.into(),
        }
    }
}

/// Word (case preserved) to its grapheme-phoneme pairs, in source order.
///
/// Keys iterate in lexicographic order, which is also the order of the
/// console listing and of the persisted JSON object.
pub type WordMapping = BTreeMap<String, Vec<MappingEntry>>;
