//! Unicode normalization of extracted graphemes and phonemes.
//!
//! The dictionary mixes precomposed and decomposed IPA symbols. By default
//! text is passed through untouched; `Normalization::Nfd` decomposes it so
//! that equal symbols compare equal downstream.

use unicode_normalization::UnicodeNormalization;

use crate::mapping::MappingEntry;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Normalization {
    #[default]
    None,
    Nfd,
}

/// Normalize text using NFD (Normalized Form Decomposition)
///
/// # Arguments
/// * `text` - The grapheme or phoneme to normalize
///
/// # Returns
/// The NFD-normalized text as a String
pub fn nfd_normalize(text: &str) -> String {
    text.nfd().collect()
}

impl Normalization {
    /// Normalize both halves of `entry`; `None` returns it unchanged.
    pub fn apply_entry(self, entry: MappingEntry) -> MappingEntry {
        match self {
            Normalization::None => entry,
            Normalization::Nfd => MappingEntry {
                grapheme: nfd_normalize(&entry.grapheme),
                phoneme: nfd_normalize(&entry.phoneme),
            },
        }
    }
}
