//! phonicsmap - word to grapheme-phoneme mappings from a phonics dictionary
//!
//! The dictionary is a tab-delimited file whose first column is a word and
//! whose fourth column lists `grapheme-phoneme` pairs separated by commas.
//! [`extract`] turns it into a [`WordMapping`], [`write`] persists that as
//! JSON, and [`lookup`] selects the entries a piece of text needs.

pub mod error;
pub mod extract;
pub mod lookup;
pub mod mapping;
pub mod normalize;
pub mod output;
pub mod pairparse;

pub use error::ExtractError;
pub use extract::{extract, extract_from_reader, extract_with, ExtractOptions};
pub use mapping::{MappingEntry, WordMapping};
pub use normalize::Normalization;
pub use output::{read, write, write_listing};
