//! Persisting and listing word mappings.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::info;

use crate::error::ExtractError;
use crate::mapping::WordMapping;

/// Write `mapping` as pretty JSON to `path`, replacing any existing file.
pub fn write<P: AsRef<Path>>(mapping: &WordMapping, path: P) -> Result<(), ExtractError> {
    let path = path.as_ref();
    info!("writing {} words to {}", mapping.len(), path.display());
    let mut writer = BufWriter::new(File::create(path)?);
    write_to(mapping, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Two-space indented JSON with non-ASCII text left unescaped.
pub fn write_to<W: Write>(mapping: &WordMapping, writer: W) -> Result<(), ExtractError> {
    serde_json::to_writer_pretty(writer, mapping)?;
    Ok(())
}

/// Load a mapping previously written by [`write`].
///
/// # Arguments
/// * `path` - The JSON file to read
///
/// # Returns
/// The parsed mapping, or an `Io`/`Json` error if the file is missing or
/// is not a word-to-pairs object
pub fn read<P: AsRef<Path>>(path: P) -> Result<WordMapping, ExtractError> {
    let file = File::open(path.as_ref())?;
    read_from(BufReader::new(file))
}

/// Reader-based counterpart of [`read`].
pub fn read_from<R: Read>(reader: R) -> Result<WordMapping, ExtractError> {
    Ok(serde_json::from_reader(reader)?)
}

/// The closing line of the console listing, e.g. `Extracted 2 words`.
pub fn summary_line(count: usize) -> String {
    format!("Extracted {count} words")
}

/// Print every word on its own line in sorted order, then the word count.
pub fn write_listing<W: Write>(mapping: &WordMapping, mut out: W) -> io::Result<()> {
    for word in mapping.keys() {
        writeln!(out, "{word}")?;
    }
    writeln!(out, "{}", summary_line(mapping.len()))
}
