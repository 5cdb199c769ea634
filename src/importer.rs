use crate::snippet::RawSnippet;
use eyre::{Context, Result};
use std::fs;
use std::path::Path;

/// Marker some editors and TextExpander itself prepend to UTF-8 exports.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Read a TextExpander CSV export and return its rows in file order.
pub fn read_rows(path: &Path) -> Result<Vec<RawSnippet>> {
    let bytes =
        fs::read(path).wrap_err_with(|| format!("Failed to read CSV file: {}", path.display()))?;
    parse_rows(&bytes).wrap_err_with(|| format!("Failed to parse CSV file: {}", path.display()))
}

/// Parse CSV bytes into rows: optional BOM stripped, no header row,
/// three positional columns per record (keyword, snippet, name).
pub fn parse_rows(bytes: &[u8]) -> Result<Vec<RawSnippet>> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: RawSnippet = record.wrap_err("Malformed CSV row")?;
        rows.push(row);
    }
    Ok(rows)
}
