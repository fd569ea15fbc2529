//! Sales feed reader with encoding fallback
//!
//! Reads the raw transaction feed into memory as decoded text lines.
//! Feeds occasionally arrive with legacy single-byte encodings, so the
//! reader decodes UTF-8 first and falls back to Latin-1, which accepts
//! any byte sequence.
//!
//! # Line cleaning
//!
//! The reader owns two of the caller-side contracts the parser relies on:
//! blank lines are removed, and the first surviving line is dropped as
//! the column header. The parser itself never sees a header row.

use crate::types::AnalyticsError;
use std::fs;
use std::path::Path;

/// Read the sales feed and return its data lines
///
/// Lines are trimmed, blank lines are discarded, and the header line is
/// skipped. The returned lines are ready for
/// [`parse_transactions`](crate::io::parse_transactions).
///
/// # Errors
///
/// * [`AnalyticsError::FileNotFound`] if `path` does not exist
/// * [`AnalyticsError::Io`] for any other read failure
pub fn read_sales_lines(path: &Path) -> Result<Vec<String>, AnalyticsError> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AnalyticsError::file_not_found(path.display().to_string()),
        _ => AnalyticsError::from(e),
    })?;

    let text = decode_with_fallback(bytes);

    let mut lines: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    // First surviving line is the column header.
    if !lines.is_empty() {
        lines.remove(0);
    }

    Ok(lines)
}

/// Decode feed bytes as UTF-8, falling back to Latin-1
///
/// Latin-1 maps every byte to the code point of the same value, so the
/// fallback is total and decoding never fails.
fn decode_with_fallback(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err
            .into_bytes()
            .into_iter()
            .map(|b| b as char)
            .collect(),
    }
}
