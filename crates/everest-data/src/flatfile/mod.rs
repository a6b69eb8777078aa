//! Line-oriented record streams.
//!
//! Every file uses the same shape: one record per line, fields joined by
//! `::` with a trailing separator, blank lines skipped. Missing files are
//! treated as empty collections so a first run starts clean.

pub mod booking_store;
pub mod customer_store;
pub mod flight_store;

use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::DataError;

/// Read a record file into (1-based line number, line) pairs, skipping
/// blank lines. A missing file yields no records.
pub(crate) fn read_lines(path: &Path) -> Result<Vec<(usize, String)>, DataError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim().to_string()))
        .filter(|(_, line)| !line.is_empty())
        .collect())
}

/// A field that is absent or empty (trailing separators produce empty
/// trailing fields) counts as missing.
pub(crate) fn field<'a>(fields: &[&'a str], idx: usize) -> Option<&'a str> {
    fields.get(idx).copied().filter(|s| !s.is_empty())
}

pub(crate) fn required<'a>(
    fields: &[&'a str],
    idx: usize,
    path: &Path,
    line: usize,
    name: &str,
) -> Result<&'a str, DataError> {
    field(fields, idx).ok_or_else(|| DataError::Format {
        file: path.display().to_string(),
        line,
        message: format!("missing field '{name}'"),
    })
}

pub(crate) fn parse_field<T>(
    raw: &str,
    path: &Path,
    line: usize,
    name: &str,
) -> Result<T, DataError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse().map_err(|e| DataError::Format {
        file: path.display().to_string(),
        line,
        message: format!("invalid {name} '{raw}': {e}"),
    })
}
