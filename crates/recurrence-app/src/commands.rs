use std::io::{Read, Write};
use std::path::Path;

use chrono::NaiveDate;
use recurrence_manifest::describe::describe_stored;
use recurrence_manifest::expand::expand;
use recurrence_manifest::stored::StoredManifest;

use crate::error::AppResult;

/// ## Summary
/// Reads the manifest document from `file`, or from `stdin` when absent.
///
/// ## Errors
/// Returns an error if reading fails.
pub fn read_input(file: Option<&Path>, stdin: impl Read) -> AppResult<String> {
    Ok(match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => std::io::read_to_string(stdin)?,
    })
}

/// ## Summary
/// Writes one description per stored manifest in `input`.
///
/// Returns the number of manifests described.
///
/// ## Errors
/// Returns an error if the document does not parse, a record cannot be
/// decoded, or writing fails.
pub fn describe_input(input: &str, locale_code: &str, out: &mut impl Write) -> AppResult<usize> {
    let records = StoredManifest::from_json(input)?;
    for record in &records {
        writeln!(out, "{}", describe_stored(record, locale_code)?)?;
    }
    tracing::debug!(count = records.len(), locale = locale_code, "Described manifests");
    Ok(records.len())
}

/// ## Summary
/// Writes the occurrence dates of each stored manifest in `input`, one ISO
/// date per line, with a blank line between manifests.
///
/// Returns the total number of dates written.
///
/// ## Errors
/// Returns an error if a record cannot be decoded, fails validation, cannot
/// be expanded, or writing fails.
pub fn expand_input(
    input: &str,
    series_start: NaiveDate,
    tz: chrono_tz::Tz,
    limit: u16,
    out: &mut impl Write,
) -> AppResult<usize> {
    let records = StoredManifest::from_json(input)?;
    let mut total = 0;
    for (index, record) in records.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        let manifest = record.to_manifest()?;
        let dates = expand(&manifest, series_start, tz, limit)?;
        for date in &dates {
            writeln!(out, "{date}")?;
        }
        total += dates.len();
    }
    Ok(total)
}
