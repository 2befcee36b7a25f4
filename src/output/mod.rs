//! Output formatting for zametki.
//!
//! Formatters for notes, parse previews, and the month grid, in pretty
//! (colored) and JSON form.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::ZametkiError;
use crate::features::quicknote::ParsedQuickNote;
use crate::notes::Note;

pub use json::*;
pub use pretty::*;

/// Format a list of notes based on output format.
///
/// # Errors
///
/// Returns `ZametkiError::Parse` if JSON serialization fails.
pub fn format_notes(
    notes: &[Note],
    title: &str,
    format: OutputFormat,
) -> Result<String, ZametkiError> {
    match format {
        OutputFormat::Pretty => Ok(format_notes_pretty(notes, title)),
        OutputFormat::Json => format_notes_json(notes, title),
    }
}

/// Format a single note based on output format.
///
/// # Errors
///
/// Returns `ZametkiError::Parse` if JSON serialization fails.
pub fn format_note(note: &Note, format: OutputFormat) -> Result<String, ZametkiError> {
    match format {
        OutputFormat::Pretty => Ok(format_note_pretty(note)),
        OutputFormat::Json => format_note_json(note),
    }
}

/// Format a quick-note parse preview based on output format.
///
/// # Errors
///
/// Returns `ZametkiError::Parse` if JSON serialization fails.
pub fn format_parsed(
    parsed: &ParsedQuickNote,
    format: OutputFormat,
) -> Result<String, ZametkiError> {
    match format {
        OutputFormat::Pretty => Ok(format_parsed_pretty(parsed)),
        OutputFormat::Json => format_parsed_json(parsed),
    }
}

/// Format a month view based on output format.
///
/// # Errors
///
/// Returns `ZametkiError::Parse` if JSON serialization fails.
pub fn format_month(
    year: i32,
    month: u32,
    notes: &[Note],
    format: OutputFormat,
) -> Result<String, ZametkiError> {
    match format {
        OutputFormat::Pretty => Ok(format_month_pretty(year, month, notes)),
        OutputFormat::Json => format_month_json(year, month, notes),
    }
}
