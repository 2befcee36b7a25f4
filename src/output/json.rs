//! JSON output formatting for zametki.

use serde_json::json;

use crate::error::ZametkiError;
use crate::features::quicknote::ParsedQuickNote;
use crate::notes::Note;

/// Format notes as JSON.
///
/// # Errors
///
/// Returns `ZametkiError::Parse` if JSON serialization fails.
pub fn format_notes_json(notes: &[Note], list_name: &str) -> Result<String, ZametkiError> {
    let output = json!({
        "list": list_name,
        "count": notes.len(),
        "items": notes
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single note as JSON.
///
/// # Errors
///
/// Returns `ZametkiError::Parse` if JSON serialization fails.
pub fn format_note_json(note: &Note) -> Result<String, ZametkiError> {
    Ok(serde_json::to_string_pretty(note)?)
}

/// Format a quick-note parse preview as JSON.
///
/// # Errors
///
/// Returns `ZametkiError::Parse` if JSON serialization fails.
pub fn format_parsed_json(parsed: &ParsedQuickNote) -> Result<String, ZametkiError> {
    let output = json!({
        "title": parsed.title,
        "startTime": parsed.start_time.format("%H:%M").to_string(),
        "endTime": parsed.end_time.format("%H:%M").to_string(),
        "color": parsed.color.as_str(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a month view as JSON.
///
/// # Errors
///
/// Returns `ZametkiError::Parse` if JSON serialization fails.
pub fn format_month_json(year: i32, month: u32, notes: &[Note]) -> Result<String, ZametkiError> {
    let output = json!({
        "year": year,
        "month": month,
        "count": notes.len(),
        "items": notes
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
