//! Edit command implementation.

use crate::cli::args::{EditArgs, OutputFormat};
use crate::error::ZametkiError;
use crate::output::format_note;
use crate::storage::NoteStore;

use super::{parse_date_arg, parse_time_arg};

/// Execute the edit command.
///
/// Loads the note, applies the given field overrides, and stores it
/// back. Fields not given on the command line are left untouched.
///
/// # Errors
///
/// Returns `NotFound` if no note has the given id, or `InvalidDate` for
/// malformed date/time/color arguments.
pub fn edit(
    store: &NoteStore,
    args: &EditArgs,
    format: OutputFormat,
) -> Result<String, ZametkiError> {
    let mut note = store.get(args.id)?.ok_or(ZametkiError::NotFound(args.id))?;

    if let Some(title) = &args.title {
        note.title.clone_from(title);
    }
    if let Some(date) = &args.start_date {
        note.start_date = parse_date_arg(Some(date))?;
    }
    if let Some(date) = &args.end_date {
        note.end_date = parse_date_arg(Some(date))?;
    }
    if let Some(time) = &args.start_time {
        note.start_time = parse_time_arg(time)?;
    }
    if let Some(time) = &args.end_time {
        note.end_time = parse_time_arg(time)?;
    }
    if let Some(color) = &args.color {
        note.color = color.parse().map_err(ZametkiError::InvalidDate)?;
    }

    store.update(&note)?;
    format_note(&note, format)
}
