//! Command implementations for zametki.

mod add;
mod edit;
mod month;

pub use add::quick_add;
pub use edit::edit;
pub use month::month;

use chrono::{Local, NaiveDate, NaiveTime};
use colored::Colorize;
use serde_json::json;

use crate::cli::args::OutputFormat;
use crate::error::ZametkiError;
use crate::output::{format_note, format_notes};
use crate::storage::NoteStore;

/// Execute the day command.
///
/// # Errors
///
/// Returns an error if the date is invalid or the query fails.
pub fn day(
    store: &NoteStore,
    date: Option<&str>,
    format: OutputFormat,
) -> Result<String, ZametkiError> {
    let date = parse_date_arg(date)?;
    let notes = store.for_day(date)?;
    format_notes(&notes, &date.to_string(), format)
}

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if the query or output formatting fails.
pub fn list(store: &NoteStore, format: OutputFormat) -> Result<String, ZametkiError> {
    let notes = store.all()?;
    format_notes(&notes, "All notes", format)
}

/// Execute the show command.
///
/// # Errors
///
/// Returns `NotFound` if no note has the given id.
pub fn show(store: &NoteStore, id: i64, format: OutputFormat) -> Result<String, ZametkiError> {
    let note = store.get(id)?.ok_or(ZametkiError::NotFound(id))?;
    format_note(&note, format)
}

/// Execute the delete command.
///
/// # Errors
///
/// Returns `NotFound` if no note has the given id.
pub fn delete(store: &NoteStore, id: i64, format: OutputFormat) -> Result<String, ZametkiError> {
    store.delete(id)?;

    match format {
        OutputFormat::Pretty => Ok(format!("{} note #{id}", "Deleted".green())),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({ "deleted": id }))?),
    }
}

/// Parse a YYYY-MM-DD date argument, defaulting to today.
pub(crate) fn parse_date_arg(input: Option<&str>) -> Result<NaiveDate, ZametkiError> {
    input.map_or_else(
        || Ok(Local::now().date_naive()),
        |s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| ZametkiError::InvalidDate(format!("'{s}' is not a YYYY-MM-DD date")))
        },
    )
}

/// Parse an HH:MM time argument.
pub(crate) fn parse_time_arg(input: &str) -> Result<NaiveTime, ZametkiError> {
    NaiveTime::parse_from_str(input, "%H:%M")
        .map_err(|_| ZametkiError::InvalidDate(format!("'{input}' is not an HH:MM time")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::{Note, NoteColor};
    use crate::storage::Database;

    fn store() -> NoteStore {
        NoteStore::with_database(Database::open_in_memory().unwrap())
    }

    fn insert_note(store: &NoteStore, title: &str) -> i64 {
        let mut note = Note {
            id: None,
            title: title.to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 8, 29).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 8, 29).unwrap(),
            start_time: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            color: NoteColor::Blue,
        };
        store.insert(&mut note).unwrap();
        note.id.unwrap()
    }

    #[test]
    fn test_parse_date_arg() {
        assert_eq!(
            parse_date_arg(Some("2026-08-29")).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
        );
        assert!(parse_date_arg(Some("29.08.2026")).is_err());
        assert_eq!(parse_date_arg(None).unwrap(), Local::now().date_naive());
    }

    #[test]
    fn test_parse_time_arg() {
        assert_eq!(
            parse_time_arg("14:30").unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap()
        );
        assert!(parse_time_arg("половина третьего").is_err());
    }

    #[test]
    fn test_day_lists_notes() {
        let store = store();
        insert_note(&store, "обед");

        let output = day(&store, Some("2026-08-29"), OutputFormat::Json).unwrap();
        assert!(output.contains("обед"));

        let output = day(&store, Some("2026-08-30"), OutputFormat::Json).unwrap();
        assert!(output.contains("\"count\": 0"));
    }

    #[test]
    fn test_show_missing_note() {
        assert!(matches!(
            show(&store(), 99, OutputFormat::Json),
            Err(ZametkiError::NotFound(99))
        ));
    }

    #[test]
    fn test_delete_roundtrip() {
        let store = store();
        let id = insert_note(&store, "обед");

        delete(&store, id, OutputFormat::Json).unwrap();
        assert!(matches!(
            show(&store, id, OutputFormat::Json),
            Err(ZametkiError::NotFound(_))
        ));
    }
}
