//! Quick add command implementation.
//!
//! This module implements the `zametki add` command for free-text note
//! entry.

use chrono::Local;
use colored::Colorize;

use crate::cli::args::{OutputFormat, QuickAddArgs};
use crate::error::ZametkiError;
use crate::features::quicknote::parse_quick_note;
use crate::notes::Note;
use crate::output::{format_note, format_parsed};
use crate::storage::NoteStore;

use super::parse_date_arg;

/// Execute the quick add command.
///
/// The phrase is parsed for a time range and color; the note lands on
/// the given date (today by default).
///
/// # Errors
///
/// Returns an error if the date argument is invalid or the insert fails.
pub fn quick_add(
    store: &NoteStore,
    args: &QuickAddArgs,
    format: OutputFormat,
) -> Result<String, ZametkiError> {
    let date = parse_date_arg(args.date.as_deref())?;
    let parsed = parse_quick_note(&args.text, Local::now().time());

    // Preview mode: show the parse without persisting
    if args.parse_only {
        return format_parsed(&parsed, format);
    }

    let mut note = Note {
        id: None,
        title: parsed.title,
        start_date: date,
        end_date: date,
        start_time: parsed.start_time,
        end_time: parsed.end_time,
        color: parsed.color,
    };
    store.insert(&mut note)?;

    match format {
        OutputFormat::Pretty => {
            let id = note.id.unwrap_or_default();
            Ok(format!(
                "{} note #{id}\n{}",
                "Created".green(),
                format_note(&note, format)?
            ))
        }
        OutputFormat::Json => format_note(&note, format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::storage::Database;

    fn store() -> NoteStore {
        NoteStore::with_database(Database::open_in_memory().unwrap())
    }

    fn add_args(text: &str, date: Option<&str>, parse_only: bool) -> QuickAddArgs {
        QuickAddArgs {
            text: text.to_string(),
            date: date.map(String::from),
            parse_only,
        }
    }

    #[test]
    fn test_add_persists_parsed_note() {
        let store = store();
        let args = add_args("обед с 13 до 14 цвет зеленый", Some("2026-08-29"), false);

        quick_add(&store, &args, OutputFormat::Json).unwrap();

        let day = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let notes = store.for_day(day).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "обед с 13 до 14 цвет зеленый");
        assert_eq!(
            notes[0].start_time,
            chrono::NaiveTime::from_hms_opt(13, 0, 0).unwrap()
        );
        assert_eq!(notes[0].color, crate::notes::NoteColor::Green);
    }

    #[test]
    fn test_parse_only_does_not_persist() {
        let store = store();
        let args = add_args("встреча в 15", Some("2026-08-29"), true);

        let output = quick_add(&store, &args, OutputFormat::Json).unwrap();
        assert!(output.contains("15:00"));

        let day = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        assert!(store.for_day(day).unwrap().is_empty());
    }

    #[test]
    fn test_add_rejects_bad_date() {
        let store = store();
        let args = add_args("встреча в 15", Some("завтра"), false);

        assert!(matches!(
            quick_add(&store, &args, OutputFormat::Json),
            Err(ZametkiError::InvalidDate(_))
        ));
    }
}
