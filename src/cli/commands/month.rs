//! Month view command implementation.

use chrono::{Datelike, Local};

use crate::cli::args::OutputFormat;
use crate::core::{first_of_month, last_of_month, parse_month};
use crate::error::ZametkiError;
use crate::output::format_month;
use crate::storage::NoteStore;

/// Execute the month command.
///
/// # Errors
///
/// Returns `InvalidDate` for a malformed month argument, or a database
/// error if the query fails.
pub fn month(
    store: &NoteStore,
    arg: Option<&str>,
    format: OutputFormat,
) -> Result<String, ZametkiError> {
    let (year, month) = match arg {
        Some(s) => parse_month(s)
            .ok_or_else(|| ZametkiError::InvalidDate(format!("'{s}' is not a YYYY-MM month")))?,
        None => {
            let today = Local::now().date_naive();
            (today.year(), today.month())
        }
    };

    let from = first_of_month(year, month)
        .ok_or_else(|| ZametkiError::InvalidDate(format!("{year}-{month:02}")))?;
    let to = last_of_month(year, month)
        .ok_or_else(|| ZametkiError::InvalidDate(format!("{year}-{month:02}")))?;

    let notes = store.for_period(from, to)?;
    format_month(year, month, &notes, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use crate::notes::{Note, NoteColor};
    use crate::storage::Database;

    fn store() -> NoteStore {
        NoteStore::with_database(Database::open_in_memory().unwrap())
    }

    #[test]
    fn test_month_lists_only_that_month() {
        let store = store();
        for (month, title) in [(8, "август"), (9, "сентябрь")] {
            let mut note = Note {
                id: None,
                title: title.to_string(),
                start_date: NaiveDate::from_ymd_opt(2026, month, 10).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2026, month, 10).unwrap(),
                start_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
                color: NoteColor::Blue,
            };
            store.insert(&mut note).unwrap();
        }

        let output = month(&store, Some("2026-08"), OutputFormat::Json).unwrap();
        assert!(output.contains("август"));
        assert!(!output.contains("сентябрь"));
    }

    #[test]
    fn test_month_rejects_bad_argument() {
        assert!(matches!(
            month(&store(), Some("август"), OutputFormat::Json),
            Err(ZametkiError::InvalidDate(_))
        ));
    }
}
