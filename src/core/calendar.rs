//! Month grid arithmetic.
//!
//! The calendar renders months as a fixed 6x7 grid starting from Monday,
//! so a month view always covers 42 consecutive days beginning with the
//! Monday of the week containing the 1st.

use chrono::{Datelike, Duration, NaiveDate};

/// Short weekday names, Monday first.
pub const WEEKDAY_HEADERS: [&str; 7] = ["пн", "вт", "ср", "чт", "пт", "сб", "вс"];

/// Russian month names, indexed by month number minus one.
const MONTH_NAMES: [&str; 12] = [
    "январь",
    "февраль",
    "март",
    "апрель",
    "май",
    "июнь",
    "июль",
    "август",
    "сентябрь",
    "октябрь",
    "ноябрь",
    "декабрь",
];

/// First day of the given month, `None` for an invalid month number.
#[must_use]
pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Last day of the given month.
#[must_use]
pub fn last_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next) = next_month(year, month);
    Some(first_of_month(next_year, next)? - Duration::days(1))
}

/// The 42 dates of the month grid, starting from the Monday of the week
/// containing the 1st. Dates from the adjacent months fill the first and
/// last rows.
#[must_use]
pub fn month_days_from_monday(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = first_of_month(year, month) else {
        return Vec::new();
    };
    let offset = i64::from(first.weekday().num_days_from_monday());
    let first_monday = first - Duration::days(offset);

    (0..42)
        .map(|day| first_monday + Duration::days(day))
        .collect()
}

/// Year and month preceding the given one.
#[must_use]
pub const fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Year and month following the given one.
#[must_use]
pub const fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Russian name of the given month, `None` for an invalid month number.
#[must_use]
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

/// Parse a `YYYY-MM` month argument.
#[must_use]
pub fn parse_month(input: &str) -> Option<(i32, u32)> {
    let (year, month) = input.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    if (1..=12).contains(&month) {
        Some((year, month))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_grid_is_42_cells() {
        assert_eq!(month_days_from_monday(2026, 8).len(), 42);
    }

    #[test]
    fn test_grid_starts_on_monday_of_first_week() {
        // August 2026 starts on a Saturday; the grid starts on the
        // preceding Monday, July 27.
        let days = month_days_from_monday(2026, 8);
        assert_eq!(days[0], d(2026, 7, 27));
        assert_eq!(days[5], d(2026, 8, 1));
    }

    #[test]
    fn test_grid_month_starting_on_monday_has_no_leading_fill() {
        // June 2026 starts on a Monday.
        let days = month_days_from_monday(2026, 6);
        assert_eq!(days[0], d(2026, 6, 1));
    }

    #[test]
    fn test_grid_invalid_month_is_empty() {
        assert!(month_days_from_monday(2026, 13).is_empty());
    }

    #[test]
    fn test_last_of_month() {
        assert_eq!(last_of_month(2026, 8), Some(d(2026, 8, 31)));
        assert_eq!(last_of_month(2026, 2), Some(d(2026, 2, 28)));
        assert_eq!(last_of_month(2024, 2), Some(d(2024, 2, 29)));
        assert_eq!(last_of_month(2026, 12), Some(d(2026, 12, 31)));
    }

    #[test]
    fn test_month_neighbors() {
        assert_eq!(prev_month(2026, 1), (2025, 12));
        assert_eq!(prev_month(2026, 8), (2026, 7));
        assert_eq!(next_month(2026, 12), (2027, 1));
        assert_eq!(next_month(2026, 8), (2026, 9));
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), Some("январь"));
        assert_eq!(month_name(12), Some("декабрь"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2026-08"), Some((2026, 8)));
        assert_eq!(parse_month("2026-8"), Some((2026, 8)));
        assert_eq!(parse_month("2026-13"), None);
        assert_eq!(parse_month("август"), None);
    }
}
