//! Core abstractions for zametki.
//!
//! Month arithmetic shared by the calendar views.

mod calendar;

pub use calendar::{
    first_of_month, last_of_month, month_days_from_monday, month_name, next_month, parse_month,
    prev_month, WEEKDAY_HEADERS,
};
