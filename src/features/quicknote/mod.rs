//! Quick-note parsing.
//!
//! A quick note is created from a single free-text phrase rather than
//! structured form fields, e.g.:
//! - "обед с 13 до 14 цвет зеленый"
//! - "встреча в 15"
//! - "звонок в 8 утра"

mod parser;

pub use parser::{parse_quick_note, ParsedQuickNote};
