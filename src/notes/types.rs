use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A calendar note.
///
/// Notes span a date range (usually a single day) with a start and end
/// time of day and a color tag. The id is `None` until the note has been
/// inserted into storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default)]
    pub color: NoteColor,
}

/// Color tag for a note.
///
/// The palette mirrors the five colors the app has always offered; blue
/// is the default for notes created without an explicit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    #[default]
    Blue,
    Red,
    Green,
    Yellow,
    Purple,
}

impl NoteColor {
    /// Stable lowercase name, used for storage and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
        }
    }

    /// ARGB value of the color as rendered on screen.
    #[must_use]
    pub const fn argb(self) -> u32 {
        match self {
            Self::Blue => 0xFF1A_73E8,
            Self::Red => 0xFFDB_4437,
            Self::Green => 0xFF0F_9D58,
            Self::Yellow => 0xFFF4_B400,
            Self::Purple => 0xFF7B_1FA2,
        }
    }

    /// Terminal color used in pretty output.
    #[must_use]
    pub const fn terminal_color(self) -> colored::Color {
        match self {
            Self::Blue => colored::Color::Blue,
            Self::Red => colored::Color::Red,
            Self::Green => colored::Color::Green,
            Self::Yellow => colored::Color::Yellow,
            Self::Purple => colored::Color::Magenta,
        }
    }
}

impl std::fmt::Display for NoteColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blue" => Ok(Self::Blue),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "purple" => Ok(Self::Purple),
            other => Err(format!(
                "unknown color '{other}' (expected blue, red, green, yellow, or purple)"
            )),
        }
    }
}
