//! Natural language quick-note parser.
//!
//! Parses Russian phrases like "обед с 13 до 14 цвет зеленый" into a
//! structured note: title, start time, end time, color tag.
//!
//! Time extraction is a first-match-wins scan over an ordered rule table,
//! most specific patterns first. Every branch has a deterministic
//! fallback, so parsing never fails: with no recognizable time expression
//! the note starts at the caller-supplied "now".

use chrono::{Duration, NaiveTime};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::notes::NoteColor;

/// Result of parsing a quick-note phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuickNote {
    /// The original input text, unmodified. Time and color phrases stay
    /// embedded in the title.
    pub title: String,
    /// Start of the note.
    pub start_time: NaiveTime,
    /// End of the note. One hour after the start unless an explicit
    /// range was given, in which case both ends are taken literally
    /// (a reversed range is kept as written).
    pub end_time: NaiveTime,
    /// Color tag, blue when no color keyword was recognized.
    pub color: NoteColor,
}

/// A time-extraction rule: matched pattern plus an extractor over its
/// captures. An extractor returning `None` (out-of-range hour, ordinal
/// word that is not an hour) rejects the match and the scan moves on to
/// the next occurrence, then the next rule.
type Extractor = fn(&Captures<'_>, &str) -> Option<(NaiveTime, NaiveTime)>;

fn rule(pattern: &str, extract: Extractor) -> (Regex, Extractor) {
    let re = Regex::new(pattern).unwrap_or_else(|e| panic!("Invalid time regex: {e}"));
    (re, extract)
}

// Rules are ordered most specific first so that, e.g., "с 13:00 до 14:30"
// is not mis-captured by the bare "в H" rule. Hour positions in the
// idiomatic rules accept ordinal words ("третьего") as well as digits,
// which is what speech-to-text produces.
static TIME_RULES: Lazy<Vec<(Regex, Extractor)>> = Lazy::new(|| {
    vec![
        // "с 9:30 до 10:15" - explicit range with minutes
        rule(
            r"с (\d{1,2})[:.\-](\d{2}) до (\d{1,2})[:.\-](\d{2})",
            extract_range_exact,
        ),
        // "с 13 до 14" - whole-hour range
        rule(r"с (\d{1,2}) до (\d{1,2})", extract_range_hours),
        // "20 минут 3-го" - minutes past the previous hour (2:20)
        rule(r"(\d{1,2}) минут (\d{1,2}|[а-я]+)", extract_minutes_past),
        // "в 9:45" - exact time with preposition
        rule(r"в (\d{1,2})[:.\-](\d{2})", extract_at_exact),
        // "в 8", "в 8 утра" - bare hour, period word optional
        rule(
            r"в (\d{1,2})(?::(\d{2}))?(?: (?:вечера|утра|дня|ночи))?",
            extract_at_hour,
        ),
        // "через пол 3", "после четверти 10" - half/quarter to the hour
        rule(
            r"(?:через|после) (половину|пол|четверть) (\d{1,2}|[а-я]+)",
            extract_relative_part,
        ),
        // "пол третьего" - half past the previous hour (2:30)
        rule(
            r"\b(?:половину|половина|пол)\s?(\d{1,2}|[а-я]+)",
            extract_half_past,
        ),
        // "четверть седьмого" - quarter past the previous hour (6:15)
        rule(
            r"(?:четверть|15 минут) (\d{1,2}|[а-я]+)",
            extract_quarter_past,
        ),
        // "18:40" anywhere in the text
        rule(r"(\d{1,2})[:.\-](\d{2})", extract_bare_time),
    ]
});

static COLOR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"цвет ([а-яa-z]+)").unwrap_or_else(|e| panic!("Invalid color regex: {e}"))
});

// Period-of-day keyword sets for the 12-hour disambiguation heuristic.
// "веч" covers "вечера", "вечером", and the clipped spoken form.
const MORNING_WORDS: [&str; 2] = ["утра", "утром"];
const DAYTIME_WORDS: [&str; 4] = ["дня", "днем", "после полудня", "веч"];
const NIGHT_WORDS: [&str; 2] = ["ночи", "ночью"];

/// Parse a quick-note phrase.
///
/// Never fails: inputs without a recognizable time expression fall back
/// to `now`..`now + 1h`, and the color defaults to blue.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use zametki::features::quicknote::parse_quick_note;
/// use zametki::notes::NoteColor;
///
/// let now = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
/// let parsed = parse_quick_note("обед с 13 до 14 цвет зеленый", now);
/// assert_eq!(parsed.start_time, NaiveTime::from_hms_opt(13, 0, 0).unwrap());
/// assert_eq!(parsed.end_time, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
/// assert_eq!(parsed.color, NoteColor::Green);
/// ```
#[must_use]
pub fn parse_quick_note(text: &str, now: NaiveTime) -> ParsedQuickNote {
    let normalized = normalize(text);

    let (start_time, end_time) =
        extract_times(&normalized).unwrap_or_else(|| (now, plus_hour(now)));

    let color = COLOR_PATTERN
        .captures(&normalized)
        .and_then(|caps| caps.get(1))
        .map_or(NoteColor::Blue, |m| color_keyword(m.as_str()));

    ParsedQuickNote {
        title: text.to_string(),
        start_time,
        end_time,
        color,
    }
}

/// Run the rule table in priority order. Only one time-setting rule
/// fires per input.
fn extract_times(text: &str) -> Option<(NaiveTime, NaiveTime)> {
    for (pattern, extract) in TIME_RULES.iter() {
        for caps in pattern.captures_iter(text) {
            if let Some(found) = extract(&caps, text) {
                return Some(found);
            }
        }
    }
    None
}

/// Lowercase the input and fold "ё" to "е" so keyword sets and ordinal
/// tables need only one spelling.
fn normalize(text: &str) -> String {
    text.to_lowercase().replace('ё', "е")
}

fn color_keyword(word: &str) -> NoteColor {
    match word {
        "красный" => NoteColor::Red,
        "зеленый" => NoteColor::Green,
        "желтый" => NoteColor::Yellow,
        "фиолетовый" => NoteColor::Purple,
        // "синий" and anything unrecognized
        _ => NoteColor::Blue,
    }
}

/// Reinterpret a 1-12 register hour as a 24-hour register hour based on
/// period-of-day keywords anywhere in the text. Without a period word,
/// small hours lean toward the afternoon: "в пол третьего" means 14:30.
fn resolve_hour(hour: u32, text: &str) -> u32 {
    if MORNING_WORDS.iter().any(|w| text.contains(w)) {
        hour
    } else if DAYTIME_WORDS.iter().any(|w| text.contains(w)) {
        if hour < 12 {
            hour + 12
        } else {
            hour
        }
    } else if NIGHT_WORDS.iter().any(|w| text.contains(w)) {
        if hour == 12 {
            0
        } else if hour < 7 {
            hour
        } else {
            hour + 12
        }
    } else if hour <= 5 {
        hour + 12
    } else {
        hour
    }
}

fn time_of(hour: u32, minute: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn plus_hour(time: NaiveTime) -> NaiveTime {
    time + Duration::hours(1)
}

fn num(caps: &Captures<'_>, index: usize) -> Option<u32> {
    caps.get(index)?.as_str().parse().ok()
}

/// An hour position in the idiomatic rules: digits ("3", possibly with a
/// "-го" tail consumed by the pattern) or a genitive ordinal word.
fn hour_token(token: &str) -> Option<u32> {
    if let Ok(n) = token.parse::<u32>() {
        return Some(n);
    }
    match token.trim_end_matches("-го") {
        "первого" => Some(1),
        "второго" => Some(2),
        "третьего" => Some(3),
        "четвертого" => Some(4),
        "пятого" => Some(5),
        "шестого" => Some(6),
        "седьмого" => Some(7),
        "восьмого" => Some(8),
        "девятого" => Some(9),
        "десятого" => Some(10),
        "одиннадцатого" => Some(11),
        "двенадцатого" => Some(12),
        _ => None,
    }
}

/// An hour token with its "-го"/"ого" tail stripped, e.g. "3-го" or
/// "третьего", shifted back one hour: "20 минут 3-го" is 2:20.
fn previous_hour(token: &str) -> Option<u32> {
    let cleaned = token.trim_end_matches("-го");
    hour_token(cleaned).filter(|&h| h >= 1).map(|h| h - 1)
}

fn extract_range_exact(caps: &Captures<'_>, _text: &str) -> Option<(NaiveTime, NaiveTime)> {
    let start = time_of(num(caps, 1)?, num(caps, 2)?)?;
    let end = time_of(num(caps, 3)?, num(caps, 4)?)?;
    Some((start, end))
}

fn extract_range_hours(caps: &Captures<'_>, _text: &str) -> Option<(NaiveTime, NaiveTime)> {
    let start = time_of(num(caps, 1)?, 0)?;
    let end = time_of(num(caps, 2)?, 0)?;
    Some((start, end))
}

fn extract_minutes_past(caps: &Captures<'_>, text: &str) -> Option<(NaiveTime, NaiveTime)> {
    let minute = num(caps, 1)?;
    let hour = previous_hour(caps.get(2)?.as_str())?;
    let start = time_of(resolve_hour(hour, text), minute)?;
    Some((start, plus_hour(start)))
}

fn extract_at_exact(caps: &Captures<'_>, _text: &str) -> Option<(NaiveTime, NaiveTime)> {
    let start = time_of(num(caps, 1)?, num(caps, 2)?)?;
    Some((start, plus_hour(start)))
}

fn extract_at_hour(caps: &Captures<'_>, text: &str) -> Option<(NaiveTime, NaiveTime)> {
    let hour = num(caps, 1)?;
    let minute = caps.get(2).map_or(Some(0), |m| m.as_str().parse().ok())?;
    let start = time_of(resolve_hour(hour, text), minute)?;
    Some((start, plus_hour(start)))
}

fn extract_relative_part(caps: &Captures<'_>, text: &str) -> Option<(NaiveTime, NaiveTime)> {
    let minute = if caps.get(1)?.as_str() == "четверть" {
        15
    } else {
        30
    };
    let hour = previous_hour(caps.get(2)?.as_str())?;
    let start = time_of(resolve_hour(hour, text), minute)?;
    Some((start, plus_hour(start)))
}

fn extract_half_past(caps: &Captures<'_>, text: &str) -> Option<(NaiveTime, NaiveTime)> {
    let hour = previous_hour(caps.get(1)?.as_str())?;
    let start = time_of(resolve_hour(hour, text), 30)?;
    Some((start, plus_hour(start)))
}

fn extract_quarter_past(caps: &Captures<'_>, text: &str) -> Option<(NaiveTime, NaiveTime)> {
    let hour = previous_hour(caps.get(1)?.as_str())?;
    let start = time_of(resolve_hour(hour, text), 15)?;
    Some((start, plus_hour(start)))
}

fn extract_bare_time(caps: &Captures<'_>, _text: &str) -> Option<(NaiveTime, NaiveTime)> {
    let start = time_of(num(caps, 1)?, num(caps, 2)?)?;
    Some((start, plus_hour(start)))
}
