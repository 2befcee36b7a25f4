use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::{Datelike, NaiveDate};
use colored::Colorize;

use crate::core::{month_days_from_monday, month_name, WEEKDAY_HEADERS};
use crate::features::quicknote::ParsedQuickNote;
use crate::notes::Note;

/// Format a list of notes as a pretty table.
pub fn format_notes_pretty(notes: &[Note], title: &str) -> String {
    if notes.is_empty() {
        return format!("{} (0 items)\n  No items", title);
    }

    let mut output = format!("{} ({} items)\n", title, notes.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for note in notes {
        let marker = "■".color(note.color.terminal_color());
        let id = note
            .id
            .map_or_else(String::new, |id| format!("#{id}").dimmed().to_string());
        let span = format!(
            "{}–{}",
            note.start_time.format("%H:%M"),
            note.end_time.format("%H:%M")
        );

        let mut line = format!("{} {} {}", marker, span.yellow(), note.title.bold());
        if !id.is_empty() {
            line.push_str(&format!("  {id}"));
        }
        if note.start_date != note.end_date {
            line.push_str(&format!(
                "  {}",
                format!("{} → {}", note.start_date, note.end_date).dimmed()
            ));
        }

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a single note with all fields.
pub fn format_note_pretty(note: &Note) -> String {
    let marker = "■".color(note.color.terminal_color());

    let mut output = format!("{} {}\n", marker, note.title.bold());
    if let Some(id) = note.id {
        output.push_str(&format!("  {}: {id}\n", "ID".dimmed()));
    }
    output.push_str(&format!("  {}: {}\n", "Date".dimmed(), note.start_date));
    if note.end_date != note.start_date {
        output.push_str(&format!("  {}: {}\n", "Until".dimmed(), note.end_date));
    }
    output.push_str(&format!(
        "  {}: {} – {}\n",
        "Time".dimmed(),
        note.start_time.format("%H:%M"),
        note.end_time.format("%H:%M")
    ));
    output.push_str(&format!("  {}: {}\n", "Color".dimmed(), note.color));

    output
}

/// Format what a quick-note phrase parsed into.
pub fn format_parsed_pretty(parsed: &ParsedQuickNote) -> String {
    let marker = "■".color(parsed.color.terminal_color());

    let mut output = format!("{} {}\n", marker, parsed.title.bold());
    output.push_str(&format!(
        "  {}: {} – {}\n",
        "Time".dimmed(),
        parsed.start_time.format("%H:%M"),
        parsed.end_time.format("%H:%M")
    ));
    output.push_str(&format!("  {}: {}\n", "Color".dimmed(), parsed.color));

    output
}

/// Format a month grid with note markers, followed by the month's notes.
pub fn format_month_pretty(year: i32, month: u32, notes: &[Note]) -> String {
    let name = month_name(month).unwrap_or("?");
    let mut output = format!("{}\n", format!("{name} {year}").bold());

    for header in WEEKDAY_HEADERS {
        let _ = write!(output, "{}", format!("{header:>4}").dimmed());
    }
    output.push('\n');

    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for note in notes {
        *per_day.entry(note.start_date).or_insert(0) += 1;
    }

    for (index, date) in month_days_from_monday(year, month).iter().enumerate() {
        if date.month() == month {
            let cell = format!("{:>3}", date.day());
            if per_day.contains_key(date) {
                let _ = write!(output, "{}", cell.bold().underline());
            } else {
                let _ = write!(output, "{cell}");
            }
            output.push(if per_day.contains_key(date) { '*' } else { ' ' });
        } else {
            // Adjacent-month cells stay blank, as on the month screen
            output.push_str("    ");
        }

        if index % 7 == 6 {
            output.push('\n');
        }
    }

    output.push('\n');
    output.push_str(&format_notes_pretty(
        notes,
        &format!("Notes for {name} {year}"),
    ));

    output
}
