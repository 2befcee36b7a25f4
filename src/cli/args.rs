use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "zametki")]
#[command(about = "A calendar notes CLI with Russian quick-note parsing")]
#[command(long_about = "zametki - calendar notes from free-text phrases

Notes live on a month calendar with a start/end time and a color tag.
The fastest way to create one is a quick note: a single phrase, largely
Russian, from which the time range and color are extracted.

QUICK START:
  zametki add \"обед с 13 до 14 цвет зеленый\"   Add a note for today
  zametki day                                   Show today's notes
  zametki month                                 Show the current month

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  zametki <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    /// When omitted, the configured default applies.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a quick note from a free-text phrase
    ///
    /// The phrase is parsed for a time range and a color; whatever is
    /// written becomes the note title. Parsing never fails: without a
    /// recognizable time the note starts now and lasts an hour, and the
    /// color defaults to blue.
    ///
    /// # Examples
    ///
    ///   zametki add "обед с 13 до 14 цвет зеленый"
    ///   zametki add "встреча в 15" --date 2026-09-01
    ///   zametki add "звонок в 8 утра" --parse-only
    ///
    /// # Supported Patterns
    ///
    ///   Ranges:   с 13 до 14, с 9:30 до 10:15
    ///   Times:    в 15, в 9:45, 18:40
    ///   Spoken:   в пол третьего, четверть седьмого, 20 минут 3-го
    ///   Periods:  утра, дня, вечера, ночи
    ///   Colors:   цвет красный/зеленый/желтый/фиолетовый/синий
    #[command(alias = "a")]
    Add(QuickAddArgs),

    /// List notes for a day
    ///
    /// Shows the notes whose date span falls on the given day,
    /// ordered by start time. Defaults to today.
    ///
    /// # Examples
    ///
    ///   zametki day                  Today's notes
    ///   zametki day 2026-08-29       A specific day
    ///   zametki d -o json            JSON output
    #[command(alias = "d")]
    Day {
        /// Day to show (YYYY-MM-DD), today when omitted
        date: Option<String>,
    },

    /// Show a month grid with note markers
    ///
    /// Renders the month as a Monday-first grid; days carrying notes are
    /// marked, and the month's notes are listed below. Defaults to the
    /// current month.
    ///
    /// # Examples
    ///
    ///   zametki month                Current month
    ///   zametki month 2026-09        A specific month
    #[command(alias = "m")]
    Month {
        /// Month to show (YYYY-MM), current month when omitted
        month: Option<String>,
    },

    /// List all notes
    #[command(alias = "ls")]
    List,

    /// Show a single note by id
    Show {
        /// Note id as printed in list output
        id: i64,
    },

    /// Edit fields of an existing note
    ///
    /// Only the given fields change; everything else is kept.
    ///
    /// # Examples
    ///
    ///   zametki edit 3 --title "поздний обед"
    ///   zametki edit 3 --start-time 14:30 --end-time 15:30
    ///   zametki edit 3 --color red
    Edit(EditArgs),

    /// Delete a note by id
    #[command(alias = "rm")]
    Delete {
        /// Note id as printed in list output
        id: i64,
    },
}

/// Arguments for the add command.
#[derive(Args)]
pub struct QuickAddArgs {
    /// The note phrase, e.g. "обед с 13 до 14 цвет зеленый"
    pub text: String,

    /// Date for the note (YYYY-MM-DD), today when omitted
    #[arg(long)]
    pub date: Option<String>,

    /// Only parse and show what would be created, don't actually create
    #[arg(long)]
    pub parse_only: bool,
}

/// Arguments for the edit command.
#[derive(Args)]
pub struct EditArgs {
    /// Note id as printed in list output
    pub id: i64,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New start date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,

    /// New end date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<String>,

    /// New start time (HH:MM)
    #[arg(long)]
    pub start_time: Option<String>,

    /// New end time (HH:MM)
    #[arg(long)]
    pub end_time: Option<String>,

    /// New color (blue, red, green, yellow, purple)
    #[arg(long)]
    pub color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_add_alias() {
        let cli = Cli::try_parse_from(["zametki", "a", "обед в 13"]).unwrap();
        match cli.command {
            Commands::Add(args) => assert_eq!(args.text, "обед в 13"),
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn test_global_output_flag() {
        let cli = Cli::try_parse_from(["zametki", "day", "-o", "json"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));

        let cli = Cli::try_parse_from(["zametki", "day"]).unwrap();
        assert_eq!(cli.output, None);
    }
}
