use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use zametki::cli::commands;
use zametki::config::{ColorSetting, Config};
use zametki::error::ZametkiError;
use zametki::storage::NoteStore;
use zametki::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ZametkiError> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }

    let format = cli.output.unwrap_or(config.general.default_output);
    let store = NoteStore::new()?;

    let output = match cli.command {
        Commands::Add(args) => commands::quick_add(&store, &args, format)?,
        Commands::Day { date } => commands::day(&store, date.as_deref(), format)?,
        Commands::Month { month } => commands::month(&store, month.as_deref(), format)?,
        Commands::List => commands::list(&store, format)?,
        Commands::Show { id } => commands::show(&store, id, format)?,
        Commands::Edit(args) => commands::edit(&store, &args, format)?,
        Commands::Delete { id } => commands::delete(&store, id, format)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
