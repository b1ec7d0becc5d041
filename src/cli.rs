//! Command-line interface.
//!
//! Reads entries and settings from the configured store file and prints
//! month summaries, single-day totals or the holiday list.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;

use crate::calculation::{day_totals, summarize_month};
use crate::calendar::{HolidayCalendar, latvian_holidays};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{YearMonth, parse_iso_date};
use crate::report::{render_html, render_text};
use crate::store::{FileStore, load_entries, load_settings};

/// Top-level arguments.
#[derive(Parser, Debug)]
#[command(name = "worklog", version, long_about = None)]
#[command(about = "Work-hour accounting with Latvian holidays")]
pub struct Cli {
    /// Configuration file. Defaults to ./worklog.yaml when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Store file, overriding the configured path.
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,
    /// The command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a month of logged hours.
    Summary {
        /// Month as YYYY-MM. Falls back to the current month.
        month: Option<String>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show the totals of a single date as JSON.
    Day {
        /// Date as YYYY-MM-DD.
        date: String,
    },
    /// List the public holidays of a year.
    Holidays {
        /// Calendar year.
        year: i32,
    },
}

/// Output format of the `summary` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text report.
    Text,
    /// Printable HTML page.
    Html,
    /// The summary as JSON.
    Json,
}

/// Parses the process arguments and runs the command, returning its output.
pub fn run() -> EngineResult<String> {
    execute(&Cli::parse())
}

/// Runs an already parsed command line, returning the text to print.
pub fn execute(cli: &Cli) -> EngineResult<String> {
    let mut loader = ConfigLoader::discover(cli.config.as_deref())?;
    if let Some(path) = &cli.store {
        loader = loader.with_store_path(path);
    }

    match &cli.command {
        Commands::Summary { month, format } => {
            let month = YearMonth::parse_or_current(month.as_deref());
            info!(month = %month, format = ?format, store = %loader.store_path().display(), "Summarizing month");

            let store = FileStore::new(loader.store_path()).snapshot();
            let entries = load_entries(&store);
            let settings = load_settings(&store);
            let summary = summarize_month(&entries, month, &settings, &HolidayCalendar::new());

            let options = loader.report_options();
            match format {
                OutputFormat::Text => Ok(render_text(&summary, &options)),
                OutputFormat::Html => Ok(render_html(&summary, &options)),
                OutputFormat::Json => to_json(&summary),
            }
        }
        Commands::Day { date } => {
            let date = parse_iso_date(date)?;
            info!(date = %date, store = %loader.store_path().display(), "Computing day totals");

            let store = FileStore::new(loader.store_path()).snapshot();
            let entries = load_entries(&store);
            let settings = load_settings(&store);
            to_json(&day_totals(&entries, date, &settings, &HolidayCalendar::new()))
        }
        Commands::Holidays { year } => {
            info!(year, "Listing holidays");
            Ok(latvian_holidays(*year)
                .iter()
                .map(|h| format!("{}  {}\n", h.date, h.name))
                .collect())
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> EngineResult<String> {
    let mut json = serde_json::to_string_pretty(value).map_err(|e| EngineError::OutputError {
        message: e.to_string(),
    })?;
    json.push('\n');
    Ok(json)
}
