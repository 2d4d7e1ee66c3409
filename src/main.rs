// monthcal - month calendar from the command line
// Main entry point

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use log::{error, info};

use monthcal::clock::{Clock, FixedClock, SystemClock};
use monthcal::command_handlers::{check_file, parse_month, CommandHandlers};
use monthcal::config::load_settings;
use monthcal::models::{parse_date, EventForm};
use monthcal::utils::logging::{init_logging, log_error_with_context};
use monthcal::CalendarApp;

#[derive(Parser)]
#[command(name = "monthcal", version, about = "Month calendar with event import and collision highlighting")]
struct Cli {
    /// Treat this instant as now (YYYY-MM-DDTHH:MM, local time)
    #[arg(long, global = true)]
    now: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the month grid
    Month {
        /// Events file to import (repeatable)
        #[arg(long = "file")]
        files: Vec<PathBuf>,
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(long)]
        month: Option<String>,
    },
    /// Print the events of one day with collisions marked
    Day {
        #[arg(long)]
        date: String,
        #[arg(long = "file")]
        files: Vec<PathBuf>,
    },
    /// Validate an events file without showing it
    Check {
        #[arg(long)]
        file: PathBuf,
    },
    /// Add an event by hand and print its day
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        date: String,
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        #[arg(long)]
        color: Option<String>,
        #[arg(long = "file")]
        files: Vec<PathBuf>,
    },
    /// Show the expected import file format
    Format,
}

fn clock_from(now: Option<&str>) -> Result<Arc<dyn Clock>> {
    match now {
        Some(value) => {
            let at = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
                .with_context(|| format!("--now '{}' must be YYYY-MM-DDTHH:MM", value))?;
            Ok(Arc::new(FixedClock(at)))
        }
        None => Ok(Arc::new(SystemClock)),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let settings = load_settings().context("Failed to load settings")?;
    let clock = clock_from(cli.now.as_deref())?;
    let mut handlers = CommandHandlers::new(CalendarApp::new(settings, clock));

    match cli.command {
        Command::Month { files, month } => {
            let month = month.as_deref().map(parse_month).transpose()?;
            handlers.load_files(&files).await?;
            print!("{}", handlers.show_month(month));
        }
        Command::Day { date, files } => {
            let day = parse_date(&date).ok_or_else(|| anyhow!("Date '{}' must be YYYY-MM-DD", date))?;
            handlers.load_files(&files).await?;
            print!("{}", handlers.show_day(day));
        }
        Command::Check { file } => {
            let count = check_file(&file).await?;
            println!("{}: {} valid events", file.display(), count);
        }
        Command::Add { title, date, start, end, color, files } => {
            handlers.load_files(&files).await?;
            let default_color = handlers.app.new_form().color;
            let form = EventForm {
                title,
                date,
                start_time: start,
                end_time: end,
                color: color.unwrap_or(default_color),
            };
            print!("{}", handlers.add(form)?);
        }
        Command::Format => {
            print!("{}", handlers.format_help());
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();
    info!("Starting monthcal");

    if let Err(e) = run(cli).await {
        log_error_with_context(&e, "monthcal");
        let message = match e.downcast_ref::<monthcal::AppError>() {
            Some(app_error) if app_error.is_import_failure() => {
                format!("{} No events were imported from that file.", app_error.user_message())
            }
            Some(app_error) => app_error.user_message(),
            None => e.to_string(),
        };
        error!("{}", message);
        eprintln!("error: {}", message);
        std::process::exit(1);
    }
}
