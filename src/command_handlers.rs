//! Command handlers module
//!
//! The work behind each CLI subcommand, kept out of main.rs so it can be
//! exercised from tests.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::info;

use crate::app::CalendarApp;
use crate::calendar::{import_file, Importer, MonthGrid};
use crate::error::{AppError, AppResult};
use crate::messages::Message;
use crate::models::{parse_date, EventForm};
use crate::ui::{CalendarView, FORMAT_HELP};

pub struct CommandHandlers {
    pub app: CalendarApp,
    importer: Importer,
}

impl CommandHandlers {
    pub fn new(app: CalendarApp) -> Self {
        Self {
            app,
            importer: Importer::new(),
        }
    }

    /// Import every file in order. The first failure stops the run; files
    /// imported before it stay applied, the failing one contributes nothing.
    pub async fn load_files(&mut self, files: &[PathBuf]) -> AppResult<usize> {
        let mut total = 0;
        for file in files {
            match self.importer.import(file).await {
                Ok(events) => {
                    total += events.len();
                    self.app.update(Message::from_import(Ok(events)));
                }
                Err(e) => {
                    info!("Stopping import at {}: {}", file.display(), e);
                    self.app.update(Message::ImportCompleted(Err(e.user_message())));
                    return Err(e);
                }
            }
        }
        Ok(total)
    }

    pub fn show_month(&mut self, month: Option<NaiveDate>) -> String {
        if let Some(anchor) = month {
            let grid = MonthGrid::new(anchor, self.app.settings().week_starts_on.weekday());
            while self.app.grid().month_start() < grid.month_start() {
                self.app.update(Message::NextMonth);
            }
            while self.app.grid().month_start() > grid.month_start() {
                self.app.update(Message::PrevMonth);
            }
        }
        CalendarView::new(&self.app).month()
    }

    pub fn show_day(&mut self, day: NaiveDate) -> String {
        self.app.update(Message::DaySelected(day));
        CalendarView::new(&self.app).day(day)
    }

    /// Add an event through the form path, then render its day.
    pub fn add(&mut self, form: EventForm) -> AppResult<String> {
        self.app.update(Message::OpenAddForm);
        let date = form.date.clone();
        self.app.add_event(form)?;
        let day = parse_date(&date)
            .ok_or_else(|| AppError::invalid_input(format!("Date '{}' must be YYYY-MM-DD", date)))?;
        Ok(self.show_day(day))
    }

    pub fn format_help(&mut self) -> &'static str {
        self.app.update(Message::ShowFormatHelp);
        FORMAT_HELP
    }
}

/// Validate a single file without touching any application state.
pub async fn check_file(path: &Path) -> AppResult<usize> {
    let mut importer = Importer::new();
    let token = importer.begin();
    let events = import_file(path, token).await?;
    Ok(events.len())
}

/// Parse a `YYYY-MM` month argument into its first day.
pub fn parse_month(value: &str) -> AppResult<NaiveDate> {
    parse_date(&format!("{}-01", value.trim()))
        .ok_or_else(|| AppError::invalid_input(format!("Month '{}' must be YYYY-MM", value)))
}
