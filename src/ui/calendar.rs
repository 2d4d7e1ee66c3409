// src/ui/calendar.rs

use chrono::NaiveDate;
use std::fmt::Write;

use crate::app::CalendarApp;
use crate::calendar::{DayCell, EventTone};
use crate::ui::truncate;

const CELL_WIDTH: usize = 14;

/// Renders the application state as plain text.
pub struct CalendarView<'a> {
    app: &'a CalendarApp,
}

impl<'a> CalendarView<'a> {
    pub fn new(app: &'a CalendarApp) -> Self {
        Self { app }
    }

    /// Month header, weekday row and one block per week.
    pub fn month(&self) -> String {
        let grid = self.app.grid();
        let preview_limit = self.app.settings().preview_limit;
        let mut out = String::new();

        let _ = writeln!(out, "{}", grid.label());
        let headers: Vec<String> = grid
            .weekday_headers()
            .iter()
            .map(|h| format!("{:<width$}", h, width = CELL_WIDTH))
            .collect();
        let _ = writeln!(out, "{}", headers.join("").trim_end());

        for week in self.app.month_cells() {
            let _ = writeln!(out, "{}", "-".repeat(CELL_WIDTH * 7));
            let day_line: Vec<String> = week.iter().map(day_number).collect();
            let _ = writeln!(out, "{}", day_line.join("").trim_end());

            for slot in 0..=preview_limit {
                let line: Vec<String> = week.iter().map(|cell| cell_slot(cell, slot)).collect();
                let line = line.join("");
                if !line.trim().is_empty() {
                    let _ = writeln!(out, "{}", line.trim_end());
                }
            }
        }
        out
    }

    /// Listing of one day's events with time, conflicts, past state and colors.
    pub fn day(&self, date: NaiveDate) -> String {
        let events = self.app.day_events(date);
        let mut out = String::new();
        let _ = writeln!(out, "Events on {}", date.format("%b %d, %Y"));

        if events.is_empty() {
            let _ = writeln!(out, "No events for this day.");
            return out;
        }

        for day_event in &events {
            let event = day_event.event;
            let title = if event.title.is_empty() { "(untitled)" } else { event.title.as_str() };
            let _ = write!(out, "  {}  {}", event.time_label(), title);
            if day_event.is_past {
                let _ = write!(out, "  [past]");
            }
            match &day_event.tone {
                EventTone::Shaded(shades) => {
                    let _ = write!(out, "  bg {} border {}", shades.light, shades.border);
                }
                EventTone::Conflict(shades) => {
                    let _ = write!(out, "  bg {} border {} [conflict]", shades.light, shades.border);
                }
                EventTone::Plain => {}
            }
            let _ = writeln!(out);

            for &other in &day_event.conflicts {
                let other = events[other].event;
                let _ = writeln!(out, "      overlaps {} ({})", other.title, other.time_label());
            }
        }
        out
    }
}

fn day_number(cell: &DayCell<'_>) -> String {
    let label = match (cell.is_today, cell.is_current_month) {
        (true, _) => format!("[{}]", cell.date.format("%d")),
        (false, true) => cell.date.format("%d").to_string(),
        (false, false) => format!("({})", cell.date.format("%d")),
    };
    format!("{:<width$}", label, width = CELL_WIDTH)
}

fn cell_slot(cell: &DayCell<'_>, slot: usize) -> String {
    let text = match cell.preview.get(slot) {
        Some(event) => truncate(&event.title, CELL_WIDTH - 2),
        None if slot == cell.preview.len() && cell.remaining > 0 => {
            format!("+ {} more", cell.remaining)
        }
        None => String::new(),
    };
    format!("{:<width$}", text, width = CELL_WIDTH)
}
