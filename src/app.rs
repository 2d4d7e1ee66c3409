//! Calendar application state and its message-driven update loop.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use log::{info, warn};

use crate::calendar::{annotate_day, DayCell, DayEvent, MonthGrid};
use crate::clock::Clock;
use crate::error::AppResult;
use crate::messages::Message;
use crate::models::{EventForm, EventRecord, EventStore, Settings};
use crate::ui_state::UiState;
use crate::utils::logging::log_manual_add;

/// Owns the event list; everything else gets read-only, day-filtered views.
pub struct CalendarApp {
    store: EventStore,
    settings: Settings,
    ui: UiState,
    clock: Arc<dyn Clock>,
}

impl CalendarApp {
    pub fn new(settings: Settings, clock: Arc<dyn Clock>) -> Self {
        let grid = MonthGrid::new(clock.now().date(), settings.week_starts_on.weekday());
        Self {
            store: EventStore::new(),
            settings,
            ui: UiState::new(grid),
            clock,
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn events(&self) -> &[EventRecord] {
        self.store.events()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn grid(&self) -> MonthGrid {
        self.ui.grid
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::PrevMonth => self.ui.grid = self.ui.grid.prev_month(),
            Message::NextMonth => self.ui.grid = self.ui.grid.next_month(),
            Message::Today => {
                self.ui.grid = MonthGrid::new(self.today(), self.settings.week_starts_on.weekday());
            }
            Message::DaySelected(day) => self.ui.selected_day = Some(day),
            Message::CloseDay => self.ui.selected_day = None,
            Message::OpenAddForm => self.ui.add_form_open = true,
            Message::CloseAddForm => self.ui.add_form_open = false,
            Message::SubmitEvent(form) => {
                if let Err(e) = self.add_event(form) {
                    warn!("Manual add rejected: {}", e);
                    self.ui.status = e.user_message();
                }
            }
            Message::ImportCompleted(Ok(events)) => {
                let count = events.len();
                self.store.extend(events);
                self.ui.status = format!("Imported {} events", count);
            }
            Message::ImportCompleted(Err(msg)) => {
                warn!("Import failed: {}", msg);
                self.ui.status = msg;
            }
            Message::ShowFormatHelp => self.ui.format_help_open = true,
            Message::CloseFormatHelp => self.ui.format_help_open = false,
        }
    }

    /// Validate the form and append the event. The form closes on success.
    pub fn add_event(&mut self, form: EventForm) -> AppResult<()> {
        let event = form.into_event()?;
        log_manual_add(&event.title, &event.date);
        self.ui.status = format!("Added '{}'", event.title);
        self.store.push(event);
        self.ui.add_form_open = false;
        Ok(())
    }

    /// Blank form pre-filled with the configured default color.
    pub fn new_form(&self) -> EventForm {
        EventForm::with_color(self.settings.default_color.clone())
    }

    pub fn day_events(&self, day: NaiveDate) -> Vec<DayEvent<'_>> {
        annotate_day(self.store.events(), day, self.now(), &self.settings)
    }

    pub fn selected_day_events(&self) -> Vec<DayEvent<'_>> {
        match self.ui.selected_day {
            Some(day) => self.day_events(day),
            None => Vec::new(),
        }
    }

    pub fn month_cells(&self) -> Vec<Vec<DayCell<'_>>> {
        self.ui
            .grid
            .cells(self.store.events(), self.today(), self.settings.preview_limit)
    }
}

impl Message {
    /// Wrap an import outcome, turning failures into their user-facing message.
    pub fn from_import(result: AppResult<Vec<EventRecord>>) -> Self {
        match result {
            Ok(events) => {
                info!("Import produced {} events", events.len());
                Message::ImportCompleted(Ok(events))
            }
            Err(e) => Message::ImportCompleted(Err(e.user_message())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClock;
    use crate::error::AppError;

    fn app_at(y: i32, m: u32, d: u32, h: u32) -> CalendarApp {
        let at = NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap();
        let mut clock = MockClock::new();
        clock.expect_now().return_const(at);
        CalendarApp::new(Settings::default(), Arc::new(clock))
    }

    fn form(title: &str) -> EventForm {
        EventForm {
            title: title.to_string(),
            date: "2025-11-03".to_string(),
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            ..EventForm::default()
        }
    }

    #[test]
    fn test_starts_on_current_month() {
        let app = app_at(2025, 11, 17, 9);
        assert_eq!(app.grid().label(), "Nov 2025");
        assert_eq!(app.ui().status, "Ready");
    }

    #[test]
    fn test_navigation_and_today() {
        let mut app = app_at(2025, 11, 17, 9);
        app.update(Message::NextMonth);
        app.update(Message::NextMonth);
        assert_eq!(app.grid().label(), "Jan 2026");
        app.update(Message::PrevMonth);
        assert_eq!(app.grid().label(), "Dec 2025");
        app.update(Message::Today);
        assert_eq!(app.grid().label(), "Nov 2025");
    }

    #[test]
    fn test_submit_event_appends_and_closes_form() {
        let mut app = app_at(2025, 11, 3, 12);
        app.update(Message::OpenAddForm);
        app.update(Message::SubmitEvent(form("Standup")));

        assert_eq!(app.store().len(), 1);
        assert!(!app.ui().add_form_open);
        assert_eq!(app.events()[0].color, "#3b82f6");
    }

    #[test]
    fn test_submit_incomplete_form_sets_status() {
        let mut app = app_at(2025, 11, 3, 12);
        app.update(Message::OpenAddForm);
        app.update(Message::SubmitEvent(form("")));

        assert!(app.store().is_empty());
        assert!(app.ui().add_form_open);
        assert_eq!(app.ui().status, "Please fill out all fields.");
    }

    #[test]
    fn test_failed_import_applies_nothing() {
        let mut app = app_at(2025, 11, 3, 12);
        app.update(Message::from_import(Err(AppError::shape_validation())));
        assert!(app.store().is_empty());
        assert_eq!(app.store().version(), 0);
        assert!(app.ui().status.contains("startTime"));
    }

    #[test]
    fn test_selected_day_events() {
        let mut app = app_at(2025, 11, 3, 12);
        app.update(Message::ImportCompleted(Ok(vec![
            EventRecord::new("2025-11-03", "09:00", "10:00", "A", "#3B82F6"),
            EventRecord::new("2025-11-03", "09:30", "10:30", "B", "#3B82F6"),
        ])));
        assert!(app.selected_day_events().is_empty());

        app.update(Message::DaySelected(NaiveDate::from_ymd_opt(2025, 11, 3).unwrap()));
        let day = app.selected_day_events();
        assert_eq!(day.len(), 2);
        assert!(day.iter().all(|e| e.has_conflict() && e.is_past));

        app.update(Message::CloseDay);
        assert!(app.ui().selected_day.is_none());
    }

    #[test]
    fn test_new_form_uses_configured_color() {
        let at = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap().and_hms_opt(12, 0, 0).unwrap();
        let settings = Settings { default_color: "#10B981".to_string(), ..Settings::default() };
        let app = CalendarApp::new(settings, Arc::new(crate::clock::FixedClock(at)));
        assert_eq!(app.new_form().color, "#10B981");
    }
}
