//! UI state management module
//!
//! Presentation state kept apart from the event list itself.

use chrono::NaiveDate;

use crate::calendar::MonthGrid;

/// Application UI state
#[derive(Debug, Clone)]
pub struct UiState {
    /// Month currently displayed
    pub grid: MonthGrid,

    /// Day whose event listing is open
    pub selected_day: Option<NaiveDate>,

    /// Whether the add-event form is open
    pub add_form_open: bool,

    /// Whether the import format help is open
    pub format_help_open: bool,

    /// Last status message shown to the user
    pub status: String,
}

impl UiState {
    pub fn new(grid: MonthGrid) -> Self {
        Self {
            grid,
            selected_day: None,
            add_form_open: false,
            format_help_open: false,
            status: "Ready".to_string(),
        }
    }
}
