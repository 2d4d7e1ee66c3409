use chrono::NaiveDate;

use crate::models::{EventForm, EventRecord};

/// Unified application message type
///
/// Every change to the calendar state goes through one of these.
#[derive(Debug, Clone)]
pub enum Message {
    // ===== Month Navigation =====
    /// Show the previous month
    PrevMonth,
    /// Show the next month
    NextMonth,
    /// Jump back to the month containing today
    Today,

    // ===== Day Details =====
    /// Open the event listing for a day
    DaySelected(NaiveDate),
    /// Close the day listing
    CloseDay,

    // ===== Manual Add =====
    OpenAddForm,
    CloseAddForm,
    /// Submit the add-event form
    SubmitEvent(EventForm),

    // ===== Import =====
    /// A file import finished; errors arrive as user-facing messages
    ImportCompleted(Result<Vec<EventRecord>, String>),

    // ===== Help =====
    ShowFormatHelp,
    CloseFormatHelp,
}
