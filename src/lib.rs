// monthcal library
// Month calendar engine: JSON import validation, day bucketing, collision
// detection, past-event classification and display colors.

pub mod app;
pub mod calendar;
pub mod clock;
pub mod command_handlers;
pub mod config;
pub mod error;
pub mod messages;
pub mod models;
pub mod ui;
pub mod ui_state;
pub mod utils;

// Re-export commonly used types
pub use app::CalendarApp;
pub use calendar::{
    annotate_day, detect_conflicts, events_on_day, intersects, is_past, is_valid_event_array,
    parse_event_json, DayEvent, EventTone, MonthGrid,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{AppError, AppResult};
pub use messages::Message;
pub use models::*;
pub use ui::styles::{border, lighten, shade, EventShades};
