// Declare modules
pub mod event;
pub mod form;
pub mod settings;
pub mod store;

// Re-export the model types so callers can `use crate::models::EventRecord`.
pub use event::{parse_date, parse_time, EventRecord, DATE_FORMAT, TIME_FORMAT};
pub use form::EventForm;
pub use settings::{Settings, WeekStart, DEFAULT_EVENT_COLOR};
pub use store::EventStore;
