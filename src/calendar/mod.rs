// Calendar core
// Validation of imported data, day bucketing, collision detection, past
// classification and the month grid layout.

pub mod bucket;
pub mod day;
pub mod grid;
pub mod import;
pub mod overlap;
pub mod past;
pub mod validate;

pub use bucket::{count_on_day, events_on_day};
pub use day::{annotate_day, DayEvent, EventTone};
pub use grid::{DayCell, MonthGrid};
pub use import::{check_file_type, import_file, Importer};
pub use overlap::{conflicts_of, detect_conflicts, intersects};
pub use past::is_past;
pub use validate::{is_valid_event_array, parse_event_json};
