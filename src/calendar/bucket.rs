//! Selecting the events that fall on one calendar day.

use chrono::NaiveDate;

use crate::models::EventRecord;

/// Events whose `date` is `day`, in their original order.
///
/// Events with an unparseable date are never on any day.
pub fn events_on_day(events: &[EventRecord], day: NaiveDate) -> Vec<&EventRecord> {
    events.iter().filter(|event| event.is_on(day)).collect()
}

/// Number of events on `day` without collecting them.
pub fn count_on_day(events: &[EventRecord], day: NaiveDate) -> usize {
    events.iter().filter(|event| event.is_on(day)).count()
}
