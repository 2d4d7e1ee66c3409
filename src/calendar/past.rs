//! Whether an event has already elapsed relative to a given instant.

use chrono::NaiveDateTime;

use crate::models::EventRecord;

/// An event on an earlier day is past; an event on a later day is not. An
/// event on the day of `now` is past once its end time is strictly before
/// `now`'s wall-clock time. The start time plays no part.
///
/// Events whose date or end time do not parse are never past.
pub fn is_past(event: &EventRecord, now: NaiveDateTime) -> bool {
    let Some(day) = event.day() else {
        return false;
    };
    let today = now.date();

    if day != today {
        return day < today;
    }

    event.end().is_some_and(|end| end < now.time())
}
