//! Collision detection between events on the same day.
//!
//! Times are compared as wall-clock values on a shared reference day, so the
//! callers must already have bucketed the events to one calendar day.

use log::debug;

use crate::models::EventRecord;

/// Half-open interval intersection: `a.start < b.end && b.start < a.end`.
///
/// Back-to-back events (`a.end == b.start`) do not intersect. A pair where
/// any of the four times fails to parse never intersects.
pub fn intersects(a: &EventRecord, b: &EventRecord) -> bool {
    match (a.time_range(), b.time_range()) {
        (Some((a_start, a_end)), Some((b_start, b_end))) => a_start < b_end && b_start < a_end,
        _ => false,
    }
}

/// For every position in `day_events`, the positions of the other events it
/// intersects with, in ascending order.
///
/// Identity is positional, so two entries with identical values are still
/// each other's conflicts.
pub fn detect_conflicts(day_events: &[&EventRecord]) -> Vec<Vec<usize>> {
    let mut conflicts = vec![Vec::new(); day_events.len()];

    for i in 0..day_events.len() {
        for j in (i + 1)..day_events.len() {
            if intersects(day_events[i], day_events[j]) {
                conflicts[i].push(j);
                conflicts[j].push(i);
            }
        }
    }

    for list in &mut conflicts {
        list.sort_unstable();
    }

    let colliding = conflicts.iter().filter(|c| !c.is_empty()).count();
    if colliding > 0 {
        debug!("{} of {} events collide", colliding, day_events.len());
    }
    conflicts
}

/// The events that conflict with the one at `index`.
pub fn conflicts_of<'a>(day_events: &[&'a EventRecord], index: usize) -> Vec<&'a EventRecord> {
    let Some(target) = day_events.get(index) else {
        return Vec::new();
    };

    day_events
        .iter()
        .enumerate()
        .filter(|(i, other)| *i != index && intersects(target, other))
        .map(|(_, other)| *other)
        .collect()
}
