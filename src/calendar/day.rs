//! Per-day event annotation: conflicts, past state and display tone.

use chrono::{NaiveDate, NaiveDateTime};
use log::warn;

use super::bucket::events_on_day;
use super::overlap::detect_conflicts;
use super::past::is_past;
use crate::models::{EventRecord, Settings};
use crate::ui::styles::{shade, EventShades};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventTone {
    /// Tint and border derived from the event's own color.
    Shaded(EventShades),
    /// The event collides with another one; shown in the conflict color.
    Conflict(EventShades),
    /// The color could not be parsed, so no tint is applied.
    Plain,
}

/// One event of a day, ready to render.
#[derive(Debug, Clone)]
pub struct DayEvent<'a> {
    pub event: &'a EventRecord,
    /// Positions (within the same day listing) of the events this one collides with.
    pub conflicts: Vec<usize>,
    pub is_past: bool,
    pub tone: EventTone,
}

impl DayEvent<'_> {
    pub fn has_conflict(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

/// Bucket `events` to `day` and annotate each one, keeping bucket order.
pub fn annotate_day<'a>(
    events: &'a [EventRecord],
    day: NaiveDate,
    now: NaiveDateTime,
    settings: &Settings,
) -> Vec<DayEvent<'a>> {
    let day_events = events_on_day(events, day);
    let conflicts = detect_conflicts(&day_events);

    day_events
        .into_iter()
        .zip(conflicts)
        .map(|(event, conflicts)| {
            let tone = tone_for(event, !conflicts.is_empty(), settings);
            DayEvent {
                event,
                conflicts,
                is_past: is_past(event, now),
                tone,
            }
        })
        .collect()
}

fn tone_for(event: &EventRecord, conflicting: bool, settings: &Settings) -> EventTone {
    let color = if conflicting {
        settings.conflict_color.as_str()
    } else {
        event.color.as_str()
    };

    match shade(color, settings.tint_factor) {
        Ok(shades) if conflicting => EventTone::Conflict(shades),
        Ok(shades) => EventTone::Shaded(shades),
        Err(e) => {
            warn!("No shading for '{}': {}", event.title, e);
            EventTone::Plain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nov_3() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 3).unwrap()
    }

    fn noon() -> NaiveDateTime {
        nov_3().and_hms_opt(12, 0, 0).unwrap()
    }

    fn event(date: &str, start: &str, end: &str, title: &str, color: &str) -> EventRecord {
        EventRecord::new(date, start, end, title, color)
    }

    #[test]
    fn test_overlapping_pair_and_free_event() {
        let events = vec![
            event("2025-11-03", "09:00", "10:00", "Standup", "#3B82F6"),
            event("2025-11-03", "09:30", "10:30", "Interview", "#10B981"),
            event("2025-11-03", "14:00", "15:00", "Review", "#F59E0B"),
            event("2025-11-04", "09:15", "09:45", "Tomorrow", "#3B82F6"),
        ];

        let day = annotate_day(&events, nov_3(), noon(), &Settings::default());
        assert_eq!(day.len(), 3);
        assert_eq!(day[0].conflicts, vec![1]);
        assert_eq!(day[1].conflicts, vec![0]);
        assert!(!day[2].has_conflict());
    }

    #[test]
    fn test_tones_follow_conflicts() {
        let events = vec![
            event("2025-11-03", "09:00", "10:00", "A", "#3B82F6"),
            event("2025-11-03", "09:30", "10:30", "B", "#3B82F6"),
            event("2025-11-03", "11:00", "12:00", "C", "#000000"),
        ];
        let settings = Settings::default();
        let day = annotate_day(&events, nov_3(), noon(), &settings);

        let conflict = shade(&settings.conflict_color, settings.tint_factor).unwrap();
        assert_eq!(day[0].tone, EventTone::Conflict(conflict));
        match &day[2].tone {
            EventTone::Shaded(shades) => {
                assert_eq!(shades.light, "rgb(217, 217, 217)");
                assert_eq!(shades.border, "rgb(0, 0, 0)");
            }
            other => panic!("expected shaded tone, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_color_only_affects_that_event() {
        let events = vec![
            event("2025-11-03", "09:00", "10:00", "Odd", "blue"),
            event("2025-11-03", "13:00", "14:00", "Fine", "#3B82F6"),
        ];
        let day = annotate_day(&events, nov_3(), noon(), &Settings::default());
        assert_eq!(day[0].tone, EventTone::Plain);
        assert!(matches!(day[1].tone, EventTone::Shaded(_)));
    }

    #[test]
    fn test_past_flags() {
        let events = vec![
            event("2025-11-03", "09:00", "11:00", "Morning", "#3B82F6"),
            event("2025-11-03", "12:30", "13:00", "Lunch", "#3B82F6"),
        ];
        let day = annotate_day(&events, nov_3(), noon(), &Settings::default());
        assert!(day[0].is_past);
        assert!(!day[1].is_past);
    }
}
