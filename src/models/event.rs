// file: src/models/event.rs
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// One calendar event as imported or entered through the add form.
///
/// Fields keep the raw strings they arrived with; the typed accessors parse
/// on demand and return `None` for values that do not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub title: String,
    pub color: String,
}

impl EventRecord {
    pub fn new(
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        title: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            title: title.into(),
            color: color.into(),
        }
    }

    /// Calendar day of the event, interpreted as a local date.
    pub fn day(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    pub fn start(&self) -> Option<NaiveTime> {
        parse_time(&self.start_time)
    }

    pub fn end(&self) -> Option<NaiveTime> {
        parse_time(&self.end_time)
    }

    /// Start and end as same-day wall-clock times.
    pub fn time_range(&self) -> Option<(NaiveTime, NaiveTime)> {
        Some((self.start()?, self.end()?))
    }

    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.day() == Some(day)
    }

    pub fn time_label(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).ok()
}
