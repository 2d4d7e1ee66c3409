// file: src/models/form.rs
use log::debug;
use serde::{Deserialize, Serialize};

use super::event::{parse_date, parse_time, EventRecord};
use super::settings::DEFAULT_EVENT_COLOR;
use crate::error::{AppError, AppResult};

/// Fields of the manual add-event form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventForm {
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub color: String,
}

impl Default for EventForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            date: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            color: DEFAULT_EVENT_COLOR.to_string(),
        }
    }
}

impl EventForm {
    pub fn with_color(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            ..Self::default()
        }
    }

    /// Build the event the form describes.
    ///
    /// The form enforces its own shape, so the JSON validator is not involved.
    pub fn into_event(self) -> AppResult<EventRecord> {
        if self.title.is_empty()
            || self.date.is_empty()
            || self.start_time.is_empty()
            || self.end_time.is_empty()
        {
            return Err(AppError::invalid_input("Please fill out all fields."));
        }

        if parse_date(&self.date).is_none() {
            return Err(AppError::invalid_input(format!(
                "Date '{}' must be YYYY-MM-DD",
                self.date
            )));
        }
        for (label, value) in [("Start time", &self.start_time), ("End time", &self.end_time)] {
            if parse_time(value).is_none() {
                return Err(AppError::invalid_input(format!("{} '{}' must be HH:mm", label, value)));
            }
        }

        let color = if self.color.is_empty() {
            DEFAULT_EVENT_COLOR.to_string()
        } else {
            self.color
        };

        debug!("Form produced event '{}' on {}", self.title, self.date);
        Ok(EventRecord {
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            title: self.title,
            color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EventForm {
        EventForm {
            title: "Dentist".to_string(),
            date: "2025-11-07".to_string(),
            start_time: "14:00".to_string(),
            end_time: "15:00".to_string(),
            ..EventForm::default()
        }
    }

    #[test]
    fn test_form_defaults_color() {
        let event = filled().into_event().unwrap();
        assert_eq!(event.color, "#3b82f6");
        assert_eq!(event.title, "Dentist");
    }

    #[test]
    fn test_form_requires_all_fields() {
        let form = EventForm {
            title: String::new(),
            ..filled()
        };
        let err = form.into_event().unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: Please fill out all fields.");
    }

    #[test]
    fn test_form_rejects_bad_time() {
        let form = EventForm {
            end_time: "3pm".to_string(),
            ..filled()
        };
        assert!(matches!(form.into_event(), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_form_keeps_custom_color() {
        let form = EventForm {
            color: "#10B981".to_string(),
            ..filled()
        };
        assert_eq!(form.into_event().unwrap().color, "#10B981");
    }
}
