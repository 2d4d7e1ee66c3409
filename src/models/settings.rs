// file: src/models/settings.rs
use chrono::Weekday;
use serde::{Deserialize, Serialize};

pub const DEFAULT_EVENT_COLOR: &str = "#3b82f6";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    Monday,
    Sunday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "monday" | "mon" => Some(WeekStart::Monday),
            "sunday" | "sun" => Some(WeekStart::Sunday),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub week_starts_on: WeekStart,
    pub preview_limit: usize,   // events shown per grid cell
    pub default_color: String,  // manual-add form default
    pub tint_factor: f64,       // 0.0 to 1.0, blend toward white
    pub conflict_color: String, // tone for overlapping events
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            week_starts_on: WeekStart::Monday,
            preview_limit: 2,
            default_color: DEFAULT_EVENT_COLOR.to_string(),
            tint_factor: 0.85,
            conflict_color: "#EF4444".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.week_starts_on, WeekStart::Monday);
        assert_eq!(settings.preview_limit, 2);
        assert_eq!(settings.default_color, "#3b82f6");
        assert_eq!(settings.tint_factor, 0.85);
        assert_eq!(settings.conflict_color, "#EF4444");
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"week_starts_on":"sunday"}"#).unwrap();
        assert_eq!(settings.week_starts_on, WeekStart::Sunday);
        assert_eq!(settings.preview_limit, 2);
    }

    #[test]
    fn test_week_start_parse() {
        assert_eq!(WeekStart::parse("Mon"), Some(WeekStart::Monday));
        assert_eq!(WeekStart::parse(" sunday "), Some(WeekStart::Sunday));
        assert_eq!(WeekStart::parse("friday"), None);
        assert_eq!(WeekStart::Sunday.weekday(), Weekday::Sun);
    }
}
