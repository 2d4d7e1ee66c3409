// src/ui/mod.rs
// Text rendering for the month grid, the day listing and the format help.

pub mod calendar;
pub mod styles;

pub use calendar::CalendarView;

/// Shown by the format help: the shape an import file must have.
pub const FORMAT_HELP: &str = r##"Import a .json file containing an array of events:

[
  {
    "date": "2025-11-03",
    "startTime": "09:00",
    "endTime": "10:00",
    "title": "Team Standup Meeting",
    "color": "#3B82F6"
  },
  {
    "date": "2025-11-05",
    "startTime": "11:30",
    "endTime": "12:15",
    "title": "Client Call - Project Atlas",
    "color": "#10B981"
  }
]

date       YYYY-MM-DD
startTime  HH:mm (24h)
endTime    HH:mm (24h)
title      any text
color      #RRGGBB
"##;

/// Cut `text` to at most `width` characters, marking the cut with `…`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept)
}
