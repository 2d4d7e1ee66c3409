//! Month grid layout: the weeks shown for a month and what each cell holds.

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

use super::bucket::events_on_day;
use crate::models::EventRecord;

/// Visible weeks of one month, each a full row of seven days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    month_start: NaiveDate,
    week_start: Weekday,
}

/// One day of the grid with its event preview.
#[derive(Debug, Clone)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_current_month: bool,
    pub preview: Vec<&'a EventRecord>,
    /// Events on this day beyond the preview ("+ N more").
    pub remaining: usize,
}

impl MonthGrid {
    /// Grid for the month containing `anchor`.
    pub fn new(anchor: NaiveDate, week_start: Weekday) -> Self {
        Self {
            month_start: anchor.with_day(1).unwrap_or(anchor),
            week_start,
        }
    }

    pub fn month_start(&self) -> NaiveDate {
        self.month_start
    }

    pub fn month_end(&self) -> NaiveDate {
        let month = self.month_start.month();
        self.month_start
            .iter_days()
            .take_while(|d| d.month() == month)
            .last()
            .unwrap_or(self.month_start)
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Start of the week containing the first of the month.
    pub fn first_visible(&self) -> NaiveDate {
        let offset = days_after_week_start(self.month_start.weekday(), self.week_start);
        self.month_start - Duration::days(offset)
    }

    /// End of the week containing the last day of the month.
    pub fn last_visible(&self) -> NaiveDate {
        let end = self.month_end();
        let offset = 6 - days_after_week_start(end.weekday(), self.week_start);
        end + Duration::days(offset)
    }

    pub fn days(&self) -> Vec<NaiveDate> {
        let last = self.last_visible();
        self.first_visible()
            .iter_days()
            .take_while(|d| *d <= last)
            .collect()
    }

    pub fn weeks(&self) -> Vec<Vec<NaiveDate>> {
        self.days().chunks(7).map(|week| week.to_vec()).collect()
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day.year() == self.month_start.year() && day.month() == self.month_start.month()
    }

    pub fn next_month(&self) -> Self {
        let month_start = self
            .month_start
            .checked_add_months(Months::new(1))
            .unwrap_or(self.month_start);
        Self { month_start, ..*self }
    }

    pub fn prev_month(&self) -> Self {
        let month_start = self
            .month_start
            .checked_sub_months(Months::new(1))
            .unwrap_or(self.month_start);
        Self { month_start, ..*self }
    }

    /// Header label, e.g. "Nov 2025".
    pub fn label(&self) -> String {
        self.month_start.format("%b %Y").to_string()
    }

    /// Weekday names in display order, e.g. `MON`..`SUN`.
    pub fn weekday_headers(&self) -> Vec<String> {
        let mut day = self.week_start;
        (0..7)
            .map(|_| {
                let name = format!("{:?}", day).to_uppercase();
                day = day.succ();
                name
            })
            .collect()
    }

    /// Cells for every visible week, previewing up to `preview_limit` events.
    pub fn cells<'a>(
        &self,
        events: &'a [EventRecord],
        today: NaiveDate,
        preview_limit: usize,
    ) -> Vec<Vec<DayCell<'a>>> {
        self.weeks()
            .into_iter()
            .map(|week| {
                week.into_iter()
                    .map(|date| {
                        let mut preview = events_on_day(events, date);
                        let remaining = preview.len().saturating_sub(preview_limit);
                        preview.truncate(preview_limit);
                        DayCell {
                            date,
                            is_today: date == today,
                            is_current_month: self.contains(date),
                            preview,
                            remaining,
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

fn days_after_week_start(day: Weekday, week_start: Weekday) -> i64 {
    let day = i64::from(day.num_days_from_monday());
    let start = i64::from(week_start.num_days_from_monday());
    (day - start).rem_euclid(7)
}
