//! Calendar date utilities: month grids, date keys and month stepping.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;

use crate::error::{VacalError, VacalResult};
use crate::event::VacationEvent;
use crate::holiday::Holiday;

/// Canonical date key format (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Column headers of the month grid. Weeks start on Monday.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// One cell of the month grid. Derived on every render, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub events: Vec<VacationEvent>,
    pub holiday: Option<Holiday>,
}

impl CalendarDay {
    fn new(date: NaiveDate, reference: NaiveDate, today: NaiveDate) -> Self {
        CalendarDay {
            date,
            is_current_month: same_month(date, reference),
            is_today: date == today,
            events: Vec::new(),
            holiday: None,
        }
    }

    /// Canonical key of this cell's date.
    pub fn key(&self) -> String {
        format_date(self.date)
    }
}

/// Cells from the Monday on/before the first of `reference`'s month through
/// the last day of that month. The final row may be short.
pub fn calendar_days(reference: NaiveDate, today: NaiveDate) -> Vec<CalendarDay> {
    let first = first_of_month(reference);
    let lead = u64::from(first.weekday().num_days_from_monday());
    let start = first.checked_sub_days(Days::new(lead)).unwrap_or(first);

    start
        .iter_days()
        .take_while(|date| *date < first || same_month(*date, first))
        .map(|date| CalendarDay::new(date, reference, today))
        .collect()
}

/// Split a grid into rows of seven cells.
pub fn weeks(days: &[CalendarDay]) -> std::slice::Chunks<'_, CalendarDay> {
    days.chunks(WEEKDAY_LABELS.len())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` key.
pub fn parse_date(s: &str) -> VacalResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| VacalError::InvalidDate(s.to_string()))
}

/// Same day one month earlier, clamped to the length of that month.
pub fn previous_month(date: NaiveDate) -> NaiveDate {
    date.checked_sub_months(Months::new(1)).unwrap_or(date)
}

/// Same day one month later, clamped to the length of that month.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    date.checked_add_months(Months::new(1)).unwrap_or(date)
}

/// Heading for a month view, e.g. "June 2024".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(date.day0())))
        .unwrap_or(date)
}

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
