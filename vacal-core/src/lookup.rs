//! Which events and holidays show up on a given day.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::event::VacationEvent;
use crate::holiday::Holiday;

/// Set of person ids restricting the displayed events. Empty means no filter.
pub type PersonFilter = BTreeSet<String>;

/// What clicking a day cell opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayClick {
    /// The day is a holiday: open the holiday modal (in remove mode).
    Holiday(NaiveDate),
    /// Open the event modal in create mode for this day.
    NewEvent(NaiveDate),
}

/// Events whose person passes the filter.
pub fn filter_events<'a>(
    events: &'a [VacationEvent],
    filter: &PersonFilter,
) -> impl Iterator<Item = &'a VacationEvent> {
    events
        .iter()
        .filter(move |event| filter.is_empty() || filter.contains(&event.person_id))
}

/// Filtered events covering `day`, in insertion order.
pub fn events_for_day<'a>(
    day: NaiveDate,
    events: &'a [VacationEvent],
    filter: &PersonFilter,
) -> Vec<&'a VacationEvent> {
    filter_events(events, filter)
        .filter(|event| event.covers(day))
        .collect()
}

/// First holiday on `day`, if any.
pub fn holiday_for_day(day: NaiveDate, holidays: &[Holiday]) -> Option<&Holiday> {
    holidays.iter().find(|holiday| holiday.date == day)
}

pub fn day_click(day: NaiveDate, holidays: &[Holiday]) -> DayClick {
    match holiday_for_day(day, holidays) {
        Some(_) => DayClick::Holiday(day),
        None => DayClick::NewEvent(day),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Location;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(person: &str, start: NaiveDate, end: NaiveDate) -> VacationEvent {
        VacationEvent::new(person.into(), start, end, Location::Doral)
    }

    #[test]
    fn empty_filter_shows_everything() {
        let events = vec![
            event("1", date(2024, 6, 10), date(2024, 6, 12)),
            event("2", date(2024, 6, 11), date(2024, 6, 11)),
        ];
        let filter = PersonFilter::new();

        assert_eq!(filter_events(&events, &filter).count(), 2);
        assert_eq!(events_for_day(date(2024, 6, 11), &events, &filter).len(), 2);
    }

    #[test]
    fn filter_keeps_only_selected_persons() {
        let events = vec![
            event("1", date(2024, 6, 10), date(2024, 6, 12)),
            event("2", date(2024, 6, 11), date(2024, 6, 11)),
        ];
        let filter: PersonFilter = ["2".to_string()].into();

        let found = events_for_day(date(2024, 6, 11), &events, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].person_id, "2");
        assert!(events_for_day(date(2024, 6, 10), &events, &filter).is_empty());
    }

    #[test]
    fn events_keep_insertion_order() {
        let events = vec![
            event("2", date(2024, 6, 1), date(2024, 6, 30)),
            event("1", date(2024, 6, 11), date(2024, 6, 11)),
        ];
        let found = events_for_day(date(2024, 6, 11), &events, &PersonFilter::new());
        let persons: Vec<_> = found.iter().map(|e| e.person_id.as_str()).collect();
        assert_eq!(persons, ["2", "1"]);
    }

    #[test]
    fn found_events_outlive_the_filter() {
        let events = vec![event("1", date(2024, 6, 10), date(2024, 6, 12))];
        let found = {
            let filter: PersonFilter = ["1".to_string()].into();
            events_for_day(date(2024, 6, 11), &events, &filter)
        };
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].person_id, "1");
    }

    #[test]
    fn holiday_lookup_returns_first_match() {
        let first = Holiday::new(date(2024, 7, 4), "Independence Day");
        let second = Holiday::new(date(2024, 7, 4), "HOLIDAY");
        let holidays = vec![first.clone(), second];

        assert_eq!(holiday_for_day(date(2024, 7, 4), &holidays), Some(&first));
        assert_eq!(holiday_for_day(date(2024, 7, 5), &holidays), None);
    }

    #[test]
    fn clicking_a_holiday_opens_holiday_mode() {
        let holidays = vec![Holiday::new(date(2024, 6, 15), "HOLIDAY")];

        assert_eq!(
            day_click(date(2024, 6, 15), &holidays),
            DayClick::Holiday(date(2024, 6, 15))
        );
        assert_eq!(
            day_click(date(2024, 6, 14), &holidays),
            DayClick::NewEvent(date(2024, 6, 14))
        );
    }
}
