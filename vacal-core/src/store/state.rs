//! Immutable state snapshot and the reducer producing the next one.

use chrono::NaiveDate;
use serde::Serialize;

use crate::date::{self, CalendarDay};
use crate::event::VacationEvent;
use crate::holiday::Holiday;
use crate::lookup::{self, DayClick, PersonFilter};
use crate::person::Person;
use crate::store::action::Action;
use crate::store::seed::seed_persons;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct State {
    pub persons: Vec<Person>,
    pub events: Vec<VacationEvent>,
    pub holidays: Vec<Holiday>,
    /// Any date within the displayed month.
    pub selected_date: NaiveDate,
    pub is_sidebar_open: bool,
    pub selected_person_ids: PersonFilter,
}

impl State {
    /// Empty roster, nothing scheduled.
    pub fn empty(selected_date: NaiveDate) -> Self {
        State {
            persons: Vec::new(),
            events: Vec::new(),
            holidays: Vec::new(),
            selected_date,
            is_sidebar_open: true,
            selected_person_ids: PersonFilter::new(),
        }
    }

    /// The state every session starts from: the two seed persons.
    pub fn seeded(selected_date: NaiveDate) -> Self {
        State {
            persons: seed_persons(),
            ..State::empty(selected_date)
        }
    }

    /// Produce the next snapshot. Updates and deletes of unknown ids leave
    /// the collections unchanged.
    pub fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::AddPerson(person) => self.persons.push(person),
            Action::UpdatePerson(person) => replace_by_id(&mut self.persons, person, |p| &p.id),
            Action::DeletePerson(id) => {
                self.persons.retain(|p| p.id != id);
                self.events.retain(|e| e.person_id != id);
                self.selected_person_ids.remove(&id);
            }
            Action::AddEvent(event) => self.events.push(event),
            Action::UpdateEvent(event) => replace_by_id(&mut self.events, event, |e| &e.id),
            Action::DeleteEvent(id) => self.events.retain(|e| e.id != id),
            Action::AddHoliday(holiday) => self.holidays.push(holiday),
            Action::DeleteHoliday(id) => self.holidays.retain(|h| h.id != id),
            Action::SetSelectedDate(date) => self.selected_date = date,
            Action::ToggleSidebar => self.is_sidebar_open = !self.is_sidebar_open,
            Action::TogglePersonFilter(id) => {
                if !self.selected_person_ids.remove(&id) {
                    self.selected_person_ids.insert(id);
                }
            }
        }
        self
    }

    // QUERIES:

    /// Placeholder for a signed-in user: the first person on the roster.
    pub fn current_user(&self) -> Option<&Person> {
        self.persons.first()
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.persons.iter().find(|p| p.id == id)
    }

    pub fn event(&self, id: &str) -> Option<&VacationEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn holiday_on(&self, day: NaiveDate) -> Option<&Holiday> {
        lookup::holiday_for_day(day, &self.holidays)
    }

    /// Events shown on `day` under the active person filter.
    pub fn events_on(&self, day: NaiveDate) -> Vec<&VacationEvent> {
        lookup::events_for_day(day, &self.events, &self.selected_person_ids)
    }

    pub fn day_click(&self, day: NaiveDate) -> DayClick {
        lookup::day_click(day, &self.holidays)
    }

    pub fn is_filtered_by(&self, person_id: &str) -> bool {
        self.selected_person_ids.contains(person_id)
    }

    /// Grid for the selected month with events and holidays attached.
    /// Holiday cells carry no events.
    pub fn calendar_days(&self, today: NaiveDate) -> Vec<CalendarDay> {
        let mut days = date::calendar_days(self.selected_date, today);
        for day in &mut days {
            match self.holiday_on(day.date) {
                Some(holiday) => day.holiday = Some(holiday.clone()),
                None => day.events = self.events_on(day.date).into_iter().cloned().collect(),
            }
        }
        days
    }
}

fn replace_by_id<T, F>(items: &mut [T], replacement: T, id_of: F)
where
    F: Fn(&T) -> &String,
{
    if let Some(slot) = items.iter_mut().find(|item| id_of(item) == id_of(&replacement)) {
        *slot = replacement;
    }
}
