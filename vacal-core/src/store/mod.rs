//! The calendar store: current snapshot, reducer dispatch and subscribers.

mod action;
mod seed;
mod state;

pub use action::Action;
pub use seed::seed_persons;
pub use state::State;

use std::fmt;
use std::rc::Rc;

use chrono::NaiveDate;
use tracing::debug;

use crate::event::VacationEvent;
use crate::holiday::Holiday;
use crate::person::Person;

/// Callback invoked with the new snapshot after every dispatch.
pub type Listener = Box<dyn FnMut(&State)>;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct Store {
    state: Rc<State>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Store {
    pub fn new(initial: State) -> Self {
        Store {
            state: Rc::new(initial),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Store holding the seed roster, showing the month of `selected_date`.
    pub fn seeded(selected_date: NaiveDate) -> Self {
        Self::new(State::seeded(selected_date))
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Shared handle to the current snapshot. Later dispatches never mutate it.
    pub fn snapshot(&self) -> Rc<State> {
        Rc::clone(&self.state)
    }

    /// Replace the snapshot with the reduced one and notify subscribers.
    pub fn dispatch(&mut self, action: Action) {
        let name = action.name();
        let next = State::clone(&self.state).reduce(action);
        debug!(
            action = name,
            persons = next.persons.len(),
            events = next.events.len(),
            holidays = next.holidays.len(),
            "dispatched"
        );
        self.state = Rc::new(next);

        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&State) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    // PERSONS:

    pub fn add_person(&mut self, person: Person) {
        self.dispatch(Action::AddPerson(person));
    }

    pub fn update_person(&mut self, person: Person) {
        self.dispatch(Action::UpdatePerson(person));
    }

    /// Removes the person and all of their events.
    pub fn delete_person(&mut self, id: &str) {
        self.dispatch(Action::DeletePerson(id.to_string()));
    }

    // EVENTS:

    pub fn add_event(&mut self, event: VacationEvent) {
        self.dispatch(Action::AddEvent(event));
    }

    pub fn update_event(&mut self, event: VacationEvent) {
        self.dispatch(Action::UpdateEvent(event));
    }

    pub fn delete_event(&mut self, id: &str) {
        self.dispatch(Action::DeleteEvent(id.to_string()));
    }

    // HOLIDAYS:

    pub fn add_holiday(&mut self, holiday: Holiday) {
        self.dispatch(Action::AddHoliday(holiday));
    }

    pub fn delete_holiday(&mut self, id: &str) {
        self.dispatch(Action::DeleteHoliday(id.to_string()));
    }

    // UI STATE:

    pub fn set_selected_date(&mut self, date: NaiveDate) {
        self.dispatch(Action::SetSelectedDate(date));
    }

    pub fn toggle_sidebar(&mut self) {
        self.dispatch(Action::ToggleSidebar);
    }

    pub fn toggle_person_filter(&mut self, person_id: &str) {
        self.dispatch(Action::TogglePersonFilter(person_id.to_string()));
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
