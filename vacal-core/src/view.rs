//! Headless calendar view: the store, the three modals and the handlers the
//! UI calls on user input.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::date::{self, CalendarDay};
use crate::error::VacalResult;
use crate::event::Location;
use crate::holiday::DEFAULT_HOLIDAY_NAME;
use crate::lookup::DayClick;
use crate::modal::{EventModal, HolidayModal, PersonModal};
use crate::store::{Action, State, Store};

/// Source of "today". Swapped for a fixed date in tests.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Defaults applied when forms open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSettings {
    pub default_location: Location,
    pub holiday_name: String,
}

impl Default for ViewSettings {
    fn default() -> Self {
        ViewSettings {
            default_location: Location::default(),
            holiday_name: DEFAULT_HOLIDAY_NAME.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct CalendarView<C: Clock = SystemClock> {
    store: Store,
    clock: C,
    settings: ViewSettings,
    event_modal: EventModal,
    holiday_modal: HolidayModal,
    person_modal: PersonModal,
    filter_open: bool,
}

impl<C: Clock> CalendarView<C> {
    pub fn new(store: Store, clock: C, settings: ViewSettings) -> Self {
        CalendarView {
            store,
            clock,
            settings,
            event_modal: EventModal::new(),
            holiday_modal: HolidayModal::new(),
            person_modal: PersonModal::new(),
            filter_open: false,
        }
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    pub fn state(&self) -> &State {
        self.store.state()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// The month grid as it should be rendered right now.
    pub fn days(&self) -> Vec<CalendarDay> {
        self.state().calendar_days(self.today())
    }

    pub fn month_label(&self) -> String {
        date::month_label(self.state().selected_date)
    }

    pub fn event_modal(&self) -> &EventModal {
        &self.event_modal
    }

    pub fn event_modal_mut(&mut self) -> &mut EventModal {
        &mut self.event_modal
    }

    pub fn holiday_modal(&self) -> &HolidayModal {
        &self.holiday_modal
    }

    pub fn person_modal_mut(&mut self) -> &mut PersonModal {
        &mut self.person_modal
    }

    // NAVIGATION:

    pub fn previous_month(&mut self) {
        let date = date::previous_month(self.state().selected_date);
        self.store.set_selected_date(date);
    }

    pub fn next_month(&mut self) {
        let date = date::next_month(self.state().selected_date);
        self.store.set_selected_date(date);
    }

    pub fn go_to_today(&mut self) {
        let today = self.today();
        self.store.set_selected_date(today);
    }

    // DAY CELLS:

    /// Holiday days open the holiday modal, every other day opens a new event.
    pub fn click_day(&mut self, day: NaiveDate) -> DayClick {
        let click = self.state().day_click(day);
        match click {
            DayClick::Holiday(date) => self.holiday_modal.open(self.store.state(), date),
            DayClick::NewEvent(date) => self.event_modal.open_create(
                self.store.state(),
                date,
                self.settings.default_location,
            ),
        }
        debug!(?click, "day clicked");
        click
    }

    /// Open an existing event for editing. False if the id is unknown.
    pub fn click_event(&mut self, event_id: &str) -> bool {
        match self.store.state().event(event_id) {
            Some(event) => {
                self.event_modal.open_edit(event);
                true
            }
            None => {
                warn!(event_id, "no such event");
                false
            }
        }
    }

    /// The "+Holiday" affordance. Not offered on days that already are holidays.
    pub fn click_add_holiday(&mut self, day: NaiveDate) -> bool {
        if self.state().holiday_on(day).is_some() {
            return false;
        }
        self.holiday_modal.open(self.store.state(), day);
        true
    }

    // FILTER + SIDEBAR:

    pub fn is_filter_open(&self) -> bool {
        self.filter_open
    }

    pub fn toggle_filter_popover(&mut self) {
        self.filter_open = !self.filter_open;
    }

    pub fn toggle_person_filter(&mut self, person_id: &str) {
        self.store.toggle_person_filter(person_id);
    }

    pub fn toggle_sidebar(&mut self) {
        self.store.toggle_sidebar();
    }

    pub fn open_add_person(&mut self) {
        self.person_modal.open_create();
    }

    pub fn click_person(&mut self, person_id: &str) -> bool {
        match self.store.state().person(person_id) {
            Some(person) => {
                self.person_modal.open_edit(person);
                true
            }
            None => false,
        }
    }

    // MODAL ACTIONS:

    /// Returns true if something was dispatched.
    pub fn submit_event(&mut self) -> VacalResult<bool> {
        let action = self.event_modal.submit()?;
        Ok(self.dispatch_some(action))
    }

    pub fn delete_event(&mut self) -> bool {
        let action = self.event_modal.delete();
        self.dispatch_some(action)
    }

    pub fn cancel_event(&mut self) {
        self.event_modal.cancel();
    }

    pub fn submit_holiday(&mut self) -> bool {
        let action = self.holiday_modal.submit(&self.settings.holiday_name);
        self.dispatch_some(action)
    }

    pub fn cancel_holiday(&mut self) {
        self.holiday_modal.cancel();
    }

    pub fn submit_person(&mut self) -> VacalResult<bool> {
        let action = self.person_modal.submit()?;
        Ok(self.dispatch_some(action))
    }

    pub fn delete_person(&mut self) -> bool {
        let action = self.person_modal.delete();
        self.dispatch_some(action)
    }

    pub fn cancel_person(&mut self) {
        self.person_modal.cancel();
    }

    fn dispatch_some(&mut self, action: Option<Action>) -> bool {
        match action {
            Some(action) => {
                self.store.dispatch(action);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::VacationEvent;
    use crate::modal::HolidayMode;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn view() -> CalendarView<FixedClock> {
        let today = date(2024, 6, 11);
        CalendarView::new(Store::seeded(today), FixedClock(today), ViewSettings::default())
    }

    fn add_event(view: &mut CalendarView<FixedClock>, start: NaiveDate, end: NaiveDate, location: Location) {
        view.click_day(start);
        let form = view.event_modal_mut().form_mut().unwrap();
        form.end_date = end;
        form.location = location;
        assert!(view.submit_event().unwrap());
    }

    #[test]
    fn navigation_moves_the_selected_month() {
        let mut view = view();
        assert_eq!(view.month_label(), "June 2024");

        view.next_month();
        assert_eq!(view.month_label(), "July 2024");
        view.previous_month();
        view.previous_month();
        assert_eq!(view.month_label(), "May 2024");

        view.go_to_today();
        assert_eq!(view.state().selected_date, date(2024, 6, 11));
    }

    #[test]
    fn scenario_through_the_view() {
        let mut view = view();
        add_event(&mut view, date(2024, 6, 10), date(2024, 6, 12), Location::Doral);

        let event: VacationEvent = view.state().events[0].clone();
        assert_eq!(event.person_id, "1");
        assert_eq!(view.state().events_on(date(2024, 6, 11)), vec![&event]);
        assert!(view.state().events_on(date(2024, 6, 13)).is_empty());

        view.toggle_person_filter("2");
        for day in 10..=12 {
            assert!(view.state().events_on(date(2024, 6, day)).is_empty());
        }
        view.toggle_person_filter("2");

        assert!(view.click_add_holiday(date(2024, 6, 15)));
        assert!(view.submit_holiday());

        let click = view.click_day(date(2024, 6, 15));
        assert_eq!(click, DayClick::Holiday(date(2024, 6, 15)));
        assert!(view.holiday_modal().is_open());
        assert!(!view.event_modal().is_open());
        assert!(matches!(
            view.holiday_modal().prompt().unwrap().mode,
            HolidayMode::Remove(_)
        ));
    }

    #[test]
    fn plus_holiday_not_offered_on_holidays() {
        let mut view = view();
        view.click_add_holiday(date(2024, 6, 15));
        view.submit_holiday();

        assert!(!view.click_add_holiday(date(2024, 6, 15)));
        assert!(!view.holiday_modal().is_open());
    }

    #[test]
    fn removing_a_holiday_via_day_click() {
        let mut view = view();
        view.click_add_holiday(date(2024, 6, 15));
        view.submit_holiday();

        view.click_day(date(2024, 6, 15));
        assert!(view.submit_holiday());

        assert!(view.state().holiday_on(date(2024, 6, 15)).is_none());
        assert!(!view.holiday_modal().is_open());
    }

    #[test]
    fn editing_and_deleting_an_event() {
        let mut view = view();
        add_event(&mut view, date(2024, 6, 3), date(2024, 6, 4), Location::Remote);
        let id = view.state().events[0].id.clone();

        assert!(view.click_event(&id));
        view.event_modal_mut().form_mut().unwrap().person_id = Some("2".into());
        assert!(view.submit_event().unwrap());
        assert_eq!(view.state().events[0].person_id, "2");
        assert_eq!(view.state().events[0].id, id);

        assert!(view.click_event(&id));
        assert!(view.delete_event());
        assert!(view.state().events.is_empty());

        assert!(!view.click_event("missing"));
    }

    #[test]
    fn deleting_a_person_from_the_sidebar_cascades() {
        let mut view = view();
        add_event(&mut view, date(2024, 6, 3), date(2024, 6, 4), Location::Remote);

        assert!(view.click_person("1"));
        assert!(view.delete_person());

        assert!(view.state().events.is_empty());
        assert_eq!(view.state().current_user().unwrap().id, "2");
    }

    #[test]
    fn cancel_dispatches_nothing() {
        let mut view = view();
        let before = view.state().clone();

        view.click_day(date(2024, 6, 3));
        view.cancel_event();
        view.open_add_person();
        view.cancel_person();
        view.click_add_holiday(date(2024, 6, 3));
        view.cancel_holiday();

        assert_eq!(view.state(), &before);
        assert!(!view.submit_holiday());
        assert!(!view.submit_event().unwrap());
    }

    #[test]
    fn filter_popover_and_sidebar_toggle() {
        let mut view = view();
        assert!(!view.is_filter_open());
        view.toggle_filter_popover();
        assert!(view.is_filter_open());

        view.toggle_sidebar();
        assert!(!view.state().is_sidebar_open);
    }

    #[test]
    fn days_mark_today_from_the_clock() {
        let view = view();
        let days = view.days();
        assert_eq!(days.iter().filter(|d| d.is_today).count(), 1);
        assert!(days.iter().any(|d| d.is_today && d.date == date(2024, 6, 11)));
    }
}
