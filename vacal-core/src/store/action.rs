use chrono::NaiveDate;

use crate::event::VacationEvent;
use crate::holiday::Holiday;
use crate::person::Person;

/// Every mutation the store understands. Each maps to one reducer arm.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddPerson(Person),
    UpdatePerson(Person),
    /// Also removes every event of that person.
    DeletePerson(String),
    AddEvent(VacationEvent),
    UpdateEvent(VacationEvent),
    DeleteEvent(String),
    AddHoliday(Holiday),
    DeleteHoliday(String),
    SetSelectedDate(NaiveDate),
    ToggleSidebar,
    TogglePersonFilter(String),
}

impl Action {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddPerson(_) => "add_person",
            Action::UpdatePerson(_) => "update_person",
            Action::DeletePerson(_) => "delete_person",
            Action::AddEvent(_) => "add_event",
            Action::UpdateEvent(_) => "update_event",
            Action::DeleteEvent(_) => "delete_event",
            Action::AddHoliday(_) => "add_holiday",
            Action::DeleteHoliday(_) => "delete_holiday",
            Action::SetSelectedDate(_) => "set_selected_date",
            Action::ToggleSidebar => "toggle_sidebar",
            Action::TogglePersonFilter(_) => "toggle_person_filter",
        }
    }
}
