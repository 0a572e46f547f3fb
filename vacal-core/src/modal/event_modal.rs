use chrono::NaiveDate;

use crate::error::{VacalError, VacalResult};
use crate::event::{Location, VacationEvent};
use crate::modal::FormMode;
use crate::store::{Action, State};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventForm {
    pub mode: FormMode<VacationEvent>,
    pub person_id: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: Location,
}

impl EventForm {
    /// Blank form for `day`, preselecting the first person on the roster.
    pub fn create(state: &State, day: NaiveDate, location: Location) -> Self {
        EventForm {
            mode: FormMode::Create,
            person_id: state.current_user().map(|p| p.id.clone()),
            start_date: day,
            end_date: day,
            location,
        }
    }

    pub fn edit(event: &VacationEvent) -> Self {
        EventForm {
            mode: FormMode::Edit(event.clone()),
            person_id: Some(event.person_id.clone()),
            start_date: event.start_date,
            end_date: event.end_date,
            location: event.location,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.mode.is_edit() { "Edit Event" } else { "New Event" }
    }

    fn to_action(&self) -> VacalResult<Action> {
        let person_id = self
            .person_id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| VacalError::Validation("Choose a person for the event".into()))?;

        let action = match &self.mode {
            FormMode::Create => Action::AddEvent(VacationEvent::new(
                person_id,
                self.start_date,
                self.end_date,
                self.location,
            )),
            FormMode::Edit(original) => Action::UpdateEvent(VacationEvent {
                id: original.id.clone(),
                person_id,
                start_date: self.start_date,
                end_date: self.end_date,
                location: self.location,
            }),
        };
        Ok(action)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventModal {
    form: Option<EventForm>,
}

impl EventModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn open_create(&mut self, state: &State, day: NaiveDate, location: Location) {
        self.form = Some(EventForm::create(state, day, location));
    }

    pub fn open_edit(&mut self, event: &VacationEvent) {
        self.form = Some(EventForm::edit(event));
    }

    pub fn form(&self) -> Option<&EventForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut EventForm> {
        self.form.as_mut()
    }

    /// Insert or update depending on the mode, then close.
    /// An invalid form stays open; a closed modal yields nothing.
    pub fn submit(&mut self) -> VacalResult<Option<Action>> {
        let Some(form) = &self.form else {
            return Ok(None);
        };
        let action = form.to_action()?;
        self.form = None;
        Ok(Some(action))
    }

    /// Only available while editing; a create-mode form stays open.
    pub fn delete(&mut self) -> Option<Action> {
        let id = self.form.as_ref()?.mode.original()?.id.clone();
        self.form = None;
        Some(Action::DeleteEvent(id))
    }

    pub fn cancel(&mut self) {
        self.form = None;
    }
}
