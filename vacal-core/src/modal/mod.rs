//! Modal state machines for the event, holiday and person forms.
//!
//! A modal is either closed or open. Modals never touch the store: `submit`
//! and `delete` hand back the [`Action`](crate::store::Action) to dispatch and
//! return the modal to closed.

mod event_modal;
mod holiday_modal;
mod person_modal;

pub use event_modal::{EventForm, EventModal};
pub use holiday_modal::{HolidayMode, HolidayModal, HolidayPrompt};
pub use person_modal::{PersonForm, PersonModal};

/// Whether an open form creates a new entity or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode<T> {
    Create,
    Edit(T),
}

impl<T> FormMode<T> {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    /// The entity being edited.
    pub fn original(&self) -> Option<&T> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(original) => Some(original),
        }
    }

    /// Label of the submit button.
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Create",
            FormMode::Edit(_) => "Update",
        }
    }
}
