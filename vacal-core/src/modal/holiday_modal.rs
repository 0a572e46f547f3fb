use chrono::NaiveDate;

use crate::holiday::Holiday;
use crate::store::{Action, State};

/// What confirming the holiday modal does. Decided when the modal opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HolidayMode {
    Add,
    Remove(Holiday),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayPrompt {
    pub date: NaiveDate,
    pub mode: HolidayMode,
}

impl HolidayPrompt {
    pub fn title(&self) -> &'static str {
        match self.mode {
            HolidayMode::Add => "Mark as Holiday",
            HolidayMode::Remove(_) => "Remove Holiday",
        }
    }

    pub fn message(&self) -> &'static str {
        match self.mode {
            HolidayMode::Add => {
                "Mark this date as a holiday? This will prevent any events from being added on this date."
            }
            HolidayMode::Remove(_) => "Are you sure you want to remove this holiday?",
        }
    }
}

/// Binary toggle: no holiday on the date means add, an existing one means remove.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayModal {
    prompt: Option<HolidayPrompt>,
}

impl HolidayModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.prompt.is_some()
    }

    pub fn open(&mut self, state: &State, date: NaiveDate) {
        let mode = match state.holiday_on(date) {
            Some(existing) => HolidayMode::Remove(existing.clone()),
            None => HolidayMode::Add,
        };
        self.prompt = Some(HolidayPrompt { date, mode });
    }

    pub fn prompt(&self) -> Option<&HolidayPrompt> {
        self.prompt.as_ref()
    }

    /// Toggle the holiday and close. New holidays are called `name`.
    pub fn submit(&mut self, name: &str) -> Option<Action> {
        let prompt = self.prompt.take()?;
        let action = match prompt.mode {
            HolidayMode::Add => Action::AddHoliday(Holiday::new(prompt.date, name)),
            HolidayMode::Remove(existing) => Action::DeleteHoliday(existing.id),
        };
        Some(action)
    }

    pub fn cancel(&mut self) {
        self.prompt = None;
    }
}
