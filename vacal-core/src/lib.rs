//! Core of vacal, an in-memory vacation calendar.
//!
//! - `person`, `event`, `holiday`: the domain types
//! - `date`: month grids and date keys
//! - `lookup`: which events and holidays show on a day
//! - `store`: state snapshot, reducer and subscribers
//! - `modal`: event/holiday/person form state machines
//! - `view`: the headless calendar controller tying them together

pub mod config;
pub mod date;
pub mod error;
pub mod event;
pub mod holiday;
pub mod lookup;
pub mod modal;
pub mod person;
pub mod store;
pub mod view;

pub use error::{VacalError, VacalResult};

/// Fresh random id for a new entity.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
