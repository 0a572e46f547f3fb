//! Holidays: single dates that block event entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::new_id;

/// Name given to holidays marked from the calendar.
pub const DEFAULT_HOLIDAY_NAME: &str = "HOLIDAY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub id: String,
    pub date: NaiveDate,
    pub name: String,
}

impl Holiday {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Holiday {
            id: new_id(),
            date,
            name: name.into(),
        }
    }
}
