//! Vacation events and their location tags.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::VacalError;
use crate::new_id;

/// A person's absence over an inclusive range of calendar days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationEvent {
    pub id: String,
    pub person_id: String,
    pub start_date: NaiveDate,
    /// Inclusive. Expected to be on or after `start_date` but not enforced.
    pub end_date: NaiveDate,
    pub location: Location,
}

impl VacationEvent {
    pub fn new(
        person_id: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        location: Location,
    ) -> Self {
        VacationEvent {
            id: new_id(),
            person_id,
            start_date,
            end_date,
            location,
        }
    }

    /// Whether `day` falls within `[start_date, end_date]`.
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }
}

/// Where a vacation event takes place. Only used for color coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    #[default]
    SouthMiami,
    CalleOcho,
    BirdRoad,
    Doral,
    Remote,
}

/// Background/text pair used to draw an event chip, as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationColors {
    pub background: &'static str,
    pub text: &'static str,
}

impl Location {
    pub const ALL: [Location; 5] = [
        Location::SouthMiami,
        Location::CalleOcho,
        Location::BirdRoad,
        Location::Doral,
        Location::Remote,
    ];

    /// Kebab-case key, e.g. `south-miami`.
    pub fn key(self) -> &'static str {
        match self {
            Location::SouthMiami => "south-miami",
            Location::CalleOcho => "calle-ocho",
            Location::BirdRoad => "bird-road",
            Location::Doral => "doral",
            Location::Remote => "remote",
        }
    }

    pub fn colors(self) -> LocationColors {
        let (background, text) = match self {
            Location::SouthMiami => ("#DBEAFE", "#1D4ED8"),
            Location::CalleOcho => ("#FFEDD5", "#C2410C"),
            Location::BirdRoad => ("#F3E8FF", "#7E22CE"),
            Location::Doral => ("#DCFCE7", "#15803D"),
            Location::Remote => ("#F3F4F6", "#374151"),
        };
        LocationColors { background, text }
    }
}

impl fmt::Display for Location {
    /// Human label, e.g. "south miami".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key().replace('-', " "))
    }
}

impl FromStr for Location {
    type Err = VacalError;

    /// Accepts the key or the label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(' ', "-");
        Location::ALL
            .into_iter()
            .find(|location| location.key() == normalized)
            .ok_or_else(|| VacalError::UnknownLocation(s.to_string()))
    }
}
