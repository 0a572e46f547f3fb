//! Persons on the roster.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::new_id;

/// Avatar used when a person is created without one.
pub const DEFAULT_IMAGE_URL: &str = "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";

/// Display color of a new person.
pub const DEFAULT_COLOR: &str = "#000000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub email: String,
    /// `#RRGGBB`
    pub color: String,
    pub image_url: String,
}

impl Person {
    /// Create a person with a fresh id.
    pub fn new(name: String, email: String, color: String, image_url: String) -> Self {
        Person {
            id: new_id(),
            name,
            email,
            color,
            image_url,
        }
    }

    /// Display color as an RGB triple, if it is a valid `#RRGGBB` string.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex_color(&self.color)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Parse `#RRGGBB` (case-insensitive) into its components.
pub fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
