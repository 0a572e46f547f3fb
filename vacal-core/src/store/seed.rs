//! Roster every session starts with.

use crate::person::{DEFAULT_IMAGE_URL, Person};

const JANE_IMAGE_URL: &str = "https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";

pub fn seed_persons() -> Vec<Person> {
    vec![
        Person {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            color: "#EF4444".to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
        },
        Person {
            id: "2".to_string(),
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            color: "#3B82F6".to_string(),
            image_url: JANE_IMAGE_URL.to_string(),
        },
    ]
}
