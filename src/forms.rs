//! Interactive forms backing the event, person and holiday modals.

use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Select};
use owo_colors::OwoColorize;
use vacal_core::date::format_date;
use vacal_core::event::Location;
use vacal_core::modal::{EventForm, HolidayPrompt, PersonForm};
use vacal_core::person::Person;

use crate::dates::{parse_day, parse_end};

/// What the user chose at the bottom of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormChoice {
    Submit,
    Delete,
    Cancel,
}

/// Submit / Delete (when editing) / Cancel.
pub fn choose_action(submit_label: &str, editing: bool) -> Result<FormChoice> {
    let mut choices = vec![(submit_label, FormChoice::Submit)];
    if editing {
        choices.push(("Delete", FormChoice::Delete));
    }
    choices.push(("Cancel", FormChoice::Cancel));

    let labels: Vec<&str> = choices.iter().map(|(label, _)| *label).collect();
    let selection = Select::new()
        .with_prompt("  Action")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(choices.get(selection).map_or(FormChoice::Cancel, |(_, choice)| *choice))
}

pub fn fill_event_form(form: &mut EventForm, persons: &[Person]) -> Result<()> {
    println!("{}", form.title().bold());

    if persons.is_empty() {
        anyhow::bail!("Add a person before scheduling a vacation");
    }
    let names: Vec<&str> = persons.iter().map(|p| p.name.as_str()).collect();
    let current = form
        .person_id
        .as_ref()
        .and_then(|id| persons.iter().position(|p| &p.id == id))
        .unwrap_or(0);
    let selection = Select::new()
        .with_prompt("  Person")
        .items(&names)
        .default(current)
        .interact()?;
    form.person_id = persons.get(selection).map(|p| p.id.clone());

    form.start_date = prompt_with_retry("  Start date", &format_date(form.start_date), parse_day)?;
    let start = form.start_date;
    form.end_date = prompt_with_retry(
        "  End date (or duration, e.g. 3 days)",
        &format_date(form.end_date.max(start)),
        |input| parse_end(input, start),
    )?;

    let locations: Vec<String> = Location::ALL.iter().map(Location::to_string).collect();
    let current = Location::ALL
        .iter()
        .position(|l| *l == form.location)
        .unwrap_or(0);
    let selection = Select::new()
        .with_prompt("  Location")
        .items(&locations)
        .default(current)
        .interact()?;
    form.location = Location::ALL.get(selection).copied().unwrap_or_default();

    Ok(())
}

pub fn fill_person_form(form: &mut PersonForm) -> Result<()> {
    println!("{}", form.title().bold());

    form.name = prompt_text("  Name", &form.name)?;
    form.email = prompt_text("  Email", &form.email)?;
    form.color = prompt_text("  Color (#RRGGBB)", &form.color)?;

    Ok(())
}

/// Show the holiday prompt and ask for confirmation.
pub fn confirm_holiday(prompt: &HolidayPrompt) -> Result<bool> {
    println!("{} {}", prompt.title().bold(), format_date(prompt.date).dimmed());
    println!("  {}", prompt.message());

    Ok(Confirm::new()
        .with_prompt(format!("  {}?", prompt.title()))
        .default(true)
        .interact()?)
}

fn prompt_text(prompt: &str, current: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<F>(prompt: &str, initial: &str, parse: F) -> Result<NaiveDate>
where
    F: Fn(&str) -> Result<NaiveDate>,
{
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .with_initial_text(initial)
            .interact_text()?;
        match parse(input.trim()) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}
