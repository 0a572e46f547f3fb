use anyhow::{Context, Result};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use tracing::debug;
use vacal_core::VacalError;
use vacal_core::event::VacationEvent;
use vacal_core::lookup::DayClick;

use crate::commands::pick;
use crate::dates::parse_day;
use crate::forms::{FormChoice, choose_action, confirm_holiday, fill_event_form};
use crate::render::render_day;
use crate::session::Session;

/// Click a day cell. Holidays get the removal prompt, other days a new event.
/// The day is listed first so `edit <n>` can follow.
pub fn click(session: &mut Session, input: &str) -> Result<()> {
    let day = parse_day(input)?;
    show(session, day);
    match session.view.click_day(day) {
        DayClick::Holiday(_) => holiday_prompt(session),
        DayClick::NewEvent(_) => event_form(session),
    }
}

/// Print a day with its visible events numbered, and remember them for `edit`.
pub fn list(session: &mut Session, input: &str) -> Result<()> {
    let day = parse_day(input)?;
    show(session, day);
    Ok(())
}

fn show(session: &mut Session, day: NaiveDate) {
    let state = session.view.state();
    let events: Vec<VacationEvent> = if state.holiday_on(day).is_some() {
        Vec::new()
    } else {
        state.events_on(day).into_iter().cloned().collect()
    };

    println!("{}", render_day(state, day, &events));
    session.listed = Some((day, events.into_iter().map(|e| e.id).collect()));
}

/// Open the n-th event of the last `events` listing.
pub fn edit(session: &mut Session, index: usize) -> Result<()> {
    let (_, ids) = session
        .listed
        .as_ref()
        .context("List a day first, e.g. `events 2024-06-11`")?;
    let event_id = pick(ids, index, "event")?.clone();

    if !session.view.click_event(&event_id) {
        anyhow::bail!("That event no longer exists");
    }
    event_form(session)
}

/// Drive the open event modal until it is submitted, deleted or cancelled.
fn event_form(session: &mut Session) -> Result<()> {
    let persons = session.view.state().persons.clone();

    loop {
        let Some(form) = session.view.event_modal_mut().form_mut() else {
            return Ok(());
        };
        let label = form.mode.submit_label();
        let editing = form.mode.is_edit();

        if let Err(e) = fill_event_form(form, &persons) {
            session.view.cancel_event();
            return Err(e);
        }

        let choice = match choose_action(label, editing) {
            Ok(choice) => choice,
            Err(e) => {
                session.view.cancel_event();
                return Err(e);
            }
        };
        debug!(?choice, "event form");

        match choice {
            FormChoice::Submit => match session.view.submit_event() {
                Ok(_) => return Ok(()),
                Err(VacalError::Validation(message)) => {
                    eprintln!("  {}", message.red());
                }
                Err(e) => {
                    session.view.cancel_event();
                    return Err(e.into());
                }
            },
            FormChoice::Delete => {
                session.view.delete_event();
                return Ok(());
            }
            FormChoice::Cancel => {
                session.view.cancel_event();
                return Ok(());
            }
        }
    }
}

/// Confirm or dismiss the open holiday modal.
pub(crate) fn holiday_prompt(session: &mut Session) -> Result<()> {
    let Some(prompt) = session.view.holiday_modal().prompt().cloned() else {
        return Ok(());
    };

    match confirm_holiday(&prompt) {
        Ok(true) => {
            session.view.submit_holiday();
            Ok(())
        }
        Ok(false) => {
            session.view.cancel_holiday();
            Ok(())
        }
        Err(e) => {
            session.view.cancel_holiday();
            Err(e)
        }
    }
}
