use anyhow::Result;
use owo_colors::OwoColorize;
use vacal_core::VacalError;

use crate::commands::pick;
use crate::forms::{FormChoice, choose_action, fill_person_form};
use crate::render::Render;
use crate::session::Session;

pub fn list(session: &Session) {
    let persons = &session.view.state().persons;
    if persons.is_empty() {
        println!("{}", "No persons yet. Use `add-person`.".dimmed());
        return;
    }
    for (index, person) in persons.iter().enumerate() {
        println!("  {:>2}. {} {}", index + 1, person.render(), person.email.dimmed());
    }
}

pub fn add(session: &mut Session) -> Result<()> {
    session.view.open_add_person();
    person_form(session)
}

pub fn edit(session: &mut Session, index: usize) -> Result<()> {
    let person_id = pick(&session.view.state().persons, index, "person")?.id.clone();
    session.view.click_person(&person_id);
    person_form(session)
}

fn person_form(session: &mut Session) -> Result<()> {
    loop {
        let Some(form) = session.view.person_modal_mut().form_mut() else {
            return Ok(());
        };
        let label = form.mode.submit_label();
        let editing = form.mode.is_edit();

        let choice = fill_person_form(form).and_then(|()| choose_action(label, editing));
        let choice = match choice {
            Ok(choice) => choice,
            Err(e) => {
                session.view.cancel_person();
                return Err(e);
            }
        };

        match choice {
            FormChoice::Submit => match session.view.submit_person() {
                Ok(_) => return Ok(()),
                Err(VacalError::Validation(message)) => {
                    eprintln!("  {}", message.red());
                }
                Err(e) => {
                    session.view.cancel_person();
                    return Err(e.into());
                }
            },
            FormChoice::Delete => {
                session.view.delete_person();
                return Ok(());
            }
            FormChoice::Cancel => {
                session.view.cancel_person();
                return Ok(());
            }
        }
    }
}
