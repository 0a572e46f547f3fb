use anyhow::Result;

use crate::commands::pick;
use crate::session::Session;

/// Without an index, open or close the popover. With one, toggle that person.
pub fn run(session: &mut Session, index: Option<usize>) -> Result<()> {
    match index {
        None => {
            session.view.toggle_filter_popover();
            session.invalidate();
        }
        Some(index) => {
            let person_id = pick(&session.view.state().persons, index, "person")?.id.clone();
            session.view.toggle_person_filter(&person_id);
        }
    }
    Ok(())
}
