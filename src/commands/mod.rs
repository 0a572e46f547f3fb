pub mod day;
pub mod filter;
pub mod holiday;
pub mod month;
pub mod people;
pub mod state;

use anyhow::Result;
use clap::Subcommand;

use crate::session::Session;

/// Whether the session keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Redraw the calendar
    Show,
    /// Go to the previous month
    Prev,
    /// Go to the next month
    Next,
    /// Go to the current month
    Today,
    /// Click a day: opens a new event, or the holiday prompt on a holiday
    Day {
        /// YYYY-MM-DD or e.g. "jun 11", "tomorrow"
        #[arg(required = true, num_args = 1..)]
        date: Vec<String>,
    },
    /// List a day's events, numbered for `edit`
    Events {
        #[arg(required = true, num_args = 1..)]
        date: Vec<String>,
    },
    /// Edit the n-th event of the last listed day
    Edit { index: usize },
    /// Mark a day as holiday ("+Holiday")
    Holiday {
        #[arg(required = true, num_args = 1..)]
        date: Vec<String>,
    },
    /// List persons
    People,
    /// Add a person to the roster
    AddPerson,
    /// Edit the n-th person of the roster
    Person { index: usize },
    /// Show the person filter, or toggle the n-th person in it
    Filter { index: Option<usize> },
    /// Open or close the sidebar
    Sidebar,
    /// Print the current state as JSON
    State,
    /// Leave vacal
    #[command(alias = "exit")]
    Quit,
}

pub fn execute(session: &mut Session, command: SessionCommand) -> Result<Flow> {
    match command {
        SessionCommand::Show => {
            session.invalidate();
        }
        SessionCommand::Prev => month::previous(session),
        SessionCommand::Next => month::next(session),
        SessionCommand::Today => month::today(session),
        SessionCommand::Day { date } => day::click(session, &date.join(" "))?,
        SessionCommand::Events { date } => day::list(session, &date.join(" "))?,
        SessionCommand::Edit { index } => day::edit(session, index)?,
        SessionCommand::Holiday { date } => holiday::mark(session, &date.join(" "))?,
        SessionCommand::People => people::list(session),
        SessionCommand::AddPerson => people::add(session)?,
        SessionCommand::Person { index } => people::edit(session, index)?,
        SessionCommand::Filter { index } => filter::run(session, index)?,
        SessionCommand::Sidebar => session.view.toggle_sidebar(),
        SessionCommand::State => state::run(session)?,
        SessionCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Resolve a 1-based index typed by the user.
pub(crate) fn pick<'a, T>(items: &'a [T], index: usize, what: &str) -> Result<&'a T> {
    index
        .checked_sub(1)
        .and_then(|i| items.get(i))
        .ok_or_else(|| {
            tracing::warn!(index, what, "index out of range");
            anyhow::anyhow!("No {} #{} (there are {})", what, index, items.len())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    #[command(no_binary_name = true)]
    struct Line {
        #[command(subcommand)]
        command: SessionCommand,
    }

    fn parse(words: &[&str]) -> SessionCommand {
        Line::try_parse_from(words).unwrap().command
    }

    #[test]
    fn pick_is_one_based() {
        let items = ["a", "b"];
        assert_eq!(*pick(&items, 1, "item").unwrap(), "a");
        assert_eq!(*pick(&items, 2, "item").unwrap(), "b");
        assert!(pick(&items, 0, "item").is_err());
        assert!(pick(&items, 3, "item").is_err());
    }

    #[test]
    fn day_takes_free_form_dates() {
        match parse(&["day", "jun", "11"]) {
            SessionCommand::Day { date } => assert_eq!(date.join(" "), "jun 11"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn filter_index_is_optional() {
        assert!(matches!(parse(&["filter"]), SessionCommand::Filter { index: None }));
        assert!(matches!(parse(&["filter", "2"]), SessionCommand::Filter { index: Some(2) }));
    }

    #[test]
    fn exit_is_quit() {
        assert!(matches!(parse(&["exit"]), SessionCommand::Quit));
        assert!(matches!(parse(&["add-person"]), SessionCommand::AddPerson));
    }

    #[test]
    fn day_requires_a_date() {
        assert!(Line::try_parse_from(["day"]).is_err());
    }
}
