//! The interactive session: render, read a command, run it, repeat.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use dialoguer::Input;
use owo_colors::OwoColorize;
use tracing::{debug, info};
use vacal_core::view::CalendarView;

use crate::commands::{self, Flow, SessionCommand};
use crate::render::{render_filter, render_month, render_sidebar};

/// A session command line, parsed with clap without a binary name.
#[derive(Parser)]
#[command(no_binary_name = true, name = "command")]
struct CommandLine {
    #[command(subcommand)]
    command: SessionCommand,
}

pub struct Session {
    pub view: CalendarView,
    /// Event ids of the last listed day, addressed by `edit <n>`.
    pub listed: Option<(NaiveDate, Vec<String>)>,
    dirty: Rc<Cell<bool>>,
}

impl Session {
    pub fn new(mut view: CalendarView) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        view.store_mut().subscribe(move |_| flag.set(true));

        Session {
            view,
            listed: None,
            dirty,
        }
    }

    /// Ask for a redraw even though the store did not change.
    pub fn invalidate(&self) {
        self.dirty.set(true);
    }

    pub fn run(&mut self) -> Result<()> {
        info!(month = %self.view.month_label(), "session started");
        println!("{}", "Type `help` for commands.".dimmed());

        loop {
            if self.dirty.replace(false) {
                self.draw();
            }

            let line: String = Input::new()
                .with_prompt("vacal")
                .allow_empty(true)
                .interact_text()?;
            let words: Vec<&str> = line.split_whitespace().collect();
            if words.is_empty() {
                continue;
            }

            let command = match CommandLine::try_parse_from(words) {
                Ok(parsed) => parsed.command,
                Err(e) => {
                    // help output and usage errors alike
                    e.print()?;
                    continue;
                }
            };
            debug!(?command, "running");

            match commands::execute(self, command) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => return Ok(()),
                Err(e) => eprintln!("  {}", e.to_string().red()),
            }
        }
    }

    fn draw(&self) {
        let state = self.view.state();
        println!();
        if state.is_sidebar_open {
            println!("{}\n", render_sidebar(state));
        }
        if self.view.is_filter_open() {
            println!("{}\n", render_filter(state));
        }
        println!(
            "{}",
            render_month(state, &self.view.days(), &self.view.month_label())
        );
    }
}
