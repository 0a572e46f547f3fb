mod commands;
mod dates;
mod forms;
mod render;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vacal_core::config::VacalConfig;
use vacal_core::store::{State, Store};
use vacal_core::view::{CalendarView, Clock, SystemClock};

use crate::dates::parse_day;
use crate::session::Session;

#[derive(Parser)]
#[command(name = "vacal")]
#[command(about = "Plan team vacations on a month calendar, right in your terminal")]
struct Cli {
    /// Month to open on (any date inside it, e.g. "2024-06-01" or "next month")
    #[arg(long)]
    month: Option<String>,

    /// Start with the people sidebar closed
    #[arg(long)]
    no_sidebar: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = VacalConfig::load().context("Failed to load config")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log_level in config")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let month = match cli.month.as_deref() {
        Some(input) => parse_day(input)?,
        None => SystemClock.today(),
    };

    let mut state = State::seeded(month);
    state.is_sidebar_open = config.sidebar_open && !cli.no_sidebar;

    let view = CalendarView::new(Store::new(state), SystemClock, config.view_settings());
    Session::new(view).run()
}
