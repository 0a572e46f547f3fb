use anyhow::{Context, Result};

use crate::session::Session;

/// Dump the current snapshot. Read-only: nothing is ever loaded back.
pub fn run(session: &Session) -> Result<()> {
    let json = serde_json::to_string_pretty(session.view.state())
        .context("Failed to serialize state")?;
    println!("{}", json);
    Ok(())
}
