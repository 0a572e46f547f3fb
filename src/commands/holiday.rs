use anyhow::Result;

use crate::commands::day::holiday_prompt;
use crate::dates::parse_day;
use crate::session::Session;

/// The "+Holiday" button of a day cell.
pub fn mark(session: &mut Session, input: &str) -> Result<()> {
    let day = parse_day(input)?;
    if !session.view.click_add_holiday(day) {
        anyhow::bail!("{} is already a holiday; use `day {}` to remove it", day, day);
    }
    holiday_prompt(session)
}
