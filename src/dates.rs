//! Friendly date input for the session: ISO keys, natural language and
//! durations for event end dates.

use anyhow::{Context, Result};
use chrono::{Days, Duration, NaiveDate};
use vacal_core::date::parse_date;

/// Parse `YYYY-MM-DD` or natural language ("tomorrow", "jun 11").
pub fn parse_day(input: &str) -> Result<NaiveDate> {
    if let Ok(date) = parse_date(input) {
        return Ok(date);
    }

    let expanded = expand_abbreviations(input);
    let dt = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;

    Ok(dt.date())
}

/// Parse an end date: a whole-day duration counted from `start` ("3 days"
/// ends two days after start), or any date `parse_day` understands.
pub fn parse_end(input: &str, start: NaiveDate) -> Result<NaiveDate> {
    if let Ok(end) = try_apply_duration(start, input) {
        return Ok(end);
    }

    let cleaned = input
        .strip_prefix("until ")
        .or_else(|| input.strip_prefix("to "))
        .unwrap_or(input);

    parse_day(cleaned)
}

fn try_apply_duration(start: NaiveDate, input: &str) -> Result<NaiveDate> {
    let compact: String = input.split_whitespace().collect();
    let std_dur = humantime::parse_duration(&compact).map_err(|e| anyhow::anyhow!("{}", e))?;
    let chrono_dur = Duration::from_std(std_dur).context("Duration too large")?;

    if chrono_dur.num_days() < 1 || chrono_dur != Duration::days(chrono_dur.num_days()) {
        anyhow::bail!("Vacations last whole days, got \"{}\"", input);
    }

    // The end date is inclusive, so one day ends on the start date.
    let extra = u64::try_from(chrono_dur.num_days() - 1).context("Duration too large")?;
    start
        .checked_add_days(Days::new(extra))
        .context("Duration too large")
}

/// Expand common abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    let abbrevs = [
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thur", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    let lower = input.to_lowercase();
    lower
        .split_whitespace()
        .map(|word| {
            abbrevs
                .iter()
                .find(|(abbr, _)| *abbr == word)
                .map(|(_, full)| *full)
                .unwrap_or(word)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // --- parse_day ---

    #[test]
    fn parse_day_accepts_iso_keys() {
        assert_eq!(parse_day("2024-06-11").unwrap(), date(2024, 6, 11));
    }

    #[test]
    fn parse_day_natural_language() {
        assert!(parse_day("tomorrow").is_ok());
    }

    #[test]
    fn parse_day_invalid_input() {
        assert!(parse_day("not a date at all xyz").is_err());
    }

    // --- expand_abbreviations ---

    #[test]
    fn expand_day_and_month_abbreviations() {
        assert_eq!(expand_abbreviations("jun 11"), "june 11");
        assert_eq!(expand_abbreviations("Sept 5"), "september 5");
        assert_eq!(expand_abbreviations("next fri"), "next friday");
        assert_eq!(expand_abbreviations("tomorrow"), "tomorrow");
    }

    // --- parse_end ---

    #[test]
    fn parse_end_counts_inclusive_days() {
        let start = date(2024, 6, 10);
        assert_eq!(parse_end("3days", start).unwrap(), date(2024, 6, 12));
        assert_eq!(parse_end("3 days", start).unwrap(), date(2024, 6, 12));
        assert_eq!(parse_end("1day", start).unwrap(), start);
        assert_eq!(parse_end("1week", start).unwrap(), date(2024, 6, 16));
    }

    #[test]
    fn parse_end_rejects_partial_days() {
        let start = date(2024, 6, 10);
        assert!(try_apply_duration(start, "2h").is_err());
        assert!(try_apply_duration(start, "1day 2h").is_err());
    }

    #[test]
    fn parse_end_falls_back_to_dates() {
        let start = date(2024, 6, 10);
        assert_eq!(parse_end("2024-06-14", start).unwrap(), date(2024, 6, 14));
        assert_eq!(parse_end("until 2024-06-14", start).unwrap(), date(2024, 6, 14));
    }
}
