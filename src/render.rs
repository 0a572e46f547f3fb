//! TUI rendering for vacal types.
//!
//! Extension traits and helpers that turn vacal-core state into colored
//! terminal output using owo_colors.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use vacal_core::date::{CalendarDay, WEEKDAY_LABELS, format_date, weeks};
use vacal_core::event::{Location, VacationEvent};
use vacal_core::person::{Person, parse_hex_color};
use vacal_core::store::State;

/// Width of one day cell, in characters.
const CELL_WIDTH: usize = 13;

/// Event lines shown in a cell before collapsing into "+n more".
const MAX_CELL_EVENTS: usize = 2;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Location {
    fn render(&self) -> String {
        paint_location(*self, &format!(" {} ", self))
    }
}

impl Render for Person {
    fn render(&self) -> String {
        paint_person(self, &self.name)
    }
}

/// One line of a day cell before colors are applied, so padding stays exact.
enum CellLine {
    DayNumber { text: String, current_month: bool, today: bool },
    Holiday(String),
    Event { text: String, color: Option<(u8, u8, u8)>, location: Location },
    More(String),
    Blank,
}

impl CellLine {
    fn paint(&self) -> String {
        match self {
            CellLine::DayNumber { text, today: true, .. } => text.bold().blue().to_string(),
            CellLine::DayNumber { text, current_month: false, .. } => text.dimmed().to_string(),
            CellLine::DayNumber { text, .. } => text.clone(),
            CellLine::Holiday(text) => text.green().bold().to_string(),
            CellLine::Event { text, color, location } => {
                let (bg_r, bg_g, bg_b) = hex_or_gray(location.colors().background);
                let (r, g, b) = color.unwrap_or_else(|| hex_or_gray(location.colors().text));
                text.truecolor(r, g, b).on_truecolor(bg_r, bg_g, bg_b).to_string()
            }
            CellLine::More(text) => text.dimmed().to_string(),
            CellLine::Blank => " ".repeat(CELL_WIDTH),
        }
    }
}

/// Month heading, weekday header and grid for the selected month.
pub fn render_month(state: &State, days: &[CalendarDay], label: &str) -> String {
    let mut lines = vec![label.bold().to_string()];

    let header: Vec<String> = WEEKDAY_LABELS
        .iter()
        .map(|day| fit(day, CELL_WIDTH).bold().to_string())
        .collect();
    lines.push(header.join("│"));
    lines.push(vec!["─".repeat(CELL_WIDTH); WEEKDAY_LABELS.len()].join("┼"));

    for week in weeks(days) {
        let cells: Vec<Vec<CellLine>> = week.iter().map(|day| cell_lines(state, day)).collect();
        let height = cells.iter().map(Vec::len).max().unwrap_or(1);

        for row in 0..height {
            let line: Vec<String> = cells
                .iter()
                .map(|cell| cell.get(row).unwrap_or(&CellLine::Blank).paint())
                .collect();
            lines.push(line.join("│"));
        }
        lines.push(vec!["─".repeat(CELL_WIDTH); week.len()].join("┼"));
    }

    lines.join("\n")
}

fn cell_lines(state: &State, day: &CalendarDay) -> Vec<CellLine> {
    let mut lines = vec![CellLine::DayNumber {
        text: fit(&day.date.format("%-d").to_string(), CELL_WIDTH),
        current_month: day.is_current_month,
        today: day.is_today,
    }];

    if let Some(holiday) = day.holiday.as_ref() {
        lines.push(CellLine::Holiday(fit(&holiday.name, CELL_WIDTH)));
        return lines;
    }

    for event in day.events.iter().take(MAX_CELL_EVENTS) {
        let person = state.person(&event.person_id);
        let name = person.map(|p| p.name.as_str()).unwrap_or("(unknown)");
        lines.push(CellLine::Event {
            text: fit(name, CELL_WIDTH),
            color: person.and_then(Person::rgb),
            location: event.location,
        });
    }
    if day.events.len() > MAX_CELL_EVENTS {
        let more = format!("+{} more", day.events.len() - MAX_CELL_EVENTS);
        lines.push(CellLine::More(fit(&more, CELL_WIDTH)));
    }

    lines
}

/// Current user header and the roster, numbered for `person <n>`.
pub fn render_sidebar(state: &State) -> String {
    let mut lines = Vec::new();

    match state.current_user() {
        Some(user) => lines.push(format!("{} {}", user.render().bold(), user.email.dimmed())),
        None => lines.push("(no current user)".dimmed().to_string()),
    }
    lines.push(String::new());
    lines.push("Persons".bold().to_string());

    if state.persons.is_empty() {
        lines.push("   No persons yet, use add-person".dimmed().to_string());
    }
    for (index, person) in state.persons.iter().enumerate() {
        lines.push(format!(
            "  {:>2}. {} {}",
            index + 1,
            person.render(),
            person.email.dimmed()
        ));
    }

    lines.join("\n")
}

/// The person-filter popover: one checkbox per person.
pub fn render_filter(state: &State) -> String {
    let mut lines = vec!["Filter by Person".bold().to_string()];

    for (index, person) in state.persons.iter().enumerate() {
        let mark = if state.is_filtered_by(&person.id) { "[x]" } else { "[ ]" };
        lines.push(format!("  {:>2}. {} {}", index + 1, mark, person.render()));
    }
    if state.selected_person_ids.is_empty() {
        lines.push("   (nothing checked: showing everyone)".dimmed().to_string());
    }

    lines.join("\n")
}

/// Detail for one day: its holiday, or its events numbered for `edit <n>`.
pub fn render_day(state: &State, date: NaiveDate, events: &[VacationEvent]) -> String {
    let mut lines = vec![date.format("%A %-d %B %Y").to_string().bold().to_string()];

    if let Some(holiday) = state.holiday_on(date) {
        lines.push(format!("   {}", holiday.name.green().bold()));
        return lines.join("\n");
    }

    if events.is_empty() {
        lines.push("   No events".dimmed().to_string());
    }
    for (index, event) in events.iter().enumerate() {
        lines.push(format!("  {:>2}. {}", index + 1, render_event(state, event)));
    }

    lines.join("\n")
}

pub fn render_event(state: &State, event: &VacationEvent) -> String {
    let who = match state.person(&event.person_id) {
        Some(person) => person.render(),
        None => "(unknown)".dimmed().to_string(),
    };
    let range = format!("{} → {}", format_date(event.start_date), format_date(event.end_date));
    format!("{} {} {}", who, range.dimmed(), event.location.render())
}

fn paint_person(person: &Person, text: &str) -> String {
    match person.rgb() {
        Some((r, g, b)) => text.truecolor(r, g, b).to_string(),
        None => text.to_string(),
    }
}

fn paint_location(location: Location, text: &str) -> String {
    let colors = location.colors();
    let (bg_r, bg_g, bg_b) = hex_or_gray(colors.background);
    let (r, g, b) = hex_or_gray(colors.text);
    text.truecolor(r, g, b).on_truecolor(bg_r, bg_g, bg_b).to_string()
}

fn hex_or_gray(hex: &str) -> (u8, u8, u8) {
    parse_hex_color(hex).unwrap_or((128, 128, 128))
}

/// Truncate or pad `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        let mut truncated: String = text.chars().take(width.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    } else {
        format!("{}{}", text, " ".repeat(width - count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vacal_core::holiday::Holiday;
    use vacal_core::store::Action;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fit_pads_and_truncates() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(fit("abcd", 4), "abcd");
    }

    #[test]
    fn month_has_a_row_per_week() {
        let state = State::seeded(date(2024, 6, 11));
        let days = state.calendar_days(date(2024, 6, 11));
        let rendered = render_month(&state, &days, "June 2024");

        assert!(rendered.contains("June 2024"));
        assert!(rendered.contains("Mon"));
        // 5 weeks, each at least a day-number line, plus dividers
        assert!(rendered.lines().count() >= 3 + 5 * 2);
    }

    #[test]
    fn holiday_cells_hide_events() {
        let state = State::seeded(date(2024, 6, 1))
            .reduce(Action::AddEvent(VacationEvent::new(
                "1".into(),
                date(2024, 6, 15),
                date(2024, 6, 15),
                Location::Doral,
            )))
            .reduce(Action::AddHoliday(Holiday::new(date(2024, 6, 15), "HOLIDAY")));
        let days = state.calendar_days(date(2024, 6, 1));
        let cell = days.iter().find(|d| d.date == date(2024, 6, 15)).unwrap();

        let lines = cell_lines(&state, cell);
        assert_eq!(lines.len(), 2);
        assert!(matches!(lines[1], CellLine::Holiday(_)));
    }

    #[test]
    fn holiday_cells_show_the_holiday_name() {
        let state = State::seeded(date(2024, 6, 1))
            .reduce(Action::AddHoliday(Holiday::new(date(2024, 6, 15), "Office closed")));
        let days = state.calendar_days(date(2024, 6, 1));
        let cell = days.iter().find(|d| d.date == date(2024, 6, 15)).unwrap();

        match &cell_lines(&state, cell)[1] {
            CellLine::Holiday(text) => assert_eq!(text, &fit("Office closed", CELL_WIDTH)),
            _ => panic!("expected a holiday line"),
        }
    }

    #[test]
    fn crowded_cells_collapse() {
        let mut state = State::seeded(date(2024, 6, 1));
        for _ in 0..4 {
            state = state.reduce(Action::AddEvent(VacationEvent::new(
                "2".into(),
                date(2024, 6, 3),
                date(2024, 6, 3),
                Location::Remote,
            )));
        }
        let days = state.calendar_days(date(2024, 6, 1));
        let cell = days.iter().find(|d| d.date == date(2024, 6, 3)).unwrap();

        let lines = cell_lines(&state, cell);
        assert_eq!(lines.len(), 1 + MAX_CELL_EVENTS + 1);
        assert!(matches!(lines.last(), Some(CellLine::More(_))));
    }

    #[test]
    fn sidebar_lists_roster_in_order() {
        let state = State::seeded(date(2024, 6, 1));
        let rendered = render_sidebar(&state);
        let john = rendered.find("john@example.com").unwrap();
        let jane = rendered.find("jane@example.com").unwrap();
        assert!(john < jane);
    }

    #[test]
    fn filter_marks_checked_persons() {
        let state = State::seeded(date(2024, 6, 1)).reduce(Action::TogglePersonFilter("2".into()));
        let rendered = render_filter(&state);
        assert!(rendered.contains("[ ]"));
        assert!(rendered.contains("[x]"));
        assert!(!rendered.contains("showing everyone"));
    }
}
