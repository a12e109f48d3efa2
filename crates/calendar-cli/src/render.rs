//! Plain-text drawing of the calendar snapshot.

use std::fmt::Write;

use calendar_engine::{AgendaPanel, DayCell, MonthView};
use serde::Serialize;

/// Everything the shell shows for one render.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub banner: String,
    pub agenda: AgendaPanel,
    pub month: MonthView,
}

const BLANK_CELL: &str = "     ";

pub fn render_text(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", snapshot.banner);
    out.push('\n');
    render_agenda(&mut out, &snapshot.agenda);
    out.push('\n');
    render_month(&mut out, &snapshot.month);
    out
}

fn render_agenda(out: &mut String, agenda: &AgendaPanel) {
    let _ = writeln!(out, "{}", agenda.heading);
    if agenda.month_events.is_empty() {
        let _ = writeln!(out, "  No events this month");
    }
    for entry in &agenda.month_events {
        let passed = if entry.passed { " (passed)" } else { "" };
        let _ = writeln!(out, "  {}{passed}", entry.label);
    }

    out.push('\n');
    let _ = writeln!(out, "Today's Birthdays");
    if agenda.birthdays_today.is_empty() {
        let _ = writeln!(out, "  No birthdays today");
    }
    for title in &agenda.birthdays_today {
        let _ = writeln!(out, "  {title}");
    }
}

fn render_month(out: &mut String, month: &MonthView) {
    let _ = writeln!(out, "{:^35}", month.title);

    let header: String = month
        .weekdays
        .iter()
        .map(|label| format!("{label:>4} "))
        .collect();
    let _ = writeln!(out, "{}", header.trim_end());

    for week in month.weeks() {
        let row: String = week
            .iter()
            .map(|slot| slot.map_or_else(|| BLANK_CELL.to_string(), day_cell))
            .collect();
        let _ = writeln!(out, "{}", row.trim_end());
    }

    let busy: Vec<&DayCell> = month.days.iter().filter(|c| !c.events.is_empty()).collect();
    if !busy.is_empty() {
        out.push('\n');
        for cell in busy {
            let labels: Vec<&str> = cell.events.iter().map(|e| e.label.as_str()).collect();
            let _ = writeln!(out, "{:>4}  {}", cell.day, labels.join(", "));
        }
    }
}

/// Five columns: `[`/space, two-digit day, `]`/space, `*` when today.
fn day_cell(cell: &DayCell) -> String {
    let (open, close) = if cell.is_selected { ('[', ']') } else { (' ', ' ') };
    let today = if cell.is_today { '*' } else { ' ' };
    format!("{open}{:>2}{close}{today}", cell.day)
}
