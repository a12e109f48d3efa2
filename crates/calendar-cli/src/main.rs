mod render;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use calendar_engine::{
    parse_events, today_banner, AgendaPanel, CalendarCursor, MonthView, SelectionState, YearMonth,
};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::render::{render_text, Snapshot};

/// Render a month calendar with events and birthdays from a JSON file.
#[derive(Parser, Debug)]
#[command(name = "calendar", version, about, long_about = None)]
struct Cli {
    /// JSON array of events (`date`, optional `time`, `title`, `type`).
    #[arg(long, env = "CALENDAR_EVENTS", default_value = "events.json")]
    events: PathBuf,

    /// Month to display as YYYY-MM. Defaults to the month of "now".
    #[arg(long, value_parser = parse_year_month)]
    month: Option<YearMonth>,

    /// Move the displayed month back N months.
    #[arg(long, default_value_t = 0)]
    prev: u16,

    /// Move the displayed month forward N months.
    #[arg(long, default_value_t = 0)]
    next: u16,

    /// Selected day as YYYY-MM-DD.
    #[arg(long, value_parser = parse_date)]
    select: Option<NaiveDate>,

    /// Wall-clock "now" as YYYY-MM-DDTHH:MM:SS. Defaults to the system clock in `--tz`.
    #[arg(long, value_parser = parse_now)]
    now: Option<NaiveDateTime>,

    /// IANA timezone used to read the system clock.
    #[arg(long, env = "CALENDAR_TZ", default_value = "UTC", value_parser = parse_tz)]
    tz: Tz,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_year_month(s: &str) -> Result<YearMonth, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn parse_now(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| format!("expected YYYY-MM-DDTHH:MM:SS: {e}"))
}

fn parse_tz(s: &str) -> Result<Tz, String> {
    s.parse::<Tz>()
        .map_err(|_| format!("unknown IANA timezone '{s}'"))
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let raw = fs::read_to_string(&cli.events)
        .with_context(|| format!("failed to read events from {}", cli.events.display()))?;
    let events = parse_events(&raw)
        .with_context(|| format!("failed to parse events in {}", cli.events.display()))?;

    let now = cli
        .now
        .unwrap_or_else(|| Utc::now().with_timezone(&cli.tz).naive_local());

    let mut cursor = cli
        .month
        .map(CalendarCursor::new)
        .unwrap_or_else(|| CalendarCursor::at(now));
    cursor.shift(i32::from(cli.next) - i32::from(cli.prev));

    let selection = SelectionState::from(cli.select);

    tracing::info!(
        month = %cursor.year_month(),
        events = events.len(),
        %now,
        "rendering calendar"
    );

    let snapshot = Snapshot {
        banner: today_banner(now),
        agenda: AgendaPanel::build(&events, &cursor, now),
        month: MonthView::build(&events, &cursor, &selection, now),
    };

    match cli.format {
        OutputFormat::Text => print!("{}", render_text(&snapshot)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
    }
    Ok(())
}
