//! Colored terminal rendering of the event list.

use chrono::{NaiveDate, NaiveTime};
use eventsync_core::Event;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let tag = format!("#{}", self.id);
        let mut line = format!("  {} {} {}", format_time(self.time), self.title, tag.dimmed());
        if let Some(description) = &self.description {
            line.push_str(&format!("\n          {}", description.dimmed()));
        }
        line
    }
}

/// Render events grouped under day headings.
///
/// Expects `events` sorted by date and time.
pub fn render_events(events: &[Event], today: NaiveDate) -> String {
    if events.is_empty() {
        return "No events found".dimmed().to_string();
    }

    let mut lines = Vec::new();
    let mut current_date: Option<NaiveDate> = None;

    for event in events {
        if current_date != Some(event.date) {
            if current_date.is_some() {
                lines.push(String::new());
            }
            lines.push(format_date_label(event.date, today).bold().to_string());
            current_date = Some(event.date);
        }
        lines.push(event.render());
    }

    lines.join("\n")
}

/// Sort key used by every surface: by day, untimed events first.
pub fn sort_events(events: &mut [Event]) {
    events.sort_by(|a, b| (a.date, a.time).cmp(&(b.date, b.time)));
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        _ => date.format("%a %b %-d %Y").to_string(),
    }
}

/// Format the time of an event (e.g. "15:00" or "all-day")
fn format_time(time: Option<NaiveTime>) -> String {
    match time {
        Some(t) => format!("{:>7}", t.format("%H:%M")),
        None => "all-day".to_string(),
    }
}

/// One-line label used in pickers.
pub fn event_label(event: &Event) -> String {
    match event.time {
        Some(t) => format!("{} {} {}", event.date, t.format("%H:%M"), event.title),
        None => format!("{} {}", event.date, event.title),
    }
}
