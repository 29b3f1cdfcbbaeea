//! Terminal rendering for dayplan views.
//!
//! Extension traits and helpers that turn core types into colored text
//! using owo_colors.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;

use dayplan_core::Event;
use dayplan_core::constants::notification_label;
use dayplan_core::date_grid::{WeekRow, format_date};

pub const WEEK_DAYS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let time = format!("{}-{}", self.start_time, self.end_time);
        let mut line = format!("{} {}", time.dimmed(), self.title.bold());

        if !self.location.is_empty() {
            line.push_str(&format!(" @ {}", self.location));
        }
        if !self.category.is_empty() {
            line.push_str(&format!(" {}", format!("[{}]", self.category).cyan()));
        }
        if self.is_repeating() {
            let repeat = format!("↻ {}{}마다", self.repeat.interval, self.repeat.kind.label());
            line.push_str(&format!(" {}", repeat.yellow()));
        }
        if let Some(label) = notification_label(self.notification_time) {
            line.push_str(&format!(" {}", format!("🔔 {}", label).dimmed()));
        }

        line
    }
}

/// A conflicting event as shown in the overlap warning
pub fn render_conflict(event: &Event) -> String {
    format!(
        "{} ({} {}-{})",
        event.title, event.date, event.start_time, event.end_time
    )
}

/// Render a month grid: one line per week, holidays in red, days with events
/// marked with a dot.
pub fn render_month_grid(
    month: NaiveDate,
    grid: &[WeekRow],
    events: &[&Event],
    holidays: &BTreeMap<NaiveDate, String>,
) -> String {
    let header = WEEK_DAYS
        .iter()
        .map(|d| format!("{:^4}", d))
        .collect::<Vec<_>>()
        .join("");
    let mut lines = vec![header.dimmed().to_string()];

    for week in grid {
        let cells: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                None => "    ".to_string(),
                Some(day) => {
                    let date_key = format_date(month, Some(*day));
                    let has_events = events.iter().any(|e| e.date == date_key);
                    let marker = if has_events { "•" } else { " " };
                    let number = format!("{:>3}", day);
                    let is_holiday = month
                        .with_day(*day)
                        .is_some_and(|d| holidays.contains_key(&d));

                    if is_holiday {
                        format!("{}{}", number.red(), marker)
                    } else {
                        format!("{}{}", number, marker)
                    }
                }
            })
            .collect();
        lines.push(cells.join(""));
    }

    lines.join("\n")
}

/// Render one day of an agenda: date heading, holiday, then its events
pub fn render_day(date: NaiveDate, events: &[&Event], holiday: Option<&str>) -> String {
    let weekday = WEEK_DAYS[date.weekday().num_days_from_sunday() as usize];
    let mut heading = format!("{}/{} ({})", date.month(), date.day(), weekday)
        .bold()
        .to_string();
    if let Some(name) = holiday {
        heading.push_str(&format!(" {}", name.red()));
    }

    let mut lines = vec![heading];
    for event in events {
        lines.push(format!("  {}", event.render()));
    }

    lines.join("\n")
}
