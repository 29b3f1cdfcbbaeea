use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use dayplan_core::date_grid::{CalendarView, format_month_label, month_grid};
use dayplan_core::search::filter_events;

use crate::client::Client;
use crate::commands::events_on;
use crate::render::{render_day, render_month_grid};

pub async fn run(client: &Client, date: NaiveDate) -> Result<()> {
    let events = client.list_events().await?;
    let holidays = client.holidays(date).await?;
    let visible = filter_events(&events, "", date, CalendarView::Month);

    println!("{}", format_month_label(date).bold());
    println!();
    println!("{}", render_month_grid(date, &month_grid(date), &visible, &holidays));

    // Agenda below the grid: every day with events or a holiday
    let mut days: Vec<NaiveDate> = visible
        .iter()
        .filter_map(|e| NaiveDate::parse_from_str(&e.date, "%Y-%m-%d").ok())
        .chain(holidays.keys().copied())
        .collect();
    days.sort();
    days.dedup();

    if days.is_empty() {
        println!();
        println!("{}", "이번 달에는 일정이 없습니다.".dimmed());
        return Ok(());
    }

    for day in days {
        println!();
        println!(
            "{}",
            render_day(day, &events_on(&visible, day), holidays.get(&day).map(String::as_str))
        );
    }

    Ok(())
}
