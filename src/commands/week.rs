use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;

use dayplan_core::date_grid::{CalendarView, format_week_label, week_dates};
use dayplan_core::search::filter_events;

use crate::client::Client;
use crate::commands::events_on;
use crate::render::render_day;

pub async fn run(client: &Client, date: NaiveDate) -> Result<()> {
    let events = client.list_events().await?;
    let visible = filter_events(&events, "", date, CalendarView::Week);
    let week = week_dates(date);

    // A week can span two months, each with its own holidays
    let mut holidays = client.holidays(week[0]).await?;
    if week[6].month() != week[0].month() {
        holidays.extend(client.holidays(week[6]).await?);
    }

    println!("{}", format_week_label(date).bold());

    for day in week {
        println!();
        println!(
            "{}",
            render_day(day, &events_on(&visible, day), holidays.get(&day).map(String::as_str))
        );
    }

    Ok(())
}
