use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use dayplan_core::date_grid::{CalendarView, format_month_label, format_week_label};
use dayplan_core::search::filter_events;

use crate::client::Client;
use crate::render::Render;

pub async fn run(client: &Client, term: &str, date: NaiveDate, view: CalendarView) -> Result<()> {
    let events = client.list_events().await?;
    let found = filter_events(&events, term, date, view);

    let label = match view {
        CalendarView::Week => format_week_label(date),
        CalendarView::Month => format_month_label(date),
    };
    println!("{}", label.bold());

    if found.is_empty() {
        println!("{}", "검색 결과가 없습니다.".dimmed());
        return Ok(());
    }

    for event in found {
        println!(
            "{} {} {}",
            event.date.dimmed(),
            event.render(),
            format!("#{}", event.id).dimmed()
        );
        if !event.description.is_empty() {
            println!("           {}", event.description);
        }
    }

    Ok(())
}
