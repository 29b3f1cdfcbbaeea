//! Search and view filtering for event lists.

use chrono::NaiveDate;

use crate::date_grid::{CalendarView, is_date_in_range, parse_date, view_range};
use crate::event::Event;

/// Whether the title, description or location contains `term`, ignoring case.
/// An empty term matches everything.
pub fn matches_term(event: &Event, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    [&event.title, &event.description, &event.location]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

/// Events inside `[start, end]`. Events with a malformed date are dropped.
pub fn events_in_range(events: &[Event], start: NaiveDate, end: NaiveDate) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| parse_date(&event.date).is_some_and(|d| is_date_in_range(d, start, end)))
        .collect()
}

/// Events matching `term` and visible in `view` around `current_date`,
/// in their original order.
pub fn filter_events<'a>(
    events: &'a [Event],
    term: &str,
    current_date: NaiveDate,
    view: CalendarView,
) -> Vec<&'a Event> {
    let (start, end) = view_range(current_date, view);

    events_in_range(events, start, end)
        .into_iter()
        .filter(|event| matches_term(event, term))
        .collect()
}
