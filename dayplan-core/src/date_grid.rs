//! Day layout for week and month views.
//!
//! Weeks run Sunday to Saturday. A week is numbered within the month that
//! contains its Thursday, so the last days of one month can label as the
//! first week of the next.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// One row of a month grid: Sunday..Saturday, `None` outside the month.
pub type WeekRow = [Option<u32>; 7];

/// Which span of days a calendar view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Week,
    #[default]
    Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Gregorian days in `month` (1-12) of `year`. Months outside 1-12 have 0 days.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// The seven dates of the Sunday-first week containing `date`.
pub fn week_dates(date: NaiveDate) -> [NaiveDate; 7] {
    let sunday = date - Days::new(u64::from(date.weekday().num_days_from_sunday()));
    std::array::from_fn(|i| sunday + Days::new(i as u64))
}

/// Rows of day numbers for the month containing `date`.
pub fn month_grid(date: NaiveDate) -> Vec<WeekRow> {
    let first = first_of_month(date);
    let total_days = days_in_month(date.year(), date.month());
    let leading = first.weekday().num_days_from_sunday() as usize;

    let mut weeks = Vec::new();
    let mut row: WeekRow = [None; 7];
    let mut column = leading;

    for day in 1..=total_days {
        row[column] = Some(day);
        column += 1;
        if column == 7 {
            weeks.push(row);
            row = [None; 7];
            column = 0;
        }
    }
    if column > 0 {
        weeks.push(row);
    }

    weeks
}

/// `"YYYY년 M월 N주"`, numbered within the month of the week's Thursday.
pub fn format_week_label(date: NaiveDate) -> String {
    let thursday = week_dates(date)[4];
    let first = first_of_month(thursday);
    let first_thursday = 1 + (4 + 7 - first.weekday().num_days_from_sunday()) % 7;
    let week_number = (thursday.day() - first_thursday) / 7 + 1;

    format!(
        "{}년 {}월 {}주",
        thursday.year(),
        thursday.month(),
        week_number
    )
}

/// `"YYYY년 M월"`.
pub fn format_month_label(date: NaiveDate) -> String {
    format!("{}년 {}월", date.year(), date.month())
}

/// `YYYY-MM-DD`, optionally with the day of month replaced.
pub fn format_date(date: NaiveDate, day: Option<u32>) -> String {
    let day = day.unwrap_or_else(|| date.day());
    format!(
        "{}-{}-{}",
        date.year(),
        fill_zero(date.month(), 2),
        fill_zero(day, 2)
    )
}

/// Left-pad a number with zeros to `size` digits.
pub fn fill_zero(value: u32, size: usize) -> String {
    format!("{:0>size$}", value)
}

/// Inclusive range check.
pub fn is_date_in_range(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= date && date <= end
}

/// Events whose date falls on the given day of month.
pub fn events_for_day(events: &[Event], day: u32) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| parse_date(&event.date).is_some_and(|d| d.day() == day))
        .collect()
}

/// First and last date a view shows around `date`.
pub fn view_range(date: NaiveDate, view: CalendarView) -> (NaiveDate, NaiveDate) {
    match view {
        CalendarView::Week => {
            let week = week_dates(date);
            (week[0], week[6])
        }
        CalendarView::Month => {
            let first = first_of_month(date);
            let last = first
                .with_day(days_in_month(date.year(), date.month()))
                .unwrap_or(first);
            (first, last)
        }
    }
}

/// Move the view one step. Month moves land on the 1st.
pub fn navigate(date: NaiveDate, view: CalendarView, direction: Direction) -> NaiveDate {
    let moved = match (view, direction) {
        (CalendarView::Week, Direction::Next) => date.checked_add_days(Days::new(7)),
        (CalendarView::Week, Direction::Prev) => date.checked_sub_days(Days::new(7)),
        (CalendarView::Month, Direction::Next) => {
            first_of_month(date).checked_add_months(Months::new(1))
        }
        (CalendarView::Month, Direction::Prev) => {
            first_of_month(date).checked_sub_months(Months::new(1))
        }
    };
    moved.unwrap_or(date)
}

pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 1), 31);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2100, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 0), 0);
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn test_week_dates_midweek() {
        let week = week_dates(ymd(2024, 7, 10));
        assert_eq!(week[0], ymd(2024, 7, 7));
        assert_eq!(week[6], ymd(2024, 7, 13));
    }

    #[test]
    fn test_week_dates_span_year_boundary() {
        let week = week_dates(ymd(2025, 1, 1));
        assert_eq!(week[0], ymd(2024, 12, 29));
        assert_eq!(week[6], ymd(2025, 1, 4));
    }

    #[test]
    fn test_week_dates_are_consecutive_from_sunday() {
        let mut date = ymd(1999, 12, 1);
        while date < ymd(2000, 4, 1) {
            let week = week_dates(date);
            assert_eq!(week[0].weekday(), Weekday::Sun);
            assert!(week.contains(&date));
            for pair in week.windows(2) {
                assert_eq!(pair[1], pair[0].succ_opt().unwrap());
            }
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_month_grid_july_2025() {
        let grid = month_grid(ymd(2025, 7, 1));
        assert_eq!(
            grid,
            vec![
                [None, None, Some(1), Some(2), Some(3), Some(4), Some(5)],
                [Some(6), Some(7), Some(8), Some(9), Some(10), Some(11), Some(12)],
                [Some(13), Some(14), Some(15), Some(16), Some(17), Some(18), Some(19)],
                [Some(20), Some(21), Some(22), Some(23), Some(24), Some(25), Some(26)],
                [Some(27), Some(28), Some(29), Some(30), Some(31), None, None],
            ]
        );
    }

    #[test]
    fn test_month_grid_exact_four_weeks() {
        // February 2015 starts on a Sunday and has 28 days
        let grid = month_grid(ymd(2015, 2, 14));
        assert_eq!(grid.len(), 4);
        assert_eq!(grid[0][0], Some(1));
        assert_eq!(grid[3][6], Some(28));
    }

    #[test]
    fn test_month_grid_contains_every_day_once() {
        for year in [1900, 2000, 2024, 2025, 2100] {
            for month in 1..=12 {
                let grid = month_grid(ymd(year, month, 15));
                let days: Vec<u32> = grid.iter().flatten().flatten().copied().collect();
                let expected: Vec<u32> = (1..=days_in_month(year, month)).collect();
                assert_eq!(days, expected, "{year}-{month}");
            }
        }
    }

    #[test]
    fn test_format_week_label() {
        assert_eq!(format_week_label(ymd(2025, 8, 15)), "2025년 8월 2주");
        assert_eq!(format_week_label(ymd(2024, 7, 10)), "2024년 7월 2주");
    }

    #[test]
    fn test_format_week_label_uses_thursday_month() {
        // Sunday 2024-07-28 .. Saturday 2024-08-03, Thursday is August 1st
        assert_eq!(format_week_label(ymd(2024, 7, 31)), "2024년 8월 1주");
        // Sunday 2024-12-29 .. Saturday 2025-01-04, Thursday is January 2nd
        assert_eq!(format_week_label(ymd(2024, 12, 31)), "2025년 1월 1주");
    }

    #[test]
    fn test_format_week_label_last_week() {
        // Thursday 2024-10-31 is the fifth Thursday of October
        assert_eq!(format_week_label(ymd(2024, 11, 1)), "2024년 10월 5주");
    }

    #[test]
    fn test_format_month_label() {
        assert_eq!(format_month_label(ymd(2024, 7, 10)), "2024년 7월");
    }

    #[test]
    fn test_format_date_and_fill_zero() {
        assert_eq!(format_date(ymd(2024, 3, 5), None), "2024-03-05");
        assert_eq!(format_date(ymd(2024, 3, 5), Some(9)), "2024-03-09");
        assert_eq!(fill_zero(5, 2), "05");
        assert_eq!(fill_zero(10, 2), "10");
        assert_eq!(fill_zero(7, 4), "0007");
        assert_eq!(fill_zero(123, 2), "123");
    }

    #[test]
    fn test_is_date_in_range_is_inclusive() {
        let start = ymd(2024, 7, 1);
        let end = ymd(2024, 7, 31);
        assert!(is_date_in_range(start, start, end));
        assert!(is_date_in_range(end, start, end));
        assert!(!is_date_in_range(ymd(2024, 8, 1), start, end));
        assert!(!is_date_in_range(ymd(2024, 7, 10), end, start));
    }

    #[test]
    fn test_view_range() {
        assert_eq!(
            view_range(ymd(2024, 2, 10), CalendarView::Month),
            (ymd(2024, 2, 1), ymd(2024, 2, 29))
        );
        assert_eq!(
            view_range(ymd(2024, 2, 10), CalendarView::Week),
            (ymd(2024, 2, 4), ymd(2024, 2, 10))
        );
    }

    #[test]
    fn test_navigate() {
        let date = ymd(2024, 1, 31);
        assert_eq!(navigate(date, CalendarView::Week, Direction::Next), ymd(2024, 2, 7));
        assert_eq!(navigate(date, CalendarView::Week, Direction::Prev), ymd(2024, 1, 24));
        assert_eq!(navigate(date, CalendarView::Month, Direction::Next), ymd(2024, 2, 1));
        assert_eq!(navigate(date, CalendarView::Month, Direction::Prev), ymd(2023, 12, 1));
    }

    #[test]
    fn test_events_for_day() {
        let json = r#"[
            {"id":"1","title":"a","date":"2024-07-01","startTime":"09:00","endTime":"10:00"},
            {"id":"2","title":"b","date":"2024-07-02","startTime":"09:00","endTime":"10:00"},
            {"id":"3","title":"c","date":"bad","startTime":"09:00","endTime":"10:00"}
        ]"#;
        let events: Vec<Event> = serde_json::from_str(json).unwrap();

        let ids: Vec<_> = events_for_day(&events, 1)
            .into_iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1"]);
        assert!(events_for_day(&events, 32).is_empty());
    }
}
