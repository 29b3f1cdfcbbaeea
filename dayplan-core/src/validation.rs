//! Start/end time validation for the event editor.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::error::{DayplanError, DayplanResult};
use crate::event::EventForm;

pub const TIME_FORMAT_ERROR: &str = "시간 형식이 올바르지 않습니다. (HH:MM)";
pub const START_AFTER_END_ERROR: &str = "시작 시간은 종료 시간보다 빨라야 합니다.";
pub const END_BEFORE_START_ERROR: &str = "종료 시간은 시작 시간보다 늦어야 합니다.";

/// Field-level errors for a start/end pair. Both `None` means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeErrors {
    pub start_time_error: Option<String>,
    pub end_time_error: Option<String>,
}

impl TimeErrors {
    pub fn is_valid(&self) -> bool {
        self.start_time_error.is_none() && self.end_time_error.is_none()
    }

    fn start(message: &str) -> Self {
        TimeErrors {
            start_time_error: Some(message.to_string()),
            end_time_error: None,
        }
    }

    fn end(message: &str) -> Self {
        TimeErrors {
            start_time_error: None,
            end_time_error: Some(message.to_string()),
        }
    }
}

/// Parse `H:MM` or `HH:MM` on a 24-hour clock.
///
/// The hour takes one or two digits (0-23), the minute exactly two (00-59).
/// Anything else, including seconds or surrounding whitespace, is rejected.
pub fn parse_clock(s: &str) -> Option<NaiveTime> {
    let (hour, minute) = s.split_once(':')?;

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if hour.len() > 2 || minute.len() != 2 || !all_digits(hour) || !all_digits(minute) {
        return None;
    }

    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Validate a start/end pair.
///
/// A malformed start is reported first and alone; then a malformed end.
/// If either side is empty nothing is compared. Otherwise the start must be
/// strictly earlier than the end: equal times and ranges that would cross
/// midnight are both errors.
pub fn validate_times(start: &str, end: &str) -> TimeErrors {
    if !start.is_empty() && parse_clock(start).is_none() {
        return TimeErrors::start(TIME_FORMAT_ERROR);
    }
    if !end.is_empty() && parse_clock(end).is_none() {
        return TimeErrors::end(TIME_FORMAT_ERROR);
    }

    let (Some(start), Some(end)) = (parse_clock(start), parse_clock(end)) else {
        return TimeErrors::default();
    };

    if start >= end {
        return TimeErrors {
            start_time_error: Some(START_AFTER_END_ERROR.to_string()),
            end_time_error: Some(END_BEFORE_START_ERROR.to_string()),
        };
    }

    TimeErrors::default()
}

/// Reject a record the repository should not store: missing title,
/// unparseable date, or a time pair that fails [`validate_times`].
pub fn validate_form(form: &EventForm) -> DayplanResult<()> {
    if form.title.trim().is_empty() {
        return Err(DayplanError::InvalidEvent("title is required".into()));
    }
    if NaiveDate::parse_from_str(&form.date, "%Y-%m-%d").is_err() {
        return Err(DayplanError::InvalidEvent(format!(
            "invalid date '{}', expected YYYY-MM-DD",
            form.date
        )));
    }
    if form.start_time.is_empty() || form.end_time.is_empty() {
        return Err(DayplanError::InvalidEvent("start and end time are required".into()));
    }

    let errors = validate_times(&form.start_time, &form.end_time);
    if let Some(message) = errors.start_time_error.or(errors.end_time_error) {
        return Err(DayplanError::InvalidEvent(message));
    }

    Ok(())
}
