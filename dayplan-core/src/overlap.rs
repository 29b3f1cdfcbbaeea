//! Detect events whose time slots collide with a candidate.
//!
//! Every event occupies the half-open range `[date startTime, date endTime)`.
//! Adjacent events, where one ends exactly when another starts, do not overlap.

use chrono::{NaiveDate, NaiveDateTime};

use crate::event::EventLike;
use crate::validation::parse_clock;

/// The instants an event occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl EventRange {
    /// Half-open interval test: `a.start < b.end && b.start < a.end`.
    pub fn overlaps(&self, other: &EventRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Combine a `YYYY-MM-DD` date and an `HH:MM` time.
pub fn parse_date_time(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = parse_clock(time)?;
    Some(date.and_time(time))
}

/// The range an event occupies, or `None` if its date or either time is malformed.
pub fn event_range<E: EventLike + ?Sized>(event: &E) -> Option<EventRange> {
    Some(EventRange {
        start: parse_date_time(event.date(), event.start_time())?,
        end: parse_date_time(event.date(), event.end_time())?,
    })
}

/// Whether two events overlap. Unparseable records never overlap anything.
pub fn is_overlapping<A, B>(a: &A, b: &B) -> bool
where
    A: EventLike + ?Sized,
    B: EventLike + ?Sized,
{
    match (event_range(a), event_range(b)) {
        (Some(a), Some(b)) => a.overlaps(&b),
        _ => false,
    }
}

/// Existing events that collide with `candidate`, in their original order.
///
/// An event never conflicts with itself: records sharing the candidate's id
/// are skipped, so re-saving an edited event does not flag its old version.
pub fn find_overlapping<'a, C, E>(candidate: &C, existing: &'a [E]) -> Vec<&'a E>
where
    C: EventLike + ?Sized,
    E: EventLike,
{
    let Some(range) = event_range(candidate) else {
        return Vec::new();
    };
    let candidate_id = candidate.id();

    existing
        .iter()
        .filter(|event| candidate_id.is_none() || event.id() != candidate_id)
        .filter(|event| event_range(*event).is_some_and(|other| range.overlaps(&other)))
        .collect()
}
