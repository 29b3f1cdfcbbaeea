//! Reminder selection for upcoming events.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::event::Event;
use crate::overlap::parse_date_time;

/// A reminder that has been raised and not yet dismissed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
}

/// Events starting after `now` and within their reminder lead time,
/// skipping ids that were already notified.
pub fn upcoming_events<'a>(
    events: &'a [Event],
    now: NaiveDateTime,
    notified: &HashSet<String>,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| !notified.contains(&event.id))
        .filter(|event| {
            let Some(start) = parse_date_time(&event.date, &event.start_time) else {
                return false;
            };
            let until_start = start - now;
            // millisecond precision: a start 30s away is within a 1 minute lead
            let millis = until_start.num_milliseconds();
            millis > 0 && millis <= event.notification_time.saturating_mul(60_000)
        })
        .collect()
}

pub fn notification_message(event: &Event) -> String {
    format!(
        "{}분 후 {} 일정이 시작됩니다.",
        event.notification_time, event.title
    )
}

/// Remembers which events have been notified so each fires once.
#[derive(Debug, Default)]
pub struct NotificationTracker {
    notified: HashSet<String>,
    pending: Vec<Notification>,
}

impl NotificationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise reminders for events that became due, returning only the new ones.
    pub fn poll(&mut self, events: &[Event], now: NaiveDateTime) -> Vec<Notification> {
        let fresh: Vec<Notification> = upcoming_events(events, now, &self.notified)
            .into_iter()
            .map(|event| Notification {
                id: event.id.clone(),
                message: notification_message(event),
            })
            .collect();

        for notification in &fresh {
            self.notified.insert(notification.id.clone());
        }
        self.pending.extend(fresh.iter().cloned());

        fresh
    }

    pub fn pending(&self) -> &[Notification] {
        &self.pending
    }

    /// Dismiss a pending reminder. The event stays marked as notified.
    pub fn dismiss(&mut self, index: usize) -> Option<Notification> {
        (index < self.pending.len()).then(|| self.pending.remove(index))
    }

    pub fn is_notified(&self, id: &str) -> bool {
        self.notified.contains(id)
    }
}
