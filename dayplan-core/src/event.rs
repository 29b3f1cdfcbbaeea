//! Event record and its wire format.
//!
//! Field names follow the JSON the front ends exchange with dayplan-server
//! (`startTime`, `endTime`, `notificationTime`). Dates and times stay strings
//! on the record and are parsed on use, so a malformed value is carried
//! through and reported by the checks instead of failing deserialization.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_NOTIFICATION_MINUTES;

/// A scheduled item, as stored by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Assigned by the repository on creation, never changed afterwards
    pub id: String,
    pub title: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Time of day on `date`, `HH:MM`
    pub start_time: String,
    /// Time of day on `date`, `HH:MM`
    pub end_time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub repeat: RepeatInfo,
    /// Minutes before the start at which a reminder fires
    #[serde(default = "default_notification_time")]
    pub notification_time: i64,
}

/// An event that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub repeat: RepeatInfo,
    #[serde(default = "default_notification_time")]
    pub notification_time: i64,
}

fn default_notification_time() -> i64 {
    DEFAULT_NOTIFICATION_MINUTES
}

/// Recurrence metadata. Carried on a single record and never expanded
/// into additional occurrences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatInfo {
    #[serde(rename = "type")]
    pub kind: RepeatType,
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl Default for RepeatInfo {
    fn default() -> Self {
        RepeatInfo {
            kind: RepeatType::None,
            interval: 1,
            end_date: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RepeatType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "none" => Some(RepeatType::None),
            "daily" => Some(RepeatType::Daily),
            "weekly" => Some(RepeatType::Weekly),
            "monthly" => Some(RepeatType::Monthly),
            "yearly" => Some(RepeatType::Yearly),
            _ => None,
        }
    }

    /// Label shown next to a repeating event.
    pub fn label(&self) -> &'static str {
        match self {
            RepeatType::None => "반복 없음",
            RepeatType::Daily => "일",
            RepeatType::Weekly => "주",
            RepeatType::Monthly => "월",
            RepeatType::Yearly => "년",
        }
    }
}

impl Event {
    /// Attach an id to a form, producing a stored event.
    pub fn from_form(id: impl Into<String>, form: EventForm) -> Self {
        Event {
            id: id.into(),
            title: form.title,
            date: form.date,
            start_time: form.start_time,
            end_time: form.end_time,
            description: form.description,
            location: form.location,
            category: form.category,
            repeat: form.repeat,
            notification_time: form.notification_time,
        }
    }

    /// Everything except the id.
    pub fn to_form(&self) -> EventForm {
        EventForm {
            title: self.title.clone(),
            date: self.date.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            category: self.category.clone(),
            repeat: self.repeat.clone(),
            notification_time: self.notification_time,
        }
    }

    pub fn is_repeating(&self) -> bool {
        self.repeat.kind != RepeatType::None
    }
}

impl EventForm {
    pub fn into_event(self, id: impl Into<String>) -> Event {
        Event::from_form(id, self)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}-{}",
            self.title, self.date, self.start_time, self.end_time
        )
    }
}

/// Anything that occupies a time slot on a calendar date.
///
/// Implemented by stored events and by unsaved forms so either can be the
/// candidate of an overlap check.
pub trait EventLike {
    /// `None` for records that have not been saved yet
    fn id(&self) -> Option<&str>;
    fn date(&self) -> &str;
    fn start_time(&self) -> &str;
    fn end_time(&self) -> &str;
}

impl EventLike for Event {
    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn date(&self) -> &str {
        &self.date
    }

    fn start_time(&self) -> &str {
        &self.start_time
    }

    fn end_time(&self) -> &str {
        &self.end_time
    }
}

impl EventLike for EventForm {
    fn id(&self) -> Option<&str> {
        None
    }

    fn date(&self) -> &str {
        &self.date
    }

    fn start_time(&self) -> &str {
        &self.start_time
    }

    fn end_time(&self) -> &str {
        &self.end_time
    }
}
