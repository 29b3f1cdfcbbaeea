//! Editor state for creating and editing events.
//!
//! A plain mutable record with setters. Time fields revalidate on every
//! change so the editor can show field errors as the user types.

use thiserror::Error;

use crate::constants::DEFAULT_NOTIFICATION_MINUTES;
use crate::event::{Event, EventForm, RepeatInfo, RepeatType};
use crate::validation::{TimeErrors, validate_times};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("필수 정보를 모두 입력해주세요.")]
    MissingRequired,

    #[error("시간 설정을 확인해주세요.")]
    InvalidTime,
}

/// What a successful submit should do with the repository.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(EventForm),
    Update(Event),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventFormState {
    pub title: String,
    pub date: String,
    start_time: String,
    end_time: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub is_repeating: bool,
    pub repeat_type: RepeatType,
    pub repeat_interval: u32,
    pub repeat_end_date: Option<String>,
    pub notification_time: i64,
    editing_id: Option<String>,
    time_error: TimeErrors,
}

impl Default for EventFormState {
    fn default() -> Self {
        EventFormState {
            title: String::new(),
            date: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            description: String::new(),
            location: String::new(),
            category: String::new(),
            is_repeating: false,
            repeat_type: RepeatType::None,
            repeat_interval: 1,
            repeat_end_date: None,
            notification_time: DEFAULT_NOTIFICATION_MINUTES,
            editing_id: None,
            time_error: TimeErrors::default(),
        }
    }
}

impl EventFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor pre-filled with an existing event, in edit mode.
    pub fn editing(event: &Event) -> Self {
        let mut state = Self::default();
        state.load(event);
        state
    }

    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    pub fn end_time(&self) -> &str {
        &self.end_time
    }

    pub fn time_error(&self) -> &TimeErrors {
        &self.time_error
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    pub fn set_start_time(&mut self, value: impl Into<String>) {
        self.start_time = value.into();
        self.time_error = validate_times(&self.start_time, &self.end_time);
    }

    pub fn set_end_time(&mut self, value: impl Into<String>) {
        self.end_time = value.into();
        self.time_error = validate_times(&self.start_time, &self.end_time);
    }

    /// Enter edit mode for `event`.
    pub fn load(&mut self, event: &Event) {
        self.title = event.title.clone();
        self.date = event.date.clone();
        self.start_time = event.start_time.clone();
        self.end_time = event.end_time.clone();
        self.description = event.description.clone();
        self.location = event.location.clone();
        self.category = event.category.clone();
        self.is_repeating = event.is_repeating();
        self.repeat_type = event.repeat.kind;
        self.repeat_interval = event.repeat.interval;
        self.repeat_end_date = event.repeat.end_date.clone();
        self.notification_time = event.notification_time;
        self.editing_id = Some(event.id.clone());
        self.time_error = validate_times(&self.start_time, &self.end_time);
    }

    /// Back to an empty create form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn repeat(&self) -> RepeatInfo {
        if !self.is_repeating {
            return RepeatInfo::default();
        }
        RepeatInfo {
            kind: self.repeat_type,
            interval: self.repeat_interval,
            end_date: self.repeat_end_date.clone().filter(|d| !d.is_empty()),
        }
    }

    /// The record the editor currently describes, without an id.
    pub fn to_form(&self) -> EventForm {
        EventForm {
            title: self.title.clone(),
            date: self.date.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            category: self.category.clone(),
            repeat: self.repeat(),
            notification_time: self.notification_time,
        }
    }

    /// Check required fields and time errors, then produce a create or update.
    pub fn submit(&self) -> Result<Submission, FormError> {
        let required = [&self.title, &self.date, &self.start_time, &self.end_time];
        if required.iter().any(|field| field.is_empty()) {
            return Err(FormError::MissingRequired);
        }
        if !self.time_error.is_valid() {
            return Err(FormError::InvalidTime);
        }

        let form = self.to_form();
        Ok(match &self.editing_id {
            Some(id) => Submission::Update(form.into_event(id.clone())),
            None => Submission::Create(form),
        })
    }
}
