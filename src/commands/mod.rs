pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod month;
pub mod remind;
pub mod week;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use dayplan_core::constants::CATEGORIES;
use dayplan_core::date_grid::format_date;
use dayplan_core::form::EventFormState;
use dayplan_core::overlap::find_overlapping;
use dayplan_core::validation::parse_clock;
use dayplan_core::{Event, EventLike, RepeatType};

use crate::render::render_conflict;

/// Event fields shared by `add` and `edit`. Unset fields keep their current value.
#[derive(Args, Debug, Default)]
pub struct EventArgs {
    /// Event title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Start time (HH:MM)
    #[arg(short, long)]
    pub start: Option<String>,

    /// End time (HH:MM)
    #[arg(short, long)]
    pub end: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(short, long)]
    pub location: Option<String>,

    /// One of 업무, 개인, 가족, 기타
    #[arg(short, long)]
    pub category: Option<String>,

    /// Reminder lead time in minutes (1, 10, 60, 120, 1440)
    #[arg(short, long)]
    pub notify: Option<i64>,

    /// none, daily, weekly, monthly or yearly
    #[arg(long)]
    pub repeat: Option<String>,

    /// Repeat every N units
    #[arg(long)]
    pub interval: Option<u32>,

    /// Last date of the repetition (YYYY-MM-DD)
    #[arg(long)]
    pub repeat_end: Option<String>,
}

impl EventArgs {
    /// Copy the given fields into the editor state.
    pub fn apply(self, state: &mut EventFormState) -> Result<()> {
        if let Some(title) = self.title {
            state.title = title;
        }
        if let Some(date) = self.date {
            state.date = date;
        }
        if let Some(start) = self.start {
            state.set_start_time(start);
        }
        if let Some(end) = self.end {
            state.set_end_time(end);
        }
        if let Some(description) = self.description {
            state.description = description;
        }
        if let Some(location) = self.location {
            state.location = location;
        }
        if let Some(category) = self.category {
            if !CATEGORIES.contains(&category.as_str()) {
                anyhow::bail!(
                    "알 수 없는 카테고리입니다: '{}' (선택: {})",
                    category,
                    CATEGORIES.join(", ")
                );
            }
            state.category = category;
        }
        if let Some(minutes) = self.notify {
            state.notification_time = minutes;
        }
        if let Some(name) = self.repeat {
            let kind = RepeatType::from_name(&name)
                .ok_or_else(|| anyhow::anyhow!("알 수 없는 반복 유형입니다: '{}'", name))?;
            state.is_repeating = kind != RepeatType::None;
            state.repeat_type = kind;
        }
        if let Some(interval) = self.interval {
            state.repeat_interval = interval;
        }
        if let Some(end) = self.repeat_end {
            state.repeat_end_date = Some(end);
        }
        Ok(())
    }
}

/// Warn about overlapping events and ask whether to save anyway.
/// Returns true when saving should proceed.
pub fn confirm_overlaps<C: EventLike>(
    candidate: &C,
    existing: &[Event],
    assume_yes: bool,
) -> Result<bool> {
    let overlapping = find_overlapping(candidate, existing);
    if overlapping.is_empty() {
        return Ok(true);
    }

    println!("{}", "일정 겹침 경고".yellow().bold());
    println!("다음 일정과 겹칩니다:");
    for event in &overlapping {
        println!("  {}", render_conflict(event));
    }

    if assume_yes {
        return Ok(true);
    }

    let proceed = Confirm::new()
        .with_prompt("계속 진행하시겠습니까?")
        .default(false)
        .interact()?;
    Ok(proceed)
}

/// Events on `day`, earliest start first.
pub fn events_on<'a>(events: &[&'a Event], day: NaiveDate) -> Vec<&'a Event> {
    let key = format_date(day, None);
    let mut on_day: Vec<&Event> = events.iter().copied().filter(|e| e.date == key).collect();
    on_day.sort_by_key(|e| parse_clock(&e.start_time));
    on_day
}
