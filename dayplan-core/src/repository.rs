//! Event storage behind the REST API.

use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DayplanError, DayplanResult};
use crate::event::{Event, EventForm};

/// CRUD over events. Ids are assigned on create and never change.
pub trait EventRepository {
    fn list(&self) -> Vec<Event>;

    fn get(&self, id: &str) -> DayplanResult<Event>;

    fn create(&mut self, form: EventForm) -> DayplanResult<Event>;

    fn update(&mut self, id: &str, form: EventForm) -> DayplanResult<Event>;

    fn delete(&mut self, id: &str) -> DayplanResult<()>;
}

/// The `{ "events": [...] }` document the API lists and seed files use.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventList {
    pub events: Vec<Event>,
}

/// Events held in memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventRepository {
    events: Vec<Event>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        InMemoryEventRepository { events }
    }

    /// Seed from a JSON file shaped like `{ "events": [...] }`.
    pub fn load(path: &Path) -> DayplanResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let list: EventList = serde_json::from_str(&content)
            .map_err(|e| DayplanError::Serialization(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(count = list.events.len(), path = %path.display(), "seeded events");
        Ok(Self::with_events(list.events))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn position(&self, id: &str) -> DayplanResult<usize> {
        self.events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| DayplanError::EventNotFound(id.to_string()))
    }
}

impl EventRepository for InMemoryEventRepository {
    fn list(&self) -> Vec<Event> {
        self.events.clone()
    }

    fn get(&self, id: &str) -> DayplanResult<Event> {
        let index = self.position(id)?;
        Ok(self.events[index].clone())
    }

    fn create(&mut self, form: EventForm) -> DayplanResult<Event> {
        let event = form.into_event(Uuid::new_v4().to_string());
        tracing::debug!(id = %event.id, title = %event.title, "created event");

        self.events.push(event.clone());
        Ok(event)
    }

    fn update(&mut self, id: &str, form: EventForm) -> DayplanResult<Event> {
        let index = self.position(id)?;
        let event = form.into_event(id);
        tracing::debug!(id = %event.id, "updated event");

        self.events[index] = event.clone();
        Ok(event)
    }

    fn delete(&mut self, id: &str) -> DayplanResult<()> {
        let index = self.position(id)?;
        self.events.remove(index);
        tracing::debug!(id, "deleted event");
        Ok(())
    }
}
