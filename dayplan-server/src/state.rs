use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;

use dayplan_core::config::DayplanConfig;
use dayplan_core::holiday::{HolidayLookup, HolidayTable};
use dayplan_core::repository::{EventRepository, InMemoryEventRepository};

pub type SharedRepository = Arc<RwLock<dyn EventRepository + Send + Sync>>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub events: SharedRepository,
    pub holidays: Arc<dyn HolidayLookup + Send + Sync>,
}

impl AppState {
    pub fn new<R, H>(repository: R, holidays: H) -> Self
    where
        R: EventRepository + Send + Sync + 'static,
        H: HolidayLookup + Send + Sync + 'static,
    {
        AppState {
            events: Arc::new(RwLock::new(repository)),
            holidays: Arc::new(holidays),
        }
    }

    /// Build the store and holiday table described by the config.
    pub fn from_config(config: &DayplanConfig) -> Result<Self> {
        let repository: InMemoryEventRepository = config.repository()?;
        let holidays: HolidayTable = config.holidays()?;

        tracing::info!(
            events = repository.len(),
            holidays = holidays.len(),
            "loaded initial state"
        );

        Ok(Self::new(repository, holidays))
    }
}
