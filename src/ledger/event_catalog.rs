use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::VenueEvent;

/// The venue's calendar of events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCatalog {
    #[serde(default)]
    pub events: Vec<VenueEvent>,
    pub updated_at: DateTime<Utc>,
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventCatalog {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    pub fn with_events(events: Vec<VenueEvent>) -> Self {
        Self {
            events,
            updated_at: Utc::now(),
        }
    }

    pub fn add_event(&mut self, event: VenueEvent) -> Uuid {
        let id = event.id;
        self.events.push(event);
        self.touch();
        id
    }

    pub fn event(&self, id: Uuid) -> Option<&VenueEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn event_mut(&mut self, id: Uuid) -> Option<&mut VenueEvent> {
        self.events.iter_mut().find(|event| event.id == id)
    }

    pub fn remove_event(&mut self, id: Uuid) -> Option<VenueEvent> {
        let index = self.events.iter().position(|event| event.id == id)?;
        let removed = self.events.remove(index);
        self.touch();
        Some(removed)
    }

    /// Events dated strictly after `reference`, soonest first.
    pub fn upcoming(&self, reference: NaiveDate) -> Vec<&VenueEvent> {
        let mut events: Vec<_> = self
            .events
            .iter()
            .filter(|event| event.date > reference)
            .collect();
        events.sort_by_key(|event| (event.date, event.time));
        events
    }

    /// Events dated on or before `reference`, most recent first.
    pub fn past(&self, reference: NaiveDate) -> Vec<&VenueEvent> {
        let mut events: Vec<_> = self
            .events
            .iter()
            .filter(|event| event.date <= reference)
            .collect();
        events.sort_by(|a, b| (b.date, b.time).cmp(&(a.date, a.time)));
        events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
