//! Validated CRUD helpers for the venue's event calendar.

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::core::errors::{CoreError, CoreResult};
use crate::domain::VenueEvent;
use crate::ledger::EventCatalog;

pub struct EventService;

impl EventService {
    /// Adds a new event and returns its identifier.
    pub fn add(catalog: &mut EventCatalog, event: VenueEvent) -> CoreResult<Uuid> {
        Self::validate(&event)?;
        let id = catalog.add_event(event);
        debug!(%id, "event added");
        Ok(id)
    }

    /// Applies the editable fields of `changes` to the event identified by `id`.
    ///
    /// Spend and booked artist count are tracked elsewhere and survive edits.
    pub fn edit(catalog: &mut EventCatalog, id: Uuid, changes: VenueEvent) -> CoreResult<()> {
        Self::validate_details(&changes)?;
        let event = catalog
            .event_mut(id)
            .ok_or(CoreError::EventNotFound(id))?;
        event.name = changes.name;
        event.date = changes.date;
        event.time = changes.time;
        event.capacity = changes.capacity;
        event.budget = changes.budget;
        event.status = changes.status;
        event.description = changes.description;
        catalog.touch();
        debug!(%id, "event updated");
        Ok(())
    }

    /// Removes the event identified by `id`, returning the removed instance.
    pub fn remove(catalog: &mut EventCatalog, id: Uuid) -> CoreResult<VenueEvent> {
        catalog
            .remove_event(id)
            .ok_or(CoreError::EventNotFound(id))
    }

    pub fn upcoming(catalog: &EventCatalog, reference: NaiveDate) -> Vec<&VenueEvent> {
        catalog.upcoming(reference)
    }

    pub fn past(catalog: &EventCatalog, reference: NaiveDate) -> Vec<&VenueEvent> {
        catalog.past(reference)
    }

    /// Checks every field an event must satisfy to enter the calendar.
    pub fn validate(event: &VenueEvent) -> CoreResult<()> {
        Self::validate_details(event)?;
        Self::check_amount(event, "spent", event.spent)
    }

    /// Checks the fields an edit replaces.
    fn validate_details(event: &VenueEvent) -> CoreResult<()> {
        if event.name.trim().is_empty() {
            return Err(CoreError::Validation("Event name is required".into()));
        }
        if event.capacity == 0 {
            return Err(CoreError::Validation(format!(
                "Event `{}` needs a capacity above zero",
                event.name
            )));
        }
        Self::check_amount(event, "budget", event.budget)
    }

    fn check_amount(event: &VenueEvent, label: &str, value: f64) -> CoreResult<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(CoreError::Validation(format!(
                "Event `{}` has an invalid {label}: {value}",
                event.name
            )));
        }
        Ok(())
    }
}
