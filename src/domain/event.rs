//! Venue events planned on the calendar.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;
use crate::utils::percentage;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Planning,
    Confirmed,
    Completed,
    Cancelled,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EventStatus::Planning => "planning",
            EventStatus::Confirmed => "confirmed",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VenueEvent {
    pub id: Uuid,
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub capacity: u32,
    pub budget: f64,
    #[serde(default)]
    pub spent: f64,
    #[serde(default)]
    pub artist_count: u32,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl VenueEvent {
    /// Creates a planning-stage event with nothing spent and no artists booked.
    pub fn new(
        name: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        capacity: u32,
        budget: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            date,
            time,
            capacity,
            budget,
            spent: 0.0,
            artist_count: 0,
            status: EventStatus::Planning,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Share of the budget already spent, as a whole percentage.
    pub fn budget_utilization(&self) -> f64 {
        percentage(self.spent, self.budget, 0)
    }

    pub fn remaining_budget(&self) -> f64 {
        self.budget - self.spent
    }
}

impl Identifiable for VenueEvent {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for VenueEvent {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for VenueEvent {
    fn display_label(&self) -> String {
        format!("{} on {} ({})", self.name, self.date, self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_utilization_rounds_to_whole_percent() {
        let mut event = VenueEvent::new(
            "Summer Music Festival",
            NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
            NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            500,
            15_000.0,
        );
        event.spent = 8_500.0;
        assert_eq!(event.budget_utilization(), 57.0);
        assert_eq!(event.remaining_budget(), 6_500.0);
    }

    #[test]
    fn zero_budget_reports_no_utilization() {
        let event = VenueEvent::new(
            "Open Mic",
            NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            80,
            0.0,
        );
        assert_eq!(event.budget_utilization(), 0.0);
    }
}
