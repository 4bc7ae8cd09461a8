//! Booking requests under negotiation and the booking records fed to analytics.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// Negotiation state of a booking request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Negotiating,
    Accepted,
    Rejected,
}

impl RequestStatus {
    /// Accepted and rejected requests never leave their state.
    pub fn is_terminal(self) -> bool {
        matches!(self, RequestStatus::Accepted | RequestStatus::Rejected)
    }

    pub fn is_open(self) -> bool {
        !self.is_terminal()
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Negotiating => "negotiating",
            RequestStatus::Accepted => "accepted",
            RequestStatus::Rejected => "rejected",
        };
        f.write_str(label)
    }
}

/// An artist's proposal to perform at the venue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub id: Uuid,
    pub artist_name: String,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub asking_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposed_rate: Option<f64>,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub created_at: NaiveDate,
}

impl BookingRequest {
    /// Creates a pending request with no counter-offer on the table.
    pub fn new(
        artist_name: impl Into<String>,
        event_date: NaiveDate,
        event_time: NaiveTime,
        asking_rate: f64,
        created_at: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            artist_name: artist_name.into(),
            event_date,
            event_time,
            asking_rate,
            proposed_rate: None,
            status: RequestStatus::Pending,
            message: None,
            created_at,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Rate the venue committed to, available once the request is accepted.
    ///
    /// A counter-offer that was on the table when the request was accepted
    /// wins over the artist's asking rate.
    pub fn agreed_rate(&self) -> Option<f64> {
        match self.status {
            RequestStatus::Accepted => Some(self.proposed_rate.unwrap_or(self.asking_rate)),
            _ => None,
        }
    }
}

impl Identifiable for BookingRequest {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for BookingRequest {
    fn name(&self) -> &str {
        &self.artist_name
    }
}

impl Displayable for BookingRequest {
    fn display_label(&self) -> String {
        format!(
            "{} on {} at {} ({})",
            self.artist_name,
            self.event_date,
            self.event_time.format("%H:%M"),
            self.status
        )
    }
}

/// Status of a booking as reported by the bookings feed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// Read-only booking snapshot consumed by the analytics aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub event_date: NaiveDate,
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_rate: Option<f64>,
    #[serde(default)]
    pub genres: BTreeSet<String>,
}

impl BookingRecord {
    pub fn new(event_date: NaiveDate, status: BookingStatus, artist_rate: Option<f64>) -> Self {
        Self {
            event_date,
            status,
            artist_rate,
            genres: BTreeSet::new(),
        }
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres.extend(genres.into_iter().map(Into::into));
        self
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }
}
