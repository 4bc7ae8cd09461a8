//! Bundle of every collection the dashboard works on, as imported from JSON.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{
    billing::{Invoice, Payment},
    booking::{BookingRecord, BookingRequest},
    checklist::ChecklistItem,
    event::VenueEvent,
};
use crate::core::errors::{CoreError, CoreResult};
use crate::core::services::EventService;
use crate::errors::Result;
use crate::ledger::NegotiationLedger;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub requests: Vec<BookingRequest>,
    #[serde(default)]
    pub bookings: Vec<BookingRecord>,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub events: Vec<VenueEvent>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
}

impl Dataset {
    /// Parses a dataset and rejects it unless [`Dataset::validate`] passes.
    pub fn from_json_str(data: &str) -> Result<Self> {
        let dataset: Self = serde_json::from_str(data)?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Applies the entry rules of requests, invoices and events to imported data.
    pub fn validate(&self) -> CoreResult<()> {
        NegotiationLedger::from_requests(self.requests.clone())?;

        let mut numbers = HashSet::with_capacity(self.invoices.len());
        for invoice in &self.invoices {
            if !invoice.amount.is_finite() || invoice.amount <= 0.0 {
                return Err(CoreError::Validation(format!(
                    "invoice {} has a non-positive amount: {}",
                    invoice.invoice_number, invoice.amount
                )));
            }
            if !numbers.insert(invoice.invoice_number.as_str()) {
                return Err(CoreError::Validation(format!(
                    "duplicate invoice number {}",
                    invoice.invoice_number
                )));
            }
        }

        for event in &self.events {
            EventService::validate(event)?;
        }
        Ok(())
    }
}
