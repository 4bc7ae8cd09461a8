#![doc(test(attr(deny(warnings))))]

//! Venue Core holds the booking-request negotiation ledger, the analytics and
//! billing aggregations, and the event and onboarding bookkeeping behind the
//! venue dashboard.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod seed;
pub mod utils;

pub use crate::core::services::{compute_billing_metrics, compute_venue_metrics, filter_invoices};
pub use crate::ledger::NegotiationLedger;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Venue Core tracing initialized.");
    });
}
