pub mod billing_service;
pub mod event_service;
pub mod metrics_service;
pub mod onboarding_service;

pub use billing_service::{
    compute_billing_metrics, filter_invoices, payments_for_invoice, payments_received, BillingMetrics,
    InvoiceFilter,
};
pub use event_service::EventService;
pub use metrics_service::{compute_venue_metrics, MonthlyBucket, VenueMetrics, MONTH_LABELS};
pub use onboarding_service::OnboardingService;
