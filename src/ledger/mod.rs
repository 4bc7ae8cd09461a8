pub mod checklist;
pub mod event_catalog;
pub mod negotiation;

pub use checklist::OnboardingChecklist;
pub use event_catalog::EventCatalog;
pub use negotiation::{parse_counter_offer, NegotiationLedger, RequestSummary};
