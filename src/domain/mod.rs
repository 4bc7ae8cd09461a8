pub mod billing;
pub mod booking;
pub mod checklist;
pub mod common;
pub mod dataset;
pub mod event;

pub use billing::{Invoice, InvoiceStatus, Payment, PaymentMethod, PaymentStatus};
pub use booking::{BookingRecord, BookingRequest, BookingStatus, RequestStatus};
pub use checklist::{ChecklistCategory, ChecklistItem};
pub use common::{Amounted, Displayable, Identifiable, NamedEntity};
pub use dataset::Dataset;
pub use event::{EventStatus, VenueEvent};
