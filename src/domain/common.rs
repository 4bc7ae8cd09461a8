//! Shared traits for venue dashboard entities.

use uuid::Uuid;

/// Exposes a stable identifier for entities held by the venue ledgers.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Supplies a common contract for retrieving monetary amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use serde;
pub use uuid;
