use std::result::Result as StdResult;

use thiserror::Error;
use uuid::Uuid;

use crate::domain::RequestStatus;

/// Failures raised by the ledgers and services when an operation cannot apply.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("Booking request not found: {0}")]
    RequestNotFound(Uuid),
    #[error("Event not found: {0}")]
    EventNotFound(Uuid),
    #[error("Checklist item not found: {0}")]
    ChecklistItemNotFound(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Cannot {action} request {id}: it is already {from}")]
    InvalidTransition {
        id: Uuid,
        from: RequestStatus,
        action: &'static str,
    },
    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type CoreResult<T> = StdResult<T, CoreError>;
