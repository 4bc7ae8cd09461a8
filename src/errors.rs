use std::result::Result as StdResult;

use thiserror::Error;

use crate::core::errors::CoreError;

/// Unified error type surfaced at the crate boundary.
#[derive(Debug, Error)]
pub enum VenueError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, VenueError>;
