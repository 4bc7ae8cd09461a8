pub mod errors;
pub mod services;
pub mod utils;

pub use errors::{CoreError, CoreResult};
