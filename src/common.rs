pub mod error;
pub mod telemetry;

pub use error::{AdminError, Result};
