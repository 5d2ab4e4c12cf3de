pub mod error;
pub mod telemetry;

pub use error::{AssertionFailure, HarnessError, Result};
pub use telemetry::init_tracing;
