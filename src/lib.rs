//! eSIM Store API Contract Harness
//!
//! Drives the live eSIM package ordering API over HTTP and probes the
//! integrity constraints of its PostgreSQL schema directly.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use config::{AdminAuth, ApiConfig, DatabaseConfig, HarnessConfig};
pub use core::{AssertionFailure, HarnessError, Result};
pub use modules::admin;
pub use modules::assertions;
pub use modules::constraints;
pub use modules::contracts;
pub use modules::csrf;
pub use modules::scenarios;
