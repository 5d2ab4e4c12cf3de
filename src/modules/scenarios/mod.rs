// HTTP scenarios module

pub mod models;
pub mod services;

pub use models::{Method, Observed, RequestSpec, Scenario};
pub use services::*;
