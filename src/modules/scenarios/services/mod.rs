pub mod declared;
pub mod runner;

pub use declared::*;
pub use runner::ScenarioRunner;
