// Test Helper Modules for the live contract suite
//
// Live tests talk to the real API and the real database; nothing here mocks
// the system under test. The stub server in `test_server` exists only to
// exercise the runner's own plumbing.
//
// Usage (from tests/<kind>/<name>.rs):
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;
//
// Example:
//   #[tokio::test]
//   #[ignore = "Requires the API under test"]
//   async fn test_csrf_token_success() -> Result<(), HarnessError> {
//       let runner = live_runner()?;
//       let scenario = csrf_token_issuance();
//       let observed = runner.run(&scenario).await?;
//       assert_scenario(&scenario, &observed);
//       Ok(())
//   }

#![allow(dead_code)]

pub mod assertions;
pub mod test_data;

// Re-export commonly used types and functions
pub use assertions::*;
pub use test_api::*;
pub use test_data::*;
pub use test_database::*;
pub use test_server::*;
