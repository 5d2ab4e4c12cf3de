// Test Assertion Helpers
//
// Panicking wrappers over the harness assertion layer. A panic here is a
// scenario failure; environment problems never reach these functions because
// the tests propagate them with `?` first.

use esim_harness::constraints::ProbeOutcome;
use esim_harness::contracts::ContractReport;
use esim_harness::scenarios::{Observed, Scenario};
use serde_json::Value;

/// Assert the observed response satisfies the scenario
///
/// # Panics
/// With the expected status set, actual status and body on mismatch
pub fn assert_scenario(scenario: &Scenario, observed: &Observed) {
    if let Err(failure) = scenario.verify(observed) {
        panic!("{}", failure);
    }
}

/// Assert a constraint probe observed what it expected
pub fn assert_probe(outcome: &ProbeOutcome) {
    if let Err(failure) = outcome.verify() {
        panic!("{}", failure);
    }
}

/// Assert every case of a contract report got the expected verdict
///
/// # Panics
/// Listing every mismatching case, not just the first
pub fn assert_report_conformant(report: &ContractReport) {
    let failures = report.failures();
    assert!(
        failures.is_empty(),
        "{} contract case(s) failed for {}:\n{}",
        failures.len(),
        report.resource,
        failures
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Assert response body contains expected JSON field
///
/// # Example
/// ```ignore
/// let body = json!({"csrfToken": null});
/// assert_json_field(&body, "csrfToken");
/// ```
pub fn assert_json_field(body: &Value, field: &str) {
    assert!(
        body.get(field).is_some(),
        "Expected JSON field '{}' not found in response: {}",
        field,
        body
    );
}
