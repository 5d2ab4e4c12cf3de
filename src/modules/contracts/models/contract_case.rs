use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Kind of field-level rule an invalid payload breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRule {
    Missing,
    WrongType,
    OutOfRange,
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Field name, or `$` for the body as a whole
    pub field: String,
    pub rule: FieldRule,
}

/// One (payload, expected validity) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractCase {
    pub label: String,
    /// Whether the validation boundary must let the payload through
    pub valid: bool,
    #[serde(default)]
    pub violations: Vec<FieldViolation>,
    /// Sent verbatim; may be empty or not an object at all
    pub payload: Value,
}

impl ContractCase {
    pub fn is_empty_payload(&self) -> bool {
        self.payload.as_object().is_some_and(|fields| fields.is_empty())
    }

    pub fn expected_outcome(&self) -> ValidationOutcome {
        if self.valid {
            ValidationOutcome::Accepted
        } else {
            ValidationOutcome::Rejected
        }
    }
}

/// How the validation boundary treated a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// Passed validation; the server may still refuse later (404, 401, 409)
    Accepted,
    /// Refused with 400 or 422
    Rejected,
    /// Stopped before validation (auth gate, rate limit) or crashed (5xx);
    /// says nothing about the payload
    Blocked,
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationOutcome::Accepted => f.write_str("accepted"),
            ValidationOutcome::Rejected => f.write_str("rejected"),
            ValidationOutcome::Blocked => f.write_str("blocked before validation"),
        }
    }
}
