use crate::core::AssertionFailure;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// The set of HTTP status codes a scenario accepts
///
/// Never empty. Sets with several members document a contract that does not
/// pin the exact code, only its class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSet(Cow<'static, [u16]>);

impl StatusSet {
    pub const OK: StatusSet = StatusSet(Cow::Borrowed(&[200]));
    pub const BAD_REQUEST: StatusSet = StatusSet(Cow::Borrowed(&[400]));
    /// Read-only endpoint hit with a mutating method
    pub const NOT_FOUND_OR_NOT_ALLOWED: StatusSet = StatusSet(Cow::Borrowed(&[404, 405]));
    /// Mutation refused for a missing or wrong CSRF token
    pub const CSRF_REJECTION: StatusSet = StatusSet(Cow::Borrowed(&[400, 401, 403]));
    /// Request body refused by the input-validation boundary
    pub const VALIDATION_REJECTION: StatusSet = StatusSet(Cow::Borrowed(&[400, 422]));
    /// Missing, invalid or insufficient admin bearer token
    pub const AUTH_REJECTION: StatusSet = StatusSet(Cow::Borrowed(&[401, 403]));

    /// Build a set from arbitrary codes; `None` if `codes` is empty.
    pub fn from_codes(codes: impl IntoIterator<Item = u16>) -> Option<Self> {
        let mut codes: Vec<u16> = codes.into_iter().collect();
        codes.sort_unstable();
        codes.dedup();
        if codes.is_empty() {
            None
        } else {
            Some(StatusSet(Cow::Owned(codes)))
        }
    }

    pub fn contains(&self, status: u16) -> bool {
        self.0.contains(&status)
    }

    pub fn codes(&self) -> &[u16] {
        &self.0
    }

    /// Membership check reported with the scenario name and response body.
    pub fn check(&self, scenario: &str, actual: u16, body: &str) -> Result<(), AssertionFailure> {
        if self.contains(actual) {
            Ok(())
        } else {
            Err(AssertionFailure::UnexpectedStatus {
                scenario: scenario.to_string(),
                expected: self.clone(),
                actual,
                body: body.to_string(),
            })
        }
    }
}

impl fmt::Display for StatusSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<String> = self.0.iter().map(u16::to_string).collect();
        write!(f, "{{{}}}", codes.join(", "))
    }
}
