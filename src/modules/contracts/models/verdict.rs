use crate::core::AssertionFailure;
use crate::modules::assertions::StatusSet;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{AdminGate, ContractCase, Resource, ValidationOutcome};

impl ValidationOutcome {
    /// Classify a status by what it says about the validation boundary.
    ///
    /// 400 and 422 are validation refusals. 429 and 5xx are blocked: a rate
    /// limit or a crash hides the verdict. 401 and 403 are blocked only when
    /// the admin check runs before validation; after it, they mean the body
    /// already passed. Anything else got past the boundary.
    pub fn from_status(status: u16, gate: AdminGate) -> Self {
        if StatusSet::VALIDATION_REJECTION.contains(status) {
            ValidationOutcome::Rejected
        } else if status == 429 || status >= 500 {
            ValidationOutcome::Blocked
        } else if StatusSet::AUTH_REJECTION.contains(status) {
            match gate {
                AdminGate::AfterValidation => ValidationOutcome::Accepted,
                AdminGate::Open | AdminGate::BeforeValidation => ValidationOutcome::Blocked,
            }
        } else {
            ValidationOutcome::Accepted
        }
    }
}

/// Result of sending one contract case to its endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseVerdict {
    pub resource: Resource,
    pub label: String,
    pub expected: ValidationOutcome,
    pub observed: ValidationOutcome,
    pub status: u16,
}

impl CaseVerdict {
    pub fn new(resource: Resource, case: &ContractCase, status: u16) -> Self {
        Self {
            resource,
            label: case.label.clone(),
            expected: case.expected_outcome(),
            observed: ValidationOutcome::from_status(status, resource.admin_gate()),
            status,
        }
    }

    pub fn matches(&self) -> bool {
        self.expected == self.observed
    }

    pub fn verify(&self) -> Result<(), AssertionFailure> {
        if self.observed == ValidationOutcome::Blocked {
            Err(AssertionFailure::BoundaryNotReached {
                resource: self.resource.to_string(),
                label: self.label.clone(),
                status: self.status,
            })
        } else if self.matches() {
            Ok(())
        } else {
            Err(AssertionFailure::ContractVerdict {
                resource: self.resource.to_string(),
                label: self.label.clone(),
                expected: self.expected.to_string(),
                status: self.status,
            })
        }
    }
}

/// Every verdict for one resource, in table order
#[derive(Debug, Clone, Serialize)]
pub struct ContractReport {
    pub resource: Resource,
    pub started_at: DateTime<Utc>,
    pub verdicts: Vec<CaseVerdict>,
}

impl ContractReport {
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            started_at: Utc::now(),
            verdicts: Vec::new(),
        }
    }

    pub fn failures(&self) -> Vec<AssertionFailure> {
        self.verdicts
            .iter()
            .filter_map(|verdict| verdict.verify().err())
            .collect()
    }

    pub fn is_conformant(&self) -> bool {
        self.verdicts.iter().all(CaseVerdict::matches)
    }
}
