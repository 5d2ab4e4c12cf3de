use crate::core::AssertionFailure;
use crate::modules::assertions::ConstraintKind;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Values for one `user_orders` insert; `None` binds SQL NULL
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRow {
    pub user_id: Option<Uuid>,
    pub package_id: Option<Uuid>,
    pub status: Option<String>,
}

/// A NOT NULL column of `user_orders`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderColumn {
    UserId,
    PackageId,
    Status,
}

impl OrderColumn {
    pub const ALL: [OrderColumn; 3] = [
        OrderColumn::UserId,
        OrderColumn::PackageId,
        OrderColumn::Status,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OrderColumn::UserId => "user_id",
            OrderColumn::PackageId => "package_id",
            OrderColumn::Status => "status",
        }
    }
}

impl OrderRow {
    /// A pending order for rows that exist
    pub fn referencing(user_id: Uuid, package_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
            package_id: Some(package_id),
            status: Some("pending".to_string()),
        }
    }

    /// Random, unreferenced ids and a valid status
    pub fn dangling() -> Self {
        Self {
            user_id: Some(Uuid::new_v4()),
            package_id: Some(Uuid::new_v4()),
            status: Some("pending".to_string()),
        }
    }

    pub fn without_user(mut self) -> Self {
        self.user_id = None;
        self
    }

    pub fn without_package(mut self) -> Self {
        self.package_id = None;
        self
    }

    pub fn without_status(mut self) -> Self {
        self.status = None;
        self
    }

    pub fn without(self, column: OrderColumn) -> Self {
        match column {
            OrderColumn::UserId => self.without_user(),
            OrderColumn::PackageId => self.without_package(),
            OrderColumn::Status => self.without_status(),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// What a probe requires the engine to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeExpectation {
    Violation(ConstraintKind),
    RowsRemaining(i64),
}

/// What the engine did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeObservation {
    Violation(ConstraintKind),
    /// The statement succeeded
    Accepted,
    RowsRemaining(i64),
}

impl fmt::Display for ProbeExpectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeExpectation::Violation(kind) => write!(f, "{}", kind),
            ProbeExpectation::RowsRemaining(count) => write!(f, "{} remaining row(s)", count),
        }
    }
}

impl fmt::Display for ProbeObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeObservation::Violation(kind) => write!(f, "{}", kind),
            ProbeObservation::Accepted => f.write_str("statement accepted"),
            ProbeObservation::RowsRemaining(count) => write!(f, "{} remaining row(s)", count),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeOutcome {
    pub probe: String,
    pub expected: ProbeExpectation,
    pub observed: ProbeObservation,
}

impl ProbeOutcome {
    pub fn verify(&self) -> Result<(), AssertionFailure> {
        match (self.expected, self.observed) {
            (ProbeExpectation::Violation(expected), ProbeObservation::Violation(actual))
                if expected == actual =>
            {
                Ok(())
            }
            (
                ProbeExpectation::RowsRemaining(expected),
                ProbeObservation::RowsRemaining(actual),
            ) => {
                if expected == actual {
                    Ok(())
                } else {
                    Err(AssertionFailure::RowCount {
                        probe: self.probe.clone(),
                        expected,
                        actual,
                    })
                }
            }
            _ => Err(AssertionFailure::UnexpectedViolation {
                probe: self.probe.clone(),
                expected: self.expected.to_string(),
                actual: self.observed.to_string(),
            }),
        }
    }
}
