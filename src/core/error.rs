use crate::modules::assertions::StatusSet;

/// Harness-wide Result type
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Errors raised by the harness itself.
///
/// An `Err` from the runner or a probe is never a scenario verdict. It means
/// the run could not observe the system under test at all.
#[derive(thiserror::Error, Debug)]
pub enum HarnessError {
    /// The API under test could not be reached (connect error, timeout, truncated body)
    #[error("API unreachable at {url}: {source}")]
    ApiUnreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The database under test could not be reached
    #[error("Database unavailable: {0}")]
    DatabaseUnavailable(#[source] sqlx::Error),

    /// SQL error that no probe declared as an expected outcome
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The declarative contract table could not be parsed
    #[error("Contract table error: {0}")]
    ContractTable(#[from] serde_yaml::Error),

    /// The contract table parsed but breaks its own rules
    #[error("Invalid contract table: {0}")]
    InvalidContractTable(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HarnessError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        HarnessError::Configuration(msg.into())
    }

    pub fn invalid_table(msg: impl Into<String>) -> Self {
        HarnessError::InvalidContractTable(msg.into())
    }

    /// True when the failure lies in the environment rather than in the harness.
    pub fn is_environment(&self) -> bool {
        matches!(
            self,
            HarnessError::ApiUnreachable { .. } | HarnessError::DatabaseUnavailable(_)
        )
    }
}

/// A mismatch between what a scenario or probe declared and what was observed.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AssertionFailure {
    #[error("{scenario}: expected status in {expected}, got {actual} (body: {body})")]
    UnexpectedStatus {
        scenario: String,
        expected: StatusSet,
        actual: u16,
        body: String,
    },

    #[error("{scenario}: response body does not match its contract: {details}")]
    BodyShape { scenario: String, details: String },

    #[error(
        "{scenario}: expected every record to have country_code {expected}, found {offending:?}"
    )]
    CountryMismatch {
        scenario: String,
        expected: String,
        offending: Vec<String>,
    },

    #[error("{probe}: expected {expected}, observed {actual}")]
    UnexpectedViolation {
        probe: String,
        expected: String,
        actual: String,
    },

    #[error("{probe}: expected {expected} remaining row(s), counted {actual}")]
    RowCount {
        probe: String,
        expected: i64,
        actual: i64,
    },

    #[error("{resource} / {label}: expected {expected}, server answered {status}")]
    ContractVerdict {
        resource: String,
        label: String,
        expected: String,
        status: u16,
    },

    #[error("{resource} / {label}: request never reached validation, server answered {status}")]
    BoundaryNotReached {
        resource: String,
        label: String,
        status: u16,
    },

    #[error("invalid contract: {0}")]
    InvalidContract(String),
}
