use serde::Serialize;
use std::fmt;

/// Integrity rule the database engine reported as violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    NotNull,
    Check,
    ForeignKey,
    Unique,
}

impl ConstraintKind {
    /// Map a PostgreSQL SQLSTATE to the violated rule, if it is an integrity violation we classify.
    pub fn from_sqlstate(code: &str) -> Option<Self> {
        match code {
            "23502" => Some(ConstraintKind::NotNull),
            "23514" => Some(ConstraintKind::Check),
            "23503" => Some(ConstraintKind::ForeignKey),
            "23505" => Some(ConstraintKind::Unique),
            _ => None,
        }
    }

    /// Classify a sqlx error; `None` for anything that is not a recognised violation.
    pub fn of_error(err: &sqlx::Error) -> Option<Self> {
        let db_err = err.as_database_error()?;
        db_err.code().and_then(|code| Self::from_sqlstate(&code))
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConstraintKind::NotNull => "not-null violation",
            ConstraintKind::Check => "check violation",
            ConstraintKind::ForeignKey => "foreign-key violation",
            ConstraintKind::Unique => "unique violation",
        };
        f.write_str(label)
    }
}
