//! Shared error type across runmetrics crates.

use thiserror::Error;

use crate::outcome::UpdateOutcome;

/// Shared result type.
pub type Result<T> = std::result::Result<T, RunMetricsError>;

/// Unified error type used by core and server.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RunMetricsError {
    #[error("malformed update path")]
    MalformedPath,
    #[error("invalid {kind} value: {raw:?}")]
    InvalidNumericValue { kind: &'static str, raw: String },
    #[error("unsupported metric kind: {0}")]
    UnsupportedMetricKind(String),
    #[error("counter overflow: {0}")]
    CounterOverflow(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl RunMetricsError {
    /// Map internal error to the outcome reported to the client.
    pub fn outcome(&self) -> UpdateOutcome {
        match self {
            RunMetricsError::MalformedPath => UpdateOutcome::NotFound,
            RunMetricsError::InvalidNumericValue { .. } => UpdateOutcome::BadRequest,
            RunMetricsError::UnsupportedMetricKind(_) => UpdateOutcome::NotImplemented,
            RunMetricsError::CounterOverflow(_) => UpdateOutcome::BadRequest,
            RunMetricsError::InvalidConfig(_) => UpdateOutcome::BadRequest,
        }
    }
}
