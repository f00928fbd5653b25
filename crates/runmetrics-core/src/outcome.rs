//! Per-request update outcome.

use crate::error::Result;

/// Result status of a single update request (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Update applied.
    Ok,
    /// Value did not parse as the kind's numeric type.
    BadRequest,
    /// Metric kind is not one the store understands.
    NotImplemented,
    /// Method, prefix, or path segments did not match the update route.
    NotFound,
}

impl UpdateOutcome {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            UpdateOutcome::Ok => "OK",
            UpdateOutcome::BadRequest => "BAD_REQUEST",
            UpdateOutcome::NotImplemented => "NOT_IMPLEMENTED",
            UpdateOutcome::NotFound => "NOT_FOUND",
        }
    }

    pub fn from_result(res: &Result<()>) -> Self {
        match res {
            Ok(()) => UpdateOutcome::Ok,
            Err(e) => e.outcome(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RunMetricsError;

    #[test]
    fn maps_each_error_to_its_outcome() {
        assert_eq!(UpdateOutcome::from_result(&Ok(())), UpdateOutcome::Ok);
        assert_eq!(
            UpdateOutcome::from_result(&Err(RunMetricsError::MalformedPath)),
            UpdateOutcome::NotFound
        );
        assert_eq!(
            UpdateOutcome::from_result(&Err(RunMetricsError::InvalidNumericValue {
                kind: "gauge",
                raw: "x".into(),
            })),
            UpdateOutcome::BadRequest
        );
        assert_eq!(
            UpdateOutcome::from_result(&Err(RunMetricsError::UnsupportedMetricKind(
                "histogram".into()
            ))),
            UpdateOutcome::NotImplemented
        );
        assert_eq!(
            UpdateOutcome::from_result(&Err(RunMetricsError::CounterOverflow("hits".into()))),
            UpdateOutcome::BadRequest
        );
    }
}
