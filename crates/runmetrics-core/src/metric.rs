//! Metric kinds and parsed update values.
//!
//! Two kinds are understood:
//! - `gauge`: `f64`, the latest value replaces the stored one.
//! - `counter`: `i64`, values accumulate onto the stored total.

use crate::error::{Result, RunMetricsError};

/// Kind discriminator carried in the second path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Gauge,
    Counter,
}

impl MetricKind {
    /// Parse the kind segment. Matching is case-sensitive.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "gauge" => Ok(MetricKind::Gauge),
            "counter" => Ok(MetricKind::Counter),
            other => Err(RunMetricsError::UnsupportedMetricKind(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Gauge => "gauge",
            MetricKind::Counter => "counter",
        }
    }

    /// Parse a raw value segment as this kind's numeric type.
    pub fn parse_value(self, raw: &str) -> Result<MetricValue> {
        let invalid = || RunMetricsError::InvalidNumericValue {
            kind: self.as_str(),
            raw: raw.to_string(),
        };
        match self {
            MetricKind::Gauge => raw.parse::<f64>().map(MetricValue::Gauge).map_err(|_| invalid()),
            MetricKind::Counter => raw.parse::<i64>().map(MetricValue::Counter).map_err(|_| invalid()),
        }
    }
}

/// A typed metric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Gauge(f64),
    Counter(i64),
}

impl MetricValue {
    pub fn kind(&self) -> MetricKind {
        match self {
            MetricValue::Gauge(_) => MetricKind::Gauge,
            MetricValue::Counter(_) => MetricKind::Counter,
        }
    }
}

/// A validated update, ready to be merged into a store.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricUpdate {
    pub name: String,
    pub value: MetricValue,
}

impl MetricUpdate {
    /// Validate kind first, then the value, so an unknown kind wins over a bad value.
    pub fn parse(kind: &str, name: &str, raw: &str) -> Result<Self> {
        let kind = MetricKind::parse(kind)?;
        let value = kind.parse_value(raw)?;
        Ok(Self {
            name: name.to_string(),
            value,
        })
    }
}
