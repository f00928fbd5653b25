//! runmetrics core: transport-agnostic update primitives, error types, and outcomes.
//!
//! This crate defines the path encoding of metric updates, the two metric
//! kinds with their value parsing rules, and the error surface shared by the
//! server and its tests. It intentionally carries no transport or runtime
//! dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `RunMetricsError`/`Result` so a
//! malformed request can never take the process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metric;
pub mod outcome;
pub mod protocol;

/// Shared result type.
pub use error::{Result, RunMetricsError};
pub use metric::{MetricKind, MetricUpdate, MetricValue};
pub use outcome::UpdateOutcome;
