//! Metric storage.
//!
//! `Storage` is the seam the update handler talks to; `MemStorage` is the
//! in-process implementation. Stores are injected through `AppState`, never
//! reached through a global.

pub mod mem;

use async_trait::async_trait;

use runmetrics_core::error::Result;
use runmetrics_core::MetricUpdate;

pub use mem::MemStorage;

#[async_trait]
pub trait Storage: Send + Sync {
    /// Merge one validated update. Gauges overwrite, counters accumulate.
    async fn apply(&self, update: MetricUpdate) -> Result<()>;

    async fn gauge(&self, name: &str) -> Option<f64>;

    async fn counter(&self, name: &str) -> Option<i64>;

    /// Validate raw segments and apply them. Nothing is stored on error.
    async fn update(&self, kind: &str, name: &str, raw: &str) -> Result<()> {
        let update = MetricUpdate::parse(kind, name, raw)?;
        self.apply(update).await
    }
}
