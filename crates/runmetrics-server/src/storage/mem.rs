//! In-memory metric store backed by `DashMap`.
//!
//! Each namespace is its own map. A merge holds the shard lock for its key
//! for the whole read-modify-write, so concurrent counter updates to the same
//! name never lose an increment. A name may live in both namespaces.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use runmetrics_core::error::{Result, RunMetricsError};
use runmetrics_core::{MetricUpdate, MetricValue};

use super::Storage;

#[derive(Debug, Default)]
pub struct MemStorage {
    gauges: DashMap<String, f64>,
    counters: DashMap<String, i64>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            gauges: DashMap::new(),
            counters: DashMap::new(),
        }
    }

    fn set_gauge(&self, name: String, v: f64) {
        self.gauges.insert(name, v);
    }

    fn add_counter(&self, name: String, delta: i64) -> Result<()> {
        match self.counters.entry(name) {
            Entry::Occupied(mut e) => {
                let sum = e
                    .get()
                    .checked_add(delta)
                    .ok_or_else(|| RunMetricsError::CounterOverflow(e.key().clone()))?;
                *e.get_mut() = sum;
            }
            Entry::Vacant(e) => {
                e.insert(delta);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn apply(&self, update: MetricUpdate) -> Result<()> {
        match update.value {
            MetricValue::Gauge(v) => self.set_gauge(update.name, v),
            MetricValue::Counter(d) => self.add_counter(update.name, d)?,
        }
        Ok(())
    }

    async fn gauge(&self, name: &str) -> Option<f64> {
        self.gauges.get(name).map(|r| *r.value())
    }

    async fn counter(&self, name: &str) -> Option<i64> {
        self.counters.get(name).map(|r| *r.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn gauge_last_write_wins() {
        let s = MemStorage::new();
        s.update("gauge", "temp", "36.6").await.unwrap();
        s.update("gauge", "temp", "37.0").await.unwrap();
        assert_eq!(s.gauge("temp").await, Some(37.0));

        // Reapplying the same value is observationally a no-op.
        s.update("gauge", "temp", "37.0").await.unwrap();
        assert_eq!(s.gauge("temp").await, Some(37.0));
    }

    #[tokio::test]
    async fn counter_accumulates_by_name() {
        let s = MemStorage::new();
        for v in ["5", "3", "-1", "10"] {
            s.update("counter", "hits", v).await.unwrap();
        }
        assert_eq!(s.counter("hits").await, Some(17));
        // The raw value is never used as a lookup key.
        assert_eq!(s.counter("10").await, None);
    }

    #[tokio::test]
    async fn counter_is_not_idempotent() {
        let s = MemStorage::new();
        s.update("counter", "hits", "4").await.unwrap();
        s.update("counter", "hits", "4").await.unwrap();
        assert_eq!(s.counter("hits").await, Some(8));
    }

    #[tokio::test]
    async fn namespaces_are_independent() {
        let s = MemStorage::new();
        s.update("gauge", "x", "1.5").await.unwrap();
        s.update("counter", "x", "2").await.unwrap();
        assert_eq!(s.gauge("x").await, Some(1.5));
        assert_eq!(s.counter("x").await, Some(2));
    }

    #[tokio::test]
    async fn failed_updates_do_not_mutate() {
        let s = MemStorage::new();
        s.update("gauge", "temp", "1.0").await.unwrap();

        let err = s.update("gauge", "temp", "notanumber").await.unwrap_err();
        assert!(matches!(err, RunMetricsError::InvalidNumericValue { .. }));
        assert_eq!(s.gauge("temp").await, Some(1.0));

        let err = s.update("histogram", "temp", "2").await.unwrap_err();
        assert!(matches!(err, RunMetricsError::UnsupportedMetricKind(_)));
        assert_eq!(s.gauge("temp").await, Some(1.0));
        assert_eq!(s.counter("temp").await, None);
    }

    #[tokio::test]
    async fn counter_overflow_is_rejected_without_mutation() {
        let s = MemStorage::new();
        s.update("counter", "big", &i64::MAX.to_string()).await.unwrap();
        let err = s.update("counter", "big", "1").await.unwrap_err();
        assert_eq!(err, RunMetricsError::CounterOverflow("big".into()));
        assert_eq!(s.counter("big").await, Some(i64::MAX));
    }
}
