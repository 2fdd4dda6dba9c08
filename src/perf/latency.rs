use std::time::{Duration, Instant};

use serde::Serialize;

/// Collects the isolated duration of individual sort calls.
///
/// The driver's per-run total includes selection, rendering and the
/// inter-iteration delay; this tracker holds only the time spent inside
/// `SortStrategy::sort`.
pub struct SortTimer {
    /// Nanoseconds per recorded call
    samples: Vec<u64>,
}

impl SortTimer {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub fn record<F, R>(&mut self, op: F) -> R
    where
        F: FnOnce() -> R,
    {
        let start = Instant::now();
        let result = op();
        let elapsed = start.elapsed();

        self.samples
            .push(u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX));

        result
    }

    pub fn last(&self) -> Option<Duration> {
        self.samples.last().map(|&ns| Duration::from_nanos(ns))
    }

    pub fn total(&self) -> Duration {
        Duration::from_nanos(self.samples.iter().sum())
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

/// Sort latency distribution, in nanoseconds
#[derive(Debug, Clone, Serialize)]
pub struct Percentiles {
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub p50: u64,
    pub p95: u64,
    /// tail latency
    pub p99: u64,
}

impl SortTimer {
    pub fn percentiles(&self) -> Option<Percentiles> {
        if self.samples.is_empty() {
            return None;
        }

        let mut sorted = self.samples.clone();
        sorted.sort_unstable();

        let len = sorted.len();
        let sum: u64 = sorted.iter().sum();

        Some(Percentiles {
            min: sorted[0],
            max: sorted[len - 1],
            mean: sum as f64 / len as f64,
            p50: percentile_at(&sorted, 0.50),
            p95: percentile_at(&sorted, 0.95),
            p99: percentile_at(&sorted, 0.99),
        })
    }
}

/// Nearest-rank lookup on an ascending, non-empty sample set
fn percentile_at(sorted: &[u64], p: f64) -> u64 {
    debug_assert!(!sorted.is_empty());
    debug_assert!((0.0..=1.0).contains(&p));

    let index = (p * (sorted.len() - 1) as f64) as usize;
    sorted[index]
}
