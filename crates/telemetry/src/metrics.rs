//! Authentication metrics.
//!
//! Kept in memory and exposed through the health endpoint.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::LazyLock;
use std::time::Duration;

/// A counter metric.
#[derive(Debug, Default)]
pub struct Counter(AtomicU64);

impl Counter {
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    pub fn inc(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Latency histogram with millisecond buckets.
#[derive(Debug, Default)]
pub struct Histogram {
    /// Buckets: 1ms, 5ms, 10ms, 50ms, 100ms, 200ms, 500ms, 1s, 2s, +Inf
    buckets: [AtomicU64; 10],
    sum: AtomicU64,
    count: AtomicU64,
}

impl Histogram {
    const BUCKET_BOUNDS: [u64; 9] = [1, 5, 10, 50, 100, 200, 500, 1000, 2000];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&self, elapsed: Duration) {
        let ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self.sum.fetch_add(ms, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);

        let idx = Self::BUCKET_BOUNDS
            .iter()
            .position(|&bound| ms <= bound)
            .unwrap_or(Self::BUCKET_BOUNDS.len());
        self.buckets[idx].fetch_add(1, Ordering::Relaxed);
    }

    pub fn mean_ms(&self) -> f64 {
        let count = self.count.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            self.sum.load(Ordering::Relaxed) as f64 / count as f64
        }
    }

    /// Per-bucket counts; the last bucket has no upper bound.
    pub fn buckets(&self) -> Vec<LatencyBucket> {
        Self::BUCKET_BOUNDS
            .iter()
            .map(|&bound| Some(bound))
            .chain(std::iter::once(None))
            .zip(self.buckets.iter())
            .map(|(le_ms, count)| LatencyBucket {
                le_ms,
                count: count.load(Ordering::Relaxed),
            })
            .collect()
    }
}

/// One histogram bucket: requests that took at most `le_ms` milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyBucket {
    pub le_ms: Option<u64>,
    pub count: u64,
}

/// How a request left the authentication middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Token resolved and identity headers stamped.
    Authenticated,
    /// No token, or the token was unknown.
    Anonymous,
    /// Lookup failed and the request was rejected.
    Rejected,
}

/// Authentication metrics registry.
#[derive(Debug, Default)]
pub struct AuthMetrics {
    pub authenticated: Counter,
    pub anonymous: Counter,
    pub rejected: Counter,
    pub latency: Histogram,
}

impl AuthMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, outcome: AuthOutcome, elapsed: Duration) {
        match outcome {
            AuthOutcome::Authenticated => self.authenticated.inc(),
            AuthOutcome::Anonymous => self.anonymous.inc(),
            AuthOutcome::Rejected => self.rejected.inc(),
        }
        self.latency.observe(elapsed);
    }

    pub fn snapshot(&self) -> AuthMetricsSnapshot {
        AuthMetricsSnapshot {
            authenticated: self.authenticated.get(),
            anonymous: self.anonymous.get(),
            rejected: self.rejected.get(),
            latency_mean_ms: self.latency.mean_ms(),
            latency_buckets: self.latency.buckets(),
        }
    }
}

/// Point-in-time view of [`AuthMetrics`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthMetricsSnapshot {
    pub authenticated: u64,
    pub anonymous: u64,
    pub rejected: u64,
    pub latency_mean_ms: f64,
    pub latency_buckets: Vec<LatencyBucket>,
}

static METRICS: LazyLock<AuthMetrics> = LazyLock::new(AuthMetrics::new);

/// Get the global metrics registry.
pub fn metrics() -> &'static AuthMetrics {
    &METRICS
}
