//! Shape cache metrics and logging setup.
//!
//! Shape generation dominates calculation cost, so the caches report hits,
//! misses, builds and evictions through these counters.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared by the membrane and body caches.
#[derive(Debug, Default)]
pub struct ShapeMetrics {
    hits: AtomicU64,
    misses: AtomicU64,
    builds: AtomicU64,
    invalidations: AtomicU64,
    evictions: AtomicU64,
}

/// Point-in-time copy of [`ShapeMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShapeMetricsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub builds: u64,
    pub invalidations: u64,
    pub evictions: u64,
}

impl ShapeMetricsSnapshot {
    #[must_use]
    pub fn hit_ratio(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }
}

impl ShapeMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a finished shape build and logs a summary every 1000 builds.
    pub fn record_build(&self) {
        let builds = self.builds.fetch_add(1, Ordering::Relaxed) + 1;
        if builds.is_multiple_of(1000) {
            let snapshot = self.snapshot();
            tracing::info!(
                builds = snapshot.builds,
                hits = snapshot.hits,
                misses = snapshot.misses,
                hit_ratio = snapshot.hit_ratio(),
                "Shape cache"
            );
        }
    }

    pub fn record_invalidations(&self, count: u64) {
        self.invalidations.fetch_add(count, Ordering::Relaxed);
    }

    pub fn record_evictions(&self, count: u64) {
        self.evictions.fetch_add(count, Ordering::Relaxed);
    }

    #[must_use]
    pub fn snapshot(&self) -> ShapeMetricsSnapshot {
        ShapeMetricsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            builds: self.builds.load(Ordering::Relaxed),
            invalidations: self.invalidations.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honors `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
