//! Cache Observer Module
//!
//! Injectable hook notified of every cache operation. The cache itself never
//! logs; the observer it was built with decides what to do with each event.

use std::time::Duration;

use tracing::{debug, info};

// == Observer Trait ==
/// Receives a notification for each cache operation.
///
/// All methods default to doing nothing, so implementors only override the
/// events they care about.
pub trait CacheObserver: Send + Sync {
    /// The cache was constructed.
    fn on_create(&self, _ttl: Duration) {}

    /// `key` was written and will expire after `ttl`.
    fn on_set(&self, _key: &str, _ttl: Duration) {}

    /// `key` was read and a live value returned.
    fn on_hit(&self, _key: &str) {}

    /// `key` was read but is not in the map.
    fn on_miss(&self, _key: &str) {}

    /// `key` was read but its entry has expired.
    fn on_expired(&self, _key: &str) {}

    /// `key` was present and has been removed.
    fn on_invalidate(&self, _key: &str) {}

    /// `removed` entries starting with `prefix` were dropped.
    fn on_invalidate_pattern(&self, _prefix: &str, _removed: usize) {}

    /// All `removed` entries were dropped.
    fn on_clear(&self, _removed: usize) {}
}

// == Noop Observer ==
/// Ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl CacheObserver for NoopObserver {}

// == Tracing Observer ==
/// Logs cache operations through `tracing`.
///
/// Per-key traffic goes to `debug`; bulk maintenance goes to `info`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl CacheObserver for TracingObserver {
    fn on_create(&self, ttl: Duration) {
        info!("Cache initialized with TTL: {} seconds", ttl.as_secs());
    }

    fn on_set(&self, key: &str, ttl: Duration) {
        debug!(key, "Cache SET (expires in {} seconds)", ttl.as_secs());
    }

    fn on_hit(&self, key: &str) {
        debug!(key, "Cache GET (HIT)");
    }

    fn on_miss(&self, key: &str) {
        debug!(key, "Cache GET (MISS)");
    }

    fn on_expired(&self, key: &str) {
        debug!(key, "Cache GET (EXPIRED)");
    }

    fn on_invalidate(&self, key: &str) {
        debug!(key, "Cache INVALIDATE");
    }

    fn on_invalidate_pattern(&self, prefix: &str, removed: usize) {
        if removed > 0 {
            info!(prefix, "Cache INVALIDATE PATTERN: invalidated {} entries", removed);
        }
    }

    fn on_clear(&self, removed: usize) {
        info!("Cache CLEAR: cleared {} entries", removed);
    }
}
