//! Cache Entry Module
//!
//! Defines the wrapper stored for every cached value.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A cached payload together with the instant it stops being served.
///
/// Entries are created by `TtlCache::set` and never mutated afterwards;
/// callers only ever see a clone of `value`.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Absolute expiration instant (set time + cache TTL), `None` when the
    /// TTL reaches past what `Instant` can represent
    pub expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry that expires `ttl` after `now`.
    pub fn new(value: V, now: Instant, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: now.checked_add(ttl),
        }
    }

    // == Is Live ==
    /// An entry is live while its expiration lies strictly after `now`.
    pub fn is_live_at(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |expires_at| expires_at > now)
    }
}
