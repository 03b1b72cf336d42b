//! Cache Store Module
//!
//! Thread-safe key-value cache with a uniform TTL and lazy expiration.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};

use crate::cache::entry::CacheEntry;
use crate::cache::observer::{CacheObserver, TracingObserver};
use crate::cache::stats::{CacheStats, StatsCounters};

// == TTL Cache ==
/// In-process cache where every entry expires a fixed TTL after it was set.
///
/// A single reader-writer lock guards the whole map: `get` takes the shared
/// lock, every mutation takes the exclusive lock. Expired entries are skipped
/// by `get` but stay in the map until a write path (`set`, `invalidate`,
/// `invalidate_pattern`, `clear`) reclaims them. There is no background
/// sweeper.
pub struct TtlCache<V> {
    /// Key-value storage
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
    /// Uniform expiration offset for every entry
    ttl: Duration,
    /// Traffic counters
    stats: StatsCounters,
    /// Operation hook
    observer: Arc<dyn CacheObserver>,
}

impl<V: Clone> TtlCache<V> {
    // == Constructor ==
    /// Creates an empty cache that logs through `tracing`.
    ///
    /// A TTL of 0 is accepted; such a cache never returns a hit.
    pub fn new(ttl_seconds: u64) -> Self {
        Self::with_observer(ttl_seconds, Arc::new(TracingObserver))
    }

    /// Creates an empty cache reporting to the given observer.
    pub fn with_observer(ttl_seconds: u64, observer: Arc<dyn CacheObserver>) -> Self {
        let ttl = Duration::from_secs(ttl_seconds);
        observer.on_create(ttl);

        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            stats: StatsCounters::default(),
            observer,
        }
    }

    // == Set ==
    /// Inserts or overwrites `key`, resetting its expiration to now + TTL.
    pub fn set(&self, key: impl Into<String>, value: V) {
        let key = key.into();
        let entry = CacheEntry::new(value, Instant::now(), self.ttl);

        self.write_entries().insert(key.clone(), entry);

        self.stats.record_set();
        self.observer.on_set(&key, self.ttl);
    }

    // == Get ==
    /// Returns a clone of the value for `key` if present and not expired.
    ///
    /// Expired entries are treated as absent but are not removed here.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        let lookup = {
            let entries = self.read_entries();
            entries
                .get(key)
                .map(|entry| entry.is_live_at(now).then(|| entry.value.clone()))
        };

        match lookup {
            Some(Some(value)) => {
                self.stats.record_hit();
                self.observer.on_hit(key);
                Some(value)
            }
            Some(None) => {
                self.stats.record_miss();
                self.observer.on_expired(key);
                None
            }
            None => {
                self.stats.record_miss();
                self.observer.on_miss(key);
                None
            }
        }
    }

    // == Invalidate ==
    /// Removes `key` if present. Absent keys are a no-op.
    pub fn invalidate(&self, key: &str) {
        let removed = self.write_entries().remove(key).is_some();

        if removed {
            self.stats.record_invalidations(1);
            self.observer.on_invalidate(key);
        }
    }

    // == Invalidate Pattern ==
    /// Removes every entry whose key starts with the literal `prefix`.
    ///
    /// Matching is a plain byte-prefix comparison; no glob or regex syntax is
    /// interpreted.
    pub fn invalidate_pattern(&self, prefix: &str) {
        let removed = {
            let mut entries = self.write_entries();
            let before = entries.len();
            entries.retain(|key, _| !key.starts_with(prefix));
            before - entries.len()
        };

        self.stats.record_invalidations(removed);
        self.observer.on_invalidate_pattern(prefix, removed);
    }

    // == Clear ==
    /// Removes all entries.
    pub fn clear(&self) {
        let removed = {
            let mut entries = self.write_entries();
            let count = entries.len();
            entries.clear();
            count
        };

        self.stats.record_invalidations(removed);
        self.observer.on_clear(removed);
    }

    // == Introspection ==
    /// Number of physical entries, including expired ones not yet reclaimed.
    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    /// Returns true if the map holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    /// The TTL applied to every entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len())
    }

    // The map has no cross-entry invariant a panicking holder could break,
    // so a poisoned lock is recovered rather than propagated.
    fn read_entries(&self) -> RwLockReadGuard<'_, HashMap<String, CacheEntry<V>>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, HashMap<String, CacheEntry<V>>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V> fmt::Debug for TtlCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtlCache")
            .field("ttl", &self.ttl)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
