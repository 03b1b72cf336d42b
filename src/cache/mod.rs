//! Cache Module
//!
//! Provides an in-memory, thread-safe cache with uniform TTL expiration and
//! prefix-based bulk invalidation.

mod entry;
pub mod keys;
mod observer;
mod stats;
mod store;


// Re-export public types
pub use observer::{CacheObserver, NoopObserver, TracingObserver};
pub use stats::CacheStats;
pub use store::TtlCache;
