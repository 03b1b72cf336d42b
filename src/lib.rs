//! Library Cache - library records service with a read-through TTL cache
//!
//! Books and readers live in an in-memory record store; hot lookups and list
//! queries are served from a thread-safe cache whose entries expire a fixed
//! TTL after they were written and are dropped by write operations.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use cache::TtlCache;
pub use config::Config;
