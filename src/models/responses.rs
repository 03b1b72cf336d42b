//! Response DTOs for the library API
//!
//! Defines the structure of outgoing HTTP response bodies that are not plain
//! records.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for delete operations (DELETE /books, DELETE /books/:id, ...)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// Number of records removed
    pub deleted: usize,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(kind: &str, deleted: usize) -> Self {
        Self {
            message: format!("{} {}(s) deleted successfully", deleted, kind.to_lowercase()),
            deleted,
        }
    }
}

/// Response body for the stats endpoint (GET /cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of cache writes
    pub sets: u64,
    /// Number of entries removed by invalidation or clear
    pub invalidations: u64,
    /// Current number of physical entries in cache
    pub entries: usize,
    /// Configured TTL in seconds
    pub ttl_seconds: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: CacheStats, ttl_seconds: u64) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            sets: stats.sets,
            invalidations: stats.invalidations,
            entries: stats.entries,
            ttl_seconds,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
