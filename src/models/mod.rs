//! Record, request and response models for the library API
//!
//! This module defines the stored records and the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod records;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use records::{Book, Reader};
pub use requests::{BookRequest, ReaderRequest};
pub use responses::{DeleteResponse, HealthResponse, StatsResponse};
