//! Data Transfer Objects for the HTTP API.
//!
//! The catalog records already derive Serialize/Deserialize with the wire
//! field names, so they are re-exported here and used directly as response
//! bodies.

use serde::{Deserialize, Serialize};

pub use crate::catalog::{Planet, Star};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Crate version
    pub version: String,
    /// Number of planets in the catalog
    pub planets: usize,
    /// Number of stars in the catalog
    pub stars: usize,
}
