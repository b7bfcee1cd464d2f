//! HTTP server module for the celestial catalog.
//!
//! This module provides an axum-based HTTP server that exposes the catalog
//! as a read-only REST API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Route dispatch                                         │
//! │  - JSON serialization (pretty-printed)                    │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Catalog (catalog.rs)                                     │
//! │  - Immutable seeded records                               │
//! │  - Case-insensitive name lookups                          │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
