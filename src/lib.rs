//! # Astro Catalog
//!
//! A small read-only REST API over a fixed celestial catalog.
//!
//! This crate serves two immutable, in-memory datasets — the planets of the
//! solar system and a handful of well-known stars — over HTTP as JSON. The
//! catalog is seeded once at startup and never mutated, so request handling
//! needs no locking of any kind.
//!
//! ## Architecture
//!
//! The crate is organized into a few logical modules:
//!
//! - [`catalog`]: the seeded planet/star records and name lookups
//! - [`config`]: server configuration from environment variables
//! - [`http`]: axum-based HTTP server, router, and request handlers
//!

pub mod catalog;
pub mod config;
pub mod http;
