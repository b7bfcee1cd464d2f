//! Application state for the HTTP server.

use std::sync::Arc;

use crate::catalog::Catalog;

/// Shared application state passed to all handlers.
///
/// The catalog is immutable after startup, so cloning the state only bumps
/// the reference count.
#[derive(Clone)]
pub struct AppState {
    /// Seeded celestial catalog
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Create a new application state with the given catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}
