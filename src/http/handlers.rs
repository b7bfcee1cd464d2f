//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the catalog
//! for lookups. Collection handlers clone the records into the response;
//! the catalog is small and fixed, so this stays cheap.

use axum::extract::{Path, State};

use super::dto::{HealthResponse, Planet, Star};
use super::error::AppError;
use super::response::PrettyJson;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<PrettyJson<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running and the catalog
/// is seeded.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(PrettyJson(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        planets: state.catalog.planets().len(),
        stars: state.catalog.stars().len(),
    }))
}

/// GET /stars
///
/// List all stars in seed order.
pub async fn list_stars(State(state): State<AppState>) -> HandlerResult<Vec<Star>> {
    Ok(PrettyJson(state.catalog.stars().to_vec()))
}

/// GET /stars/{name}
///
/// Look up a single star by name, ignoring case.
pub async fn get_star(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> HandlerResult<Star> {
    let star = state
        .catalog
        .find_star(&name)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Star not found.".to_string()))?;

    Ok(PrettyJson(star))
}

/// GET /planets
///
/// List all planets in seed order.
pub async fn list_planets(State(state): State<AppState>) -> HandlerResult<Vec<Planet>> {
    Ok(PrettyJson(state.catalog.planets().to_vec()))
}

/// GET /planets/{name}
///
/// Look up a single planet by name, ignoring case.
pub async fn get_planet(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> HandlerResult<Planet> {
    let planet = state
        .catalog
        .find_planet(&name)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Planet not found.".to_string()))?;

    Ok(PrettyJson(planet))
}
