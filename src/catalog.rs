//! The celestial catalog: fixed planet and star records.
//!
//! The catalog is built once at process start and shared read-only for the
//! process lifetime. Both sequences keep their seed order, and every name is
//! unique under case-insensitive comparison, so a linear first-match scan is
//! a complete lookup strategy.

use std::sync::{Arc, OnceLock};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A planet of the solar system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    /// Planet name, unique within the catalog (case-insensitive)
    pub name: String,
    /// Mean distance from the star, in kilometers
    pub distance_from_star: f64,
}

/// A star with a measured mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    /// Star name, unique within the catalog (case-insensitive)
    pub name: String,
    /// Stellar mass in solar masses
    pub solar_masses: f64,
}

/// The fixed in-memory set of planet and star records.
#[derive(Debug, Clone)]
pub struct Catalog {
    planets: Vec<Planet>,
    stars: Vec<Star>,
}

impl Catalog {
    /// Build the seeded solar-system catalog.
    ///
    /// Distances are mean orbital distances from the Sun in kilometers;
    /// stellar masses are in solar masses.
    pub fn solar_system() -> Self {
        let planets = vec![
            Planet::new("Mercury", 57_910_000.0),
            Planet::new("Venus", 108_200_000.0),
            Planet::new("Earth", 149_600_000.0),
            Planet::new("Mars", 227_940_000.0),
            Planet::new("Jupiter", 778_330_000.0),
            Planet::new("Saturn", 1_429_400_000.0),
            Planet::new("Uranus", 2_870_990_000.0),
            Planet::new("Neptune", 4_504_300_000.0),
        ];

        let stars = vec![
            Star::new("Sun", 1.0),
            Star::new("Proxima Centauri", 0.1221),
            Star::new("Sirius", 2.063),
            Star::new("Vega", 2.135),
            Star::new("Betelgeuse", 16.5),
            Star::new("Rigel", 21.0),
        ];

        Self { planets, stars }
    }

    /// All planets, in seed order.
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// All stars, in seed order.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Look up a planet by name, ignoring ASCII case. Returns the first match.
    pub fn find_planet(&self, name: &str) -> Option<&Planet> {
        self.planets
            .iter()
            .find(|planet| planet.name.eq_ignore_ascii_case(name))
    }

    /// Look up a star by name, ignoring ASCII case. Returns the first match.
    pub fn find_star(&self, name: &str) -> Option<&Star> {
        self.stars
            .iter()
            .find(|star| star.name.eq_ignore_ascii_case(name))
    }
}

impl Planet {
    pub fn new(name: impl Into<String>, distance_from_star: f64) -> Self {
        Self {
            name: name.into(),
            distance_from_star,
        }
    }
}

impl Star {
    pub fn new(name: impl Into<String>, solar_masses: f64) -> Self {
        Self {
            name: name.into(),
            solar_masses,
        }
    }
}

/// Global catalog instance initialized once per process.
static CATALOG: OnceLock<Arc<Catalog>> = OnceLock::new();

/// Initialize the global catalog singleton.
pub fn init_catalog() -> Result<()> {
    if CATALOG.get().is_some() {
        return Ok(());
    }

    let _ = CATALOG.set(Arc::new(Catalog::solar_system()));
    Ok(())
}

/// Get a reference to the global catalog instance.
pub fn get_catalog() -> Result<&'static Arc<Catalog>> {
    if CATALOG.get().is_none() {
        let _ = init_catalog();
    }

    CATALOG
        .get()
        .context("Catalog not initialized. Call init_catalog() first.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_counts_and_order() {
        let catalog = Catalog::solar_system();

        assert_eq!(catalog.planets().len(), 8);
        assert_eq!(catalog.stars().len(), 6);

        assert_eq!(catalog.planets()[0].name, "Mercury");
        assert_eq!(catalog.planets()[2].name, "Earth");
        assert_eq!(catalog.planets()[7].name, "Neptune");
        assert_eq!(catalog.stars()[0].name, "Sun");
        assert_eq!(catalog.stars()[5].name, "Rigel");
    }

    #[test]
    fn test_names_distinct_case_insensitive() {
        let catalog = Catalog::solar_system();

        let planet_names: HashSet<String> = catalog
            .planets()
            .iter()
            .map(|p| p.name.to_ascii_lowercase())
            .collect();
        assert_eq!(planet_names.len(), catalog.planets().len());

        let star_names: HashSet<String> = catalog
            .stars()
            .iter()
            .map(|s| s.name.to_ascii_lowercase())
            .collect();
        assert_eq!(star_names.len(), catalog.stars().len());
    }

    #[test]
    fn test_find_planet_any_case() {
        let catalog = Catalog::solar_system();

        let earth = catalog.find_planet("Earth").unwrap();
        assert_eq!(catalog.find_planet("earth"), Some(earth));
        assert_eq!(catalog.find_planet("EARTH"), Some(earth));
        assert_eq!(catalog.find_planet("eArTh"), Some(earth));
        assert_eq!(earth.distance_from_star, 149_600_000.0);
    }

    #[test]
    fn test_find_star_any_case() {
        let catalog = Catalog::solar_system();

        let proxima = catalog.find_star("Proxima Centauri").unwrap();
        assert_eq!(catalog.find_star("proxima centauri"), Some(proxima));
        assert_eq!(catalog.find_star("PROXIMA CENTAURI"), Some(proxima));
    }

    #[test]
    fn test_find_misses() {
        let catalog = Catalog::solar_system();

        assert!(catalog.find_planet("Vulcan").is_none());
        assert!(catalog.find_star("Pluto").is_none());
        // Names never match across catalogs
        assert!(catalog.find_planet("Sirius").is_none());
        assert!(catalog.find_star("Earth").is_none());
    }

    #[test]
    fn test_global_catalog_singleton() {
        init_catalog().unwrap();
        let first = get_catalog().unwrap();
        let second = get_catalog().unwrap();
        assert!(Arc::ptr_eq(first, second));
        assert_eq!(first.planets().len(), 8);
    }

    #[test]
    fn test_planet_serde_round_trip() {
        let earth = Planet::new("Earth", 149_600_000.0);
        let json = serde_json::to_string(&earth).unwrap();
        assert!(json.contains("distanceFromStar"));

        let back: Planet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, earth);
    }

    #[test]
    fn test_star_serde_field_names() {
        let sun = Star::new("Sun", 1.0);
        let value = serde_json::to_value(&sun).unwrap();
        assert_eq!(value["name"], "Sun");
        assert_eq!(value["solarMasses"], 1.0);
    }
}
