//! Candidate locations before enrichment.

use geo::Coord;

use crate::Category;

/// A candidate cool island before enrichment.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use oasis_core::{Category, Location};
///
/// let location = Location::new("Jardin Lecoq", 45.7709, 3.0885, Category::ParkGarden);
/// assert_eq!(location.lat(), 45.7709);
/// assert_eq!(location.lon(), 3.0885);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Human-readable name, unique within a generation run.
    pub name: String,
    /// Geospatial position.
    pub position: Coord<f64>,
    /// Kind of place.
    pub category: Category,
}

impl Location {
    /// Construct a location from latitude and longitude.
    #[must_use]
    pub fn new(name: impl Into<String>, lat: f64, lon: f64, category: Category) -> Self {
        Self {
            name: name.into(),
            position: Coord { x: lon, y: lat },
            category,
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.position.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn lon(&self) -> f64 {
        self.position.x
    }
}
