//! Enriched cool-island records.

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::{Amenities, Category, CrowdLevel, Location, TemperatureDifferential};

/// A location with its derived thermal, crowd and comfort attributes.
///
/// Field names follow the published feed, so the category is serialised as
/// `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoolIsland {
    /// Human-readable name.
    pub name: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Kind of place.
    #[serde(rename = "type")]
    pub category: Category,
    /// Degrees relative to ambient; never positive.
    pub temp_diff: f64,
    /// Modelled local temperature.
    pub local_temp: f64,
    /// Estimated occupancy.
    pub crowd_level: CrowdLevel,
    /// Comfort rating in `1.0..=10.0`.
    pub comfort_score: f64,
    /// Facilities on offer.
    pub amenities: Amenities,
}

impl CoolIsland {
    /// Combine a location with its computed attributes.
    #[must_use]
    pub fn from_parts(
        location: Location,
        differential: TemperatureDifferential,
        amenities: Amenities,
        crowd_level: CrowdLevel,
        comfort_score: f64,
    ) -> Self {
        let Location {
            name,
            position,
            category,
        } = location;
        Self {
            name,
            lat: position.y,
            lon: position.x,
            category,
            temp_diff: differential.temp_diff,
            local_temp: differential.local_temp,
            crowd_level,
            comfort_score,
            amenities,
        }
    }

    /// Position as a `geo` coordinate (`x = lon`, `y = lat`).
    #[must_use]
    pub const fn position(&self) -> Coord<f64> {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Amenity;
    use serde_json::json;

    fn island() -> CoolIsland {
        CoolIsland::from_parts(
            Location::new("Fontaine d'Amboise", 45.7810, 3.0880, Category::WaterFeature),
            TemperatureDifferential::from_diff(-4.0, 30.0),
            [Amenity::DrinkingWater, Amenity::Benches].into_iter().collect(),
            CrowdLevel::Medium,
            8.0,
        )
    }

    #[test]
    fn serialises_with_feed_field_names() {
        let value = serde_json::to_value(island()).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Fontaine d'Amboise",
                "lat": 45.7810,
                "lon": 3.0880,
                "type": "Point d'Eau",
                "temp_diff": -4.0,
                "local_temp": 26.0,
                "crowd_level": "Moyen",
                "comfort_score": 8.0,
                "amenities": ["Bancs", "Eau Potable"]
            })
        );
    }

    #[test]
    fn position_round_trips_location() {
        assert_eq!(island().position(), Coord { x: 3.0880, y: 45.7810 });
    }
}
