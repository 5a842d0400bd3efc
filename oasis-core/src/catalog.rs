//! Candidate locations: a curated city list plus synthetic spots.
//!
//! The catalog never fails once built. Configuration is checked by
//! [`LocationCatalog::new`] so generation can stay total.

use geo::{Coord, Rect};
use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::{Category, Location};

/// Reference point synthetic spots are scattered around (Clermont-Ferrand).
pub const DEFAULT_CENTRE: Coord<f64> = Coord {
    x: 3.0870,
    y: 45.7772,
};
/// Maximum offset of a synthetic spot from the centre, in degrees per axis.
pub const DEFAULT_RADIUS_DEG: f64 = 0.02;
/// Number of synthetic spots generated per run.
pub const DEFAULT_SYNTHETIC_COUNT: usize = 15;
/// Name prefix of synthetic spots; a `#<n>` counter is appended.
pub const DEFAULT_SYNTHETIC_PREFIX: &str = "Oasis Fraîcheur";

/// Curated places as `(name, lat, lon, category)`.
const CURATED: [(&str, f64, f64, Category); 12] = [
    ("Jardin Lecoq", 45.7709, 3.0885, Category::ParkGarden),
    ("Parc de Montjuzet", 45.7865, 3.0768, Category::ParkGarden),
    ("Square de la Poterne", 45.7788, 3.0847, Category::ParkGarden),
    ("Jardin Botanique de la Charme", 45.8033, 3.1098, Category::ParkGarden),
    ("Musée d'Art Roger Quilliot", 45.7972, 3.1119, Category::CulturalSite),
    ("La Comédie de Clermont", 45.7790, 3.0950, Category::CulturalSite),
    ("Muséum Henri-Lecoq", 45.7705, 3.0890, Category::CulturalSite),
    (
        "Cathédrale Notre-Dame-de-l'Assomption",
        45.7785,
        3.0858,
        Category::PlaceOfWorship,
    ),
    (
        "Basilique Notre-Dame du Port",
        45.7808,
        3.0905,
        Category::PlaceOfWorship,
    ),
    ("Fontaines Place de Jaude", 45.7766, 3.0822, Category::WaterFeature),
    ("Fontaine d'Amboise", 45.7810, 3.0880, Category::WaterFeature),
    (
        "Passage Godefroy de Bouillon",
        45.7776,
        3.0833,
        Category::ShadedPassage,
    ),
];

/// Tunable parameters for synthetic spot generation.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Centre of the generation area.
    pub centre: Coord<f64>,
    /// Maximum offset per axis, in degrees.
    pub radius_deg: f64,
    /// How many synthetic spots to add after the curated list.
    pub synthetic_count: usize,
    /// Name prefix for synthetic spots.
    pub synthetic_prefix: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            centre: DEFAULT_CENTRE,
            radius_deg: DEFAULT_RADIUS_DEG,
            synthetic_count: DEFAULT_SYNTHETIC_COUNT,
            synthetic_prefix: DEFAULT_SYNTHETIC_PREFIX.to_owned(),
        }
    }
}

impl CatalogConfig {
    /// Set the number of synthetic spots.
    #[must_use]
    pub const fn with_synthetic_count(mut self, count: usize) -> Self {
        self.synthetic_count = count;
        self
    }

    /// Set the generation radius in degrees.
    #[must_use]
    pub const fn with_radius(mut self, radius_deg: f64) -> Self {
        self.radius_deg = radius_deg;
        self
    }

    /// Set the generation centre.
    #[must_use]
    pub const fn with_centre(mut self, centre: Coord<f64>) -> Self {
        self.centre = centre;
        self
    }

    /// Set the synthetic name prefix.
    #[must_use]
    pub fn with_synthetic_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.synthetic_prefix = prefix.into();
        self
    }
}

/// Errors returned by [`LocationCatalog::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogConfigError {
    /// The centre coordinate was NaN or infinite.
    #[error("catalog centre must be finite, got ({x}, {y})")]
    NonFiniteCentre {
        /// Longitude supplied.
        x: f64,
        /// Latitude supplied.
        y: f64,
    },
    /// The radius was negative, NaN or infinite.
    #[error("catalog radius must be a finite, non-negative number of degrees, got {radius}")]
    InvalidRadius {
        /// Radius supplied.
        radius: f64,
    },
}

/// Source of candidate locations for one engine run.
///
/// # Examples
/// ```
/// use oasis_core::{CatalogConfig, LocationCatalog};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// # fn main() -> Result<(), oasis_core::CatalogConfigError> {
/// let catalog = LocationCatalog::new(CatalogConfig::default().with_synthetic_count(3))?;
/// let locations = catalog.generate(&mut StdRng::seed_from_u64(1));
/// assert_eq!(locations.len(), LocationCatalog::curated().len() + 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationCatalog {
    config: CatalogConfig,
}

impl LocationCatalog {
    /// Validate `config` and build a catalog.
    ///
    /// # Errors
    /// Returns [`CatalogConfigError`] when the centre is not finite or the
    /// radius is negative or not finite.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogConfigError> {
        let Coord { x, y } = config.centre;
        if !x.is_finite() || !y.is_finite() {
            return Err(CatalogConfigError::NonFiniteCentre { x, y });
        }
        if !config.radius_deg.is_finite() || config.radius_deg < 0.0 {
            return Err(CatalogConfigError::InvalidRadius {
                radius: config.radius_deg,
            });
        }
        Ok(Self { config })
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// The fixed list of real places, in catalog order.
    #[must_use]
    pub fn curated() -> Vec<Location> {
        CURATED
            .iter()
            .map(|&(name, lat, lon, category)| Location::new(name, lat, lon, category))
            .collect()
    }

    /// Area synthetic spots are drawn from.
    #[expect(
        clippy::float_arithmetic,
        reason = "bounding box corners are centre plus or minus the radius"
    )]
    #[must_use]
    pub fn bounds(&self) -> Rect<f64> {
        let Coord { x, y } = self.config.centre;
        let r = self.config.radius_deg;
        Rect::new(Coord { x: x - r, y: y - r }, Coord { x: x + r, y: y + r })
    }

    /// Draw the configured number of synthetic spots.
    ///
    /// Offsets are uniform in `[-radius, radius]` on each axis and the
    /// category is uniform over [`Category::ALL`]. Names carry a counter
    /// starting at 1.
    #[expect(
        clippy::float_arithmetic,
        reason = "synthetic positions are offsets from the centre"
    )]
    pub fn synthetic<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Location> {
        let CatalogConfig {
            centre,
            radius_deg,
            synthetic_count,
            synthetic_prefix,
        } = &self.config;
        (1..=*synthetic_count)
            .map(|n| {
                let lat_offset = rng.gen_range(-radius_deg..=*radius_deg);
                let lon_offset = rng.gen_range(-radius_deg..=*radius_deg);
                // ALL is never empty.
                let category = Category::ALL
                    .choose(&mut *rng)
                    .copied()
                    .unwrap_or(Category::ShadedPassage);
                Location::new(
                    format!("{synthetic_prefix} #{n}"),
                    centre.y + lat_offset,
                    centre.x + lon_offset,
                    category,
                )
            })
            .collect()
    }

    /// The curated list followed by freshly drawn synthetic spots.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Location> {
        let mut locations = Self::curated();
        locations.extend(self.synthetic(rng));
        locations
    }
}
