//! Comfort scoring for enriched locations.
//!
//! The [`ComfortScorer`] trait rates how pleasant a location is expected to
//! be on a `1.0..=10.0` scale given its temperature differential, amenities
//! and crowd level. [`HeuristicComfortScorer`] is the engine's default.

use crate::{Amenities, Amenity, CrowdLevel, round_to_tenth};

/// Lowest comfort score.
pub const MIN_COMFORT: f64 = 1.0;
/// Highest comfort score.
pub const MAX_COMFORT: f64 = 10.0;

/// Rate a location's comfort.
///
/// Implementations must be stateless with respect to scoring: identical
/// inputs yield identical scores. They must return finite values within
/// [`MIN_COMFORT`]`..=`[`MAX_COMFORT`] with one-decimal precision; use
/// [`ComfortScorer::sanitise`] to apply the range guard.
///
/// # Examples
///
/// ```rust
/// use oasis_core::{Amenities, ComfortScorer, CrowdLevel};
///
/// struct Flat;
///
/// impl ComfortScorer for Flat {
///     fn score(&self, _temp_diff: f64, _amenities: &Amenities, _crowd: CrowdLevel) -> f64 {
///         Self::sanitise(42.0)
///     }
/// }
///
/// assert_eq!(Flat.score(-3.0, &Amenities::new(), CrowdLevel::Low), 10.0);
/// ```
pub trait ComfortScorer: Send + Sync {
    /// Return the comfort score for a location.
    fn score(&self, temp_diff: f64, amenities: &Amenities, crowd: CrowdLevel) -> f64;

    /// Clamp a raw score into range.
    ///
    /// Returns [`MIN_COMFORT`] for non-finite values.
    fn sanitise(score: f64) -> f64 {
        if !score.is_finite() {
            return MIN_COMFORT;
        }
        score.clamp(MIN_COMFORT, MAX_COMFORT)
    }
}

/// Tunable weights of [`HeuristicComfortScorer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComfortWeights {
    /// Score before any adjustment.
    pub base: f64,
    /// Score gained per degree below ambient.
    pub per_degree: f64,
    /// Bonus when potable water is available.
    pub drinking_water_bonus: f64,
    /// Bonus when the place is air-conditioned.
    pub air_conditioning_bonus: f64,
    /// Penalty when the crowd level is high.
    pub crowded_penalty: f64,
    /// Bonus when the crowd level is low.
    pub quiet_bonus: f64,
}

impl Default for ComfortWeights {
    fn default() -> Self {
        Self {
            base: 5.0,
            per_degree: 0.5,
            drinking_water_bonus: 1.0,
            air_conditioning_bonus: 2.0,
            crowded_penalty: 0.5,
            quiet_bonus: 0.5,
        }
    }
}

/// Additive comfort heuristic.
///
/// `base + |temp_diff| * per_degree`, plus amenity bonuses, plus or minus
/// the crowd adjustment, rounded to one decimal and clamped.
///
/// # Examples
/// ```
/// use oasis_core::{Amenities, Amenity, ComfortScorer, CrowdLevel, HeuristicComfortScorer};
///
/// let amenities: Amenities = [Amenity::DrinkingWater].into_iter().collect();
/// let score = HeuristicComfortScorer::default().score(-4.0, &amenities, CrowdLevel::Medium);
/// assert_eq!(score, 8.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeuristicComfortScorer {
    weights: ComfortWeights,
}

impl HeuristicComfortScorer {
    /// Build a scorer with custom weights.
    #[must_use]
    pub const fn new(weights: ComfortWeights) -> Self {
        Self { weights }
    }

    /// The weights in use.
    #[must_use]
    pub const fn weights(&self) -> ComfortWeights {
        self.weights
    }

    fn crowd_adjustment(&self, crowd: CrowdLevel) -> f64 {
        match crowd {
            CrowdLevel::High => -self.weights.crowded_penalty,
            CrowdLevel::Medium => 0.0,
            CrowdLevel::Low => self.weights.quiet_bonus,
        }
    }
}

impl ComfortScorer for HeuristicComfortScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "comfort is an additive float heuristic"
    )]
    fn score(&self, temp_diff: f64, amenities: &Amenities, crowd: CrowdLevel) -> f64 {
        let w = self.weights;
        let mut raw = w.base + temp_diff.abs() * w.per_degree;
        if amenities.contains(Amenity::DrinkingWater) {
            raw += w.drinking_water_bonus;
        }
        if amenities.contains(Amenity::AirConditioning) {
            raw += w.air_conditioning_bonus;
        }
        raw += self.crowd_adjustment(crowd);
        Self::sanitise(round_to_tenth(raw))
    }
}
