//! Temperature differential model.

use rand::Rng;

use crate::{Category, round_to_tenth};

/// How much cooler a location is than ambient, and the resulting temperature.
///
/// # Examples
/// ```
/// use oasis_core::TemperatureDifferential;
///
/// let diff = TemperatureDifferential::from_diff(-4.3, 31.0);
/// assert_eq!(diff.local_temp, 26.7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureDifferential {
    /// Degrees relative to ambient; never positive.
    pub temp_diff: f64,
    /// `ambient + temp_diff`, rounded to one decimal.
    pub local_temp: f64,
}

impl TemperatureDifferential {
    /// Sample a differential for `category` at the given ambient temperature.
    ///
    /// The differential is drawn uniformly from the category's inclusive
    /// range and rounded to one decimal.
    pub fn sample<R: Rng + ?Sized>(category: Category, ambient: f64, rng: &mut R) -> Self {
        let range = category.policy().temp_diff;
        let raw = rng.gen_range(range.coolest..=range.mildest);
        Self::from_diff(raw, ambient)
    }

    /// Build from a known differential.
    ///
    /// The differential is rounded to one decimal and capped at zero.
    #[expect(
        clippy::float_arithmetic,
        reason = "local temperature is ambient plus the differential"
    )]
    #[must_use]
    pub fn from_diff(temp_diff: f64, ambient: f64) -> Self {
        let rounded = round_to_tenth(temp_diff).min(0.0);
        Self {
            temp_diff: rounded,
            local_temp: round_to_tenth(ambient + rounded),
        }
    }
}
