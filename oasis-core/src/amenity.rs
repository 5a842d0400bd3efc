//! Facility tags and the randomised amenity assigner.

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Category;

/// Fewest amenities drawn for a location before forced inclusions.
pub const MIN_DRAWN_AMENITIES: usize = 1;
/// Most amenities drawn for a location before forced inclusions.
pub const MAX_DRAWN_AMENITIES: usize = 4;

/// A facility a cool island may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Amenity {
    /// Public seating.
    #[serde(rename = "Bancs")]
    Benches,
    /// Tree or canopy shade.
    #[serde(rename = "Ombre")]
    Shade,
    /// Potable water tap or fountain.
    #[serde(rename = "Eau Potable")]
    DrinkingWater,
    /// Public toilets.
    #[serde(rename = "Toilettes")]
    Toilets,
    /// Free wireless access.
    #[serde(rename = "Wifi")]
    Wifi,
    /// Children's playground.
    #[serde(rename = "Jeu pour enfants")]
    Playground,
    /// Air-conditioned interior.
    #[serde(rename = "Climatisation")]
    AirConditioning,
}

/// The fixed pool amenities are sampled from.
pub const AMENITY_POOL: [Amenity; 7] = [
    Amenity::Benches,
    Amenity::Shade,
    Amenity::DrinkingWater,
    Amenity::Toilets,
    Amenity::Wifi,
    Amenity::Playground,
    Amenity::AirConditioning,
];

impl Amenity {
    /// Return the feed label for this amenity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Benches => "Bancs",
            Self::Shade => "Ombre",
            Self::DrinkingWater => "Eau Potable",
            Self::Toilets => "Toilettes",
            Self::Wifi => "Wifi",
            Self::Playground => "Jeu pour enfants",
            Self::AirConditioning => "Climatisation",
        }
    }
}

impl std::fmt::Display for Amenity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known [`Amenity`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown amenity '{0}'")]
pub struct ParseAmenityError(pub String);

impl std::str::FromStr for Amenity {
    type Err = ParseAmenityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AMENITY_POOL
            .into_iter()
            .find(|amenity| amenity.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseAmenityError(s.to_owned()))
    }
}

/// Set of amenities offered by a location.
///
/// Duplicates are impossible and iteration follows pool order, which keeps
/// serialised output stable.
///
/// # Examples
/// ```
/// use oasis_core::{Amenities, Amenity};
///
/// let amenities: Amenities = [Amenity::Shade, Amenity::Shade].into_iter().collect();
/// assert_eq!(amenities.len(), 1);
/// assert!(amenities.contains(Amenity::Shade));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amenities(BTreeSet<Amenity>);

impl Amenities {
    /// Construct an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Report whether `amenity` is present.
    #[must_use]
    pub fn contains(&self, amenity: Amenity) -> bool {
        self.0.contains(&amenity)
    }

    /// Add an amenity, returning `true` when it was not already present.
    pub fn insert(&mut self, amenity: Amenity) -> bool {
        self.0.insert(amenity)
    }

    /// Number of amenities in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Report whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the amenities in pool order.
    pub fn iter(&self) -> impl Iterator<Item = Amenity> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Amenity> for Amenities {
    fn from_iter<I: IntoIterator<Item = Amenity>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Draw a random amenity set for a location of `category`.
///
/// Between [`MIN_DRAWN_AMENITIES`] and [`MAX_DRAWN_AMENITIES`] distinct tags
/// are sampled without replacement, then the category's forced amenity is
/// added if it was not drawn. The result may therefore hold one more tag than
/// the nominal maximum.
///
/// # Examples
/// ```
/// use oasis_core::{Amenity, Category, assign_amenities};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let amenities = assign_amenities(Category::CulturalSite, &mut rng);
/// assert!(amenities.contains(Amenity::AirConditioning));
/// ```
pub fn assign_amenities<R: Rng + ?Sized>(category: Category, rng: &mut R) -> Amenities {
    let count = rng.gen_range(MIN_DRAWN_AMENITIES..=MAX_DRAWN_AMENITIES);
    let mut amenities: Amenities = AMENITY_POOL.choose_multiple(rng, count).copied().collect();
    if let Some(forced) = category.policy().forced_amenity {
        amenities.insert(forced);
    }
    amenities
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    #[rstest]
    #[case(Category::ParkGarden)]
    #[case(Category::CulturalSite)]
    #[case(Category::PlaceOfWorship)]
    #[case(Category::ShadedPassage)]
    #[case(Category::WaterFeature)]
    fn draws_within_bounds(#[case] category: Category) {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..200 {
            let amenities = assign_amenities(category, &mut rng);
            assert!(amenities.len() >= MIN_DRAWN_AMENITIES);
            assert!(amenities.len() <= MAX_DRAWN_AMENITIES + 1);
        }
    }

    #[rstest]
    #[case(Category::WaterFeature, Amenity::DrinkingWater)]
    #[case(Category::CulturalSite, Amenity::AirConditioning)]
    fn forces_category_amenity(#[case] category: Category, #[case] forced: Amenity) {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..200 {
            assert!(assign_amenities(category, &mut rng).contains(forced));
        }
    }

    #[test]
    fn same_seed_gives_same_amenities() {
        let mut first = ChaCha8Rng::seed_from_u64(99);
        let mut second = ChaCha8Rng::seed_from_u64(99);
        assert_eq!(
            assign_amenities(Category::ParkGarden, &mut first),
            assign_amenities(Category::ParkGarden, &mut second)
        );
    }

    #[test]
    fn serialises_as_label_array_in_pool_order() {
        let amenities: Amenities = [Amenity::AirConditioning, Amenity::Benches]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&amenities).unwrap();
        assert_eq!(json, r#"["Bancs","Climatisation"]"#);
    }

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("eau potable".parse(), Ok(Amenity::DrinkingWater));
        assert!("Piscine".parse::<Amenity>().is_err());
    }
}
