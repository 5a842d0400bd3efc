//! Location categories and the policy table keyed by them.
//!
//! Every category-dependent rule of the engine (temperature differential
//! range, forced amenity, crowd adjustment, heat behaviour) is read from
//! [`Category::policy`], so the table below is the only place those rules are
//! written down.
//!
//! # Examples
//! ```
//! use oasis_core::Category;
//!
//! assert_eq!(Category::WaterFeature.as_str(), "Point d'Eau");
//! assert_eq!(Category::ParkGarden.to_string(), "Parc & Jardin");
//! assert_eq!("cultural-site".parse(), Ok(Category::CulturalSite));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Amenity;

/// Kind of place a cool island belongs to.
///
/// Serialised with the labels used by the published feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Parks and public gardens.
    #[serde(rename = "Parc & Jardin")]
    ParkGarden,
    /// Museums, theatres and other indoor cultural venues.
    #[serde(rename = "Lieu Culturel")]
    CulturalSite,
    /// Churches, basilicas and cathedrals.
    #[serde(rename = "Lieu de Culte")]
    PlaceOfWorship,
    /// Shaded streets, arcades and covered passages.
    #[serde(rename = "Passage Ombragé")]
    ShadedPassage,
    /// Fountains and other water features.
    #[serde(rename = "Point d'Eau")]
    WaterFeature,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::ParkGarden,
        Self::CulturalSite,
        Self::PlaceOfWorship,
        Self::ShadedPassage,
        Self::WaterFeature,
    ];

    /// Return the feed label for this category.
    ///
    /// # Examples
    /// ```
    /// use oasis_core::Category;
    ///
    /// assert_eq!(Category::PlaceOfWorship.as_str(), "Lieu de Culte");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ParkGarden => "Parc & Jardin",
            Self::CulturalSite => "Lieu Culturel",
            Self::PlaceOfWorship => "Lieu de Culte",
            Self::ShadedPassage => "Passage Ombragé",
            Self::WaterFeature => "Point d'Eau",
        }
    }

    /// Return the kebab-case identifier accepted on the command line.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::ParkGarden => "park-garden",
            Self::CulturalSite => "cultural-site",
            Self::PlaceOfWorship => "place-of-worship",
            Self::ShadedPassage => "shaded-passage",
            Self::WaterFeature => "water-feature",
        }
    }

    /// Look up the behaviour policy for this category.
    ///
    /// # Examples
    /// ```
    /// use oasis_core::{Amenity, Category};
    ///
    /// let policy = Category::WaterFeature.policy();
    /// assert_eq!(policy.forced_amenity, Some(Amenity::DrinkingWater));
    /// ```
    #[must_use]
    pub const fn policy(self) -> &'static CategoryPolicy {
        match self {
            Self::ParkGarden => &PARK_GARDEN,
            Self::CulturalSite => &CULTURAL_SITE,
            Self::PlaceOfWorship => &PLACE_OF_WORSHIP,
            Self::ShadedPassage => &SHADED_PASSAGE,
            Self::WaterFeature => &WATER_FEATURE,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct ParseCategoryError(pub String);

impl std::str::FromStr for Category {
    type Err = ParseCategoryError;

    /// Accept either the feed label or the kebab-case slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| {
                category.as_str() == trimmed || category.slug().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ParseCategoryError(s.to_owned()))
    }
}

/// Inclusive range of temperature differentials, in degrees Celsius.
///
/// Both bounds are non-positive; `coolest <= mildest`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffRange {
    /// Largest drop below ambient.
    pub coolest: f64,
    /// Smallest drop below ambient.
    pub mildest: f64,
}

/// Adjustment a category applies to the time-of-day crowd estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrowdRule {
    /// No adjustment.
    Neutral,
    /// One level busier on weekend daytimes.
    WeekendDaytimeBoost,
    /// One level quieter at all times.
    Calm,
}

/// Category-specific behaviour of the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryPolicy {
    /// Range the temperature differential is sampled from.
    pub temp_diff: DiffRange,
    /// Amenity every location of the category must offer.
    pub forced_amenity: Option<Amenity>,
    /// Crowd adjustment applied after the time-of-day base.
    pub crowd: CrowdRule,
    /// Whether the place fills up when ambient heat is extreme.
    pub heat_refuge: bool,
}

const PARK_GARDEN: CategoryPolicy = CategoryPolicy {
    temp_diff: DiffRange {
        coolest: -7.0,
        mildest: -4.0,
    },
    forced_amenity: None,
    crowd: CrowdRule::WeekendDaytimeBoost,
    heat_refuge: false,
};

const CULTURAL_SITE: CategoryPolicy = CategoryPolicy {
    temp_diff: DiffRange {
        coolest: -10.0,
        mildest: -6.0,
    },
    forced_amenity: Some(Amenity::AirConditioning),
    crowd: CrowdRule::Neutral,
    heat_refuge: true,
};

const PLACE_OF_WORSHIP: CategoryPolicy = CategoryPolicy {
    temp_diff: DiffRange {
        coolest: -10.0,
        mildest: -6.0,
    },
    forced_amenity: None,
    crowd: CrowdRule::Calm,
    heat_refuge: false,
};

const SHADED_PASSAGE: CategoryPolicy = CategoryPolicy {
    temp_diff: DiffRange {
        coolest: -4.0,
        mildest: -2.0,
    },
    forced_amenity: None,
    crowd: CrowdRule::Neutral,
    heat_refuge: false,
};

const WATER_FEATURE: CategoryPolicy = CategoryPolicy {
    temp_diff: DiffRange {
        coolest: -5.0,
        mildest: -3.0,
    },
    forced_amenity: Some(Amenity::DrinkingWater),
    crowd: CrowdRule::Neutral,
    heat_refuge: false,
};
