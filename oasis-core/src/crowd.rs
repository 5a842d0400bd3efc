//! Rule-based crowd estimation.
//!
//! The estimate is built in three passes over a clamped level:
//!
//! 1. a base level from the hour of day;
//! 2. the category's [`CrowdRule`];
//! 3. the heat rule: places flagged as heat refuges fill up above
//!    [`HEAT_THRESHOLD_C`].
//!
//! Levels saturate at [`CrowdLevel::Low`] and [`CrowdLevel::High`]; no pass
//! wraps around.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Category, CrowdRule};

/// Ambient temperature above which heat refuges are assumed packed.
pub const HEAT_THRESHOLD_C: f64 = 30.0;

/// Coarse occupancy estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CrowdLevel {
    /// Few visitors.
    #[serde(rename = "Faible")]
    Low,
    /// Moderate attendance.
    #[serde(rename = "Moyen")]
    Medium,
    /// Busy.
    #[serde(rename = "Élevé")]
    High,
}

impl CrowdLevel {
    /// Every level, quietest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Position of the level on the `0..=2` scale.
    ///
    /// # Examples
    /// ```
    /// use oasis_core::CrowdLevel;
    ///
    /// assert_eq!(CrowdLevel::Medium.index(), 1);
    /// ```
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }

    /// One level busier, saturating at [`CrowdLevel::High`].
    #[must_use]
    pub const fn raised(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium | Self::High => Self::High,
        }
    }

    /// One level quieter, saturating at [`CrowdLevel::Low`].
    #[must_use]
    pub const fn lowered(self) -> Self {
        match self {
            Self::High => Self::Medium,
            Self::Medium | Self::Low => Self::Low,
        }
    }

    /// Return the feed label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Faible",
            Self::Medium => "Moyen",
            Self::High => "Élevé",
        }
    }
}

impl std::fmt::Display for CrowdLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known [`CrowdLevel`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown crowd level '{0}'")]
pub struct ParseCrowdLevelError(pub String);

impl std::str::FromStr for CrowdLevel {
    type Err = ParseCrowdLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "faible" | "low" => Ok(Self::Low),
            "moyen" | "medium" => Ok(Self::Medium),
            "élevé" | "high" => Ok(Self::High),
            _ => Err(ParseCrowdLevelError(s.to_owned())),
        }
    }
}

/// Base crowd level for an hour of the 24-hour clock.
///
/// Mornings (8–10) are quiet, lunch (12–14) and the evening commute (18–19)
/// are busy, the afternoon (15–17) is moderate, everything else is quiet.
///
/// # Examples
/// ```
/// use oasis_core::{CrowdLevel, time_of_day_base};
///
/// assert_eq!(time_of_day_base(13), CrowdLevel::High);
/// assert_eq!(time_of_day_base(16), CrowdLevel::Medium);
/// assert_eq!(time_of_day_base(23), CrowdLevel::Low);
/// ```
#[must_use]
pub const fn time_of_day_base(hour: u32) -> CrowdLevel {
    match hour {
        12..=14 | 18..=19 => CrowdLevel::High,
        15..=17 => CrowdLevel::Medium,
        _ => CrowdLevel::Low,
    }
}

const fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

fn apply_category_rule(level: CrowdLevel, rule: CrowdRule, hour: u32, weekend: bool) -> CrowdLevel {
    match rule {
        CrowdRule::WeekendDaytimeBoost if weekend && (10..=18).contains(&hour) => level.raised(),
        CrowdRule::Calm => level.lowered(),
        CrowdRule::WeekendDaytimeBoost | CrowdRule::Neutral => level,
    }
}

fn apply_heat_rule(level: CrowdLevel, heat_refuge: bool, ambient: f64) -> CrowdLevel {
    if heat_refuge && ambient > HEAT_THRESHOLD_C {
        CrowdLevel::High
    } else {
        level
    }
}

/// Estimate the crowd level from explicit hour and weekend flags.
///
/// `hour` is taken on the 24-hour clock; values outside `0..=23` are treated
/// like night hours.
#[must_use]
pub fn crowd_level_at(hour: u32, weekend: bool, category: Category, ambient: f64) -> CrowdLevel {
    let policy = category.policy();
    let base = time_of_day_base(hour);
    let adjusted = apply_category_rule(base, policy.crowd, hour, weekend);
    apply_heat_rule(adjusted, policy.heat_refuge, ambient)
}

/// Estimate the crowd level at a given local moment.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use oasis_core::{Category, CrowdLevel, estimate_crowd};
///
/// // A Wednesday lunchtime during a heatwave.
/// let moment = NaiveDate::from_ymd_opt(2025, 7, 16)
///     .and_then(|d| d.and_hms_opt(13, 0, 0))
///     .expect("valid moment");
/// assert_eq!(estimate_crowd(moment, Category::CulturalSite, 35.0), CrowdLevel::High);
/// ```
#[must_use]
pub fn estimate_crowd(moment: NaiveDateTime, category: Category, ambient: f64) -> CrowdLevel {
    crowd_level_at(
        moment.hour(),
        is_weekend(moment.weekday()),
        category,
        ambient,
    )
}
