//! The published dataset and its aggregator.

use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset, NaiveDateTime, ParseError};
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::{AirQualitySnapshot, AmbientConditions, Category, CoolIsland, WeatherSnapshot, round_to_tenth};

/// Schema version stamped on every dataset.
pub const SCHEMA_VERSION: &str = "2.1.0-Live";
/// Default source label stamped on every dataset.
pub const DEFAULT_SOURCE: &str = "Temps Réel (Open-Meteo & Atmo)";

/// Provenance of a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// When the dataset was generated.
    ///
    /// Written as RFC 3339 with offset. Reading also accepts offset-less
    /// ISO-8601, see [`parse_timestamp`].
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<FixedOffset>,
    /// Where the ambient readings came from.
    pub source: String,
    /// Schema version of the feed.
    pub version: String,
}

/// Parse a dataset timestamp.
///
/// RFC 3339 input keeps its offset. Offset-less ISO-8601 input such as
/// `2025-07-12T14:12:09.481516` is read as UTC, so its wall-clock time is
/// unchanged.
///
/// # Errors
/// Returns the RFC 3339 parse error when neither form matches.
///
/// # Examples
/// ```
/// use oasis_core::parse_timestamp;
///
/// let naive = parse_timestamp("2025-07-12T14:12:09.481516").expect("naive form");
/// assert_eq!(naive.to_rfc3339(), "2025-07-12T14:12:09.481516+00:00");
/// ```
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    DateTime::parse_from_rfc3339(raw).or_else(|err| {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc().fixed_offset())
            .map_err(|_| err)
    })
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(de::Error::custom)
}

/// One engine run's output.
///
/// Immutable once assembled; a new run replaces it wholesale.
///
/// # Examples
/// ```
/// use chrono::DateTime;
/// use oasis_core::{Aggregator, AmbientConditions, Dataset};
///
/// let timestamp = DateTime::parse_from_rfc3339("2025-07-16T13:00:00+02:00").expect("valid");
/// let dataset = Aggregator::default().assemble(AmbientConditions::fallback(), Vec::new(), timestamp);
/// let json = dataset.to_json_pretty().expect("serialisable");
/// assert_eq!(Dataset::from_json(&json).expect("parsable"), dataset);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Provenance.
    pub metadata: Metadata,
    /// Ambient weather used for the run.
    pub weather: WeatherSnapshot,
    /// Ambient air quality at the time of the run.
    pub air_quality: AirQualitySnapshot,
    /// Enriched records in generation order.
    pub cool_islands: Vec<CoolIsland>,
}

impl Dataset {
    /// Serialise as indented JSON.
    ///
    /// # Errors
    /// Returns the `serde_json` error if serialisation fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a dataset from JSON.
    ///
    /// # Errors
    /// Returns the `serde_json` error when the input is malformed or does not
    /// match the feed schema.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    /// Distinct categories present, ordered by label.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let present: BTreeSet<Category> = self.cool_islands.iter().map(|i| i.category).collect();
        let mut categories: Vec<Category> = present.into_iter().collect();
        categories.sort_by_key(|c| c.as_str());
        categories
    }

    /// Mean comfort score of `islands`, rounded to one decimal.
    ///
    /// Returns `0.0` for an empty slice.
    #[expect(clippy::float_arithmetic, reason = "mean of float scores")]
    #[must_use]
    pub fn average_comfort<'a, I>(islands: I) -> f64
    where
        I: IntoIterator<Item = &'a CoolIsland>,
    {
        let (sum, count) = islands
            .into_iter()
            .fold((0.0_f64, 0.0_f64), |(sum, count), island| {
                (sum + island.comfort_score, count + 1.0)
            });
        if count < 1.0 {
            return 0.0;
        }
        round_to_tenth(sum / count)
    }
}

/// Assembles enriched records and snapshots into a [`Dataset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregator {
    source: String,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE)
    }
}

impl Aggregator {
    /// Build an aggregator stamping `source` on its datasets.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Source label stamped on datasets.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Bundle `cool_islands` with the ambient snapshots.
    ///
    /// Records are kept in the order given; nothing is filtered or sorted.
    #[must_use]
    pub fn assemble(
        &self,
        conditions: AmbientConditions,
        cool_islands: Vec<CoolIsland>,
        timestamp: DateTime<FixedOffset>,
    ) -> Dataset {
        let AmbientConditions {
            weather,
            air_quality,
        } = conditions;
        Dataset {
            metadata: Metadata {
                timestamp,
                source: self.source.clone(),
                version: SCHEMA_VERSION.to_owned(),
            },
            weather,
            air_quality,
            cool_islands,
        }
    }
}
