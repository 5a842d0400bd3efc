//! Core domain types and scoring engine for Oasis.
//!
//! Oasis estimates which places in a city stay cooler than ambient during a
//! heat event. A run takes resolved [`AmbientConditions`], enriches every
//! catalog location with a temperature differential, amenities, a crowd
//! estimate and a comfort score, and aggregates the records into a
//! [`Dataset`].
//!
//! Randomness and wall-clock time are injected so runs can be reproduced:
//!
//! ```
//! use chrono::DateTime;
//! use oasis_core::{AmbientConditions, CoolIslandEngine, DatasetQuery, FixedClock, LocationCatalog};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let clock = FixedClock::new(DateTime::parse_from_rfc3339("2025-07-12T11:00:00+02:00").expect("valid"));
//! let engine = CoolIslandEngine::new(LocationCatalog::default());
//! let dataset = engine.run(AmbientConditions::fallback(), &clock, &mut StdRng::seed_from_u64(42));
//! let coolest = DatasetQuery::default().coolest(&dataset.cool_islands);
//! assert!(coolest.len() <= 5);
//! ```

#![forbid(unsafe_code)]

mod amenity;
mod catalog;
mod category;
mod clock;
mod comfort;
mod crowd;
mod dataset;
mod differential;
mod engine;
mod location;
mod numeric;
mod query;
mod record;
mod snapshot;
pub mod test_support;

pub use amenity::{
    AMENITY_POOL, Amenities, Amenity, MAX_DRAWN_AMENITIES, MIN_DRAWN_AMENITIES, ParseAmenityError,
    assign_amenities,
};
pub use catalog::{
    CatalogConfig, CatalogConfigError, DEFAULT_CENTRE, DEFAULT_RADIUS_DEG, DEFAULT_SYNTHETIC_COUNT,
    DEFAULT_SYNTHETIC_PREFIX, LocationCatalog,
};
pub use category::{Category, CategoryPolicy, CrowdRule, DiffRange, ParseCategoryError};
pub use clock::{Clock, FixedClock, SystemClock};
pub use comfort::{ComfortScorer, ComfortWeights, HeuristicComfortScorer, MAX_COMFORT, MIN_COMFORT};
pub use crowd::{
    CrowdLevel, HEAT_THRESHOLD_C, ParseCrowdLevelError, crowd_level_at, estimate_crowd,
    time_of_day_base,
};
pub use dataset::{Aggregator, DEFAULT_SOURCE, Dataset, Metadata, SCHEMA_VERSION, parse_timestamp};
pub use differential::TemperatureDifferential;
pub use engine::CoolIslandEngine;
pub use location::Location;
pub use numeric::round_to_tenth;
pub use query::{DEFAULT_LIMIT, DEFAULT_MIN_COMFORT, DatasetQuery};
pub use record::CoolIsland;
pub use snapshot::{
    AirQualitySnapshot, AmbientConditions, FALLBACK_AIR_DESCRIPTION, FALLBACK_AQI,
    FALLBACK_SOURCE, FALLBACK_TEMPERATURE_C, FALLBACK_WEATHER_STATUS, OfflineSnapshotProvider,
    Pollutants, SnapshotError, SnapshotProvider, Snapshots, WeatherSnapshot,
};
