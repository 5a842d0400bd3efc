//! Facade crate for the Oasis cool-island engine.
//!
//! This crate re-exports the core domain types and, behind the `live`
//! feature, the HTTP snapshot provider.

#![forbid(unsafe_code)]

pub use oasis_core::{
    AirQualitySnapshot, AmbientConditions, Amenities, Amenity, CatalogConfig, CatalogConfigError,
    Category, Clock, ComfortScorer, CoolIsland, CoolIslandEngine, CrowdLevel, Dataset,
    DatasetQuery, FixedClock, HeuristicComfortScorer, Location, LocationCatalog, Metadata,
    OfflineSnapshotProvider, SnapshotError, SnapshotProvider, Snapshots, SystemClock,
    TemperatureDifferential, WeatherSnapshot,
};

#[cfg(feature = "live")]
pub use oasis_data::{HttpSnapshotProvider, HttpSnapshotProviderConfig, ProviderBuildError};
