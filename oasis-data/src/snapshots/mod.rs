//! HTTP snapshot provider backed by Open-Meteo and the ATMO open-data portal.
//!
//! [`HttpSnapshotProvider`] implements the synchronous
//! [`oasis_core::SnapshotProvider`] trait by issuing both requests
//! concurrently on an internal Tokio runtime and joining them.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use oasis_core::SnapshotProvider;
//! use oasis_data::snapshots::{HttpSnapshotProvider, HttpSnapshotProviderConfig};
//!
//! let config = HttpSnapshotProviderConfig::default()
//!     .with_timeout(Duration::from_secs(5))
//!     .with_user_agent("my-dashboard/1.0");
//! let provider = HttpSnapshotProvider::with_config(config)?;
//! let conditions = provider.resolve();
//! println!("{} °C", conditions.ambient_temperature());
//! # Ok::<(), oasis_data::ProviderBuildError>(())
//! ```

mod atmo;
mod open_meteo;
mod provider;
mod wmo;

pub use provider::{
    DEFAULT_AIR_QUALITY_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, DEFAULT_WEATHER_URL,
    HttpSnapshotProvider, HttpSnapshotProviderConfig, ProviderBuildError,
};
pub use wmo::{HEATWAVE_LABEL, HEATWAVE_THRESHOLD_C, weather_label, weather_status};
