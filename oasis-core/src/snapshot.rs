//! Ambient weather and air-quality snapshots.
//!
//! The engine needs a resolved [`AmbientConditions`] before it runs. Live
//! values come from a [`SnapshotProvider`]; whatever it fails to deliver is
//! replaced by documented fallbacks in [`Snapshots::resolve`], so a missing
//! upstream never aborts generation.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ambient temperature used when no reading is available.
pub const FALLBACK_TEMPERATURE_C: f64 = 25.0;
/// Weather status used when no reading is available.
pub const FALLBACK_WEATHER_STATUS: &str = "Indisponible";
/// Source label attached to every fallback snapshot.
pub const FALLBACK_SOURCE: &str = "Simulated Fallback";
/// Air-quality index used when no reading is available.
pub const FALLBACK_AQI: u32 = 2;
/// Air-quality description used when no reading is available.
pub const FALLBACK_AIR_DESCRIPTION: &str = "Moyen (Simulé)";

/// City-wide weather reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Air temperature in degrees Celsius.
    pub temperature: f64,
    /// Human-readable conditions.
    pub status: String,
    /// Where the reading came from.
    pub station: String,
    /// Relative humidity in percent, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
}

impl WeatherSnapshot {
    /// Snapshot substituted when the weather source is unavailable.
    ///
    /// # Examples
    /// ```
    /// use oasis_core::WeatherSnapshot;
    ///
    /// let weather = WeatherSnapshot::fallback();
    /// assert_eq!(weather.temperature, 25.0);
    /// assert_eq!(weather.status, "Indisponible");
    /// ```
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            temperature: FALLBACK_TEMPERATURE_C,
            status: FALLBACK_WEATHER_STATUS.to_owned(),
            station: FALLBACK_SOURCE.to_owned(),
            humidity: None,
        }
    }
}

/// Pollutant concentrations, each optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pollutants {
    /// Nitrogen dioxide.
    pub no2: Option<f64>,
    /// Ozone.
    pub o3: Option<f64>,
    /// Particulate matter below 10 µm.
    pub pm10: Option<f64>,
}

/// City-wide air-quality reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualitySnapshot {
    /// Air-quality index.
    pub aqi: u32,
    /// Human-readable index label.
    pub description: String,
    /// Concentration breakdown, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pollutants: Option<Pollutants>,
    /// Where the reading came from.
    pub source: String,
}

impl AirQualitySnapshot {
    /// Snapshot substituted when the air-quality source is unavailable.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            aqi: FALLBACK_AQI,
            description: FALLBACK_AIR_DESCRIPTION.to_owned(),
            pollutants: None,
            source: FALLBACK_SOURCE.to_owned(),
        }
    }
}

/// Fully resolved inputs of an engine run.
#[derive(Debug, Clone, PartialEq)]
pub struct AmbientConditions {
    /// Weather reading, live or fallback.
    pub weather: WeatherSnapshot,
    /// Air-quality reading, live or fallback.
    pub air_quality: AirQualitySnapshot,
}

impl AmbientConditions {
    /// Conditions built entirely from fallbacks.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            weather: WeatherSnapshot::fallback(),
            air_quality: AirQualitySnapshot::fallback(),
        }
    }

    /// Reference temperature for the run.
    ///
    /// Non-finite readings are replaced with [`FALLBACK_TEMPERATURE_C`].
    #[must_use]
    pub const fn ambient_temperature(&self) -> f64 {
        if self.weather.temperature.is_finite() {
            self.weather.temperature
        } else {
            FALLBACK_TEMPERATURE_C
        }
    }
}

/// Errors raised while fetching a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The request could not be sent or the connection failed.
    #[error("request to {url} failed: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The request exceeded its timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout.
        timeout_secs: u64,
    },
    /// The server answered with a non-success status.
    #[error("{url} responded with HTTP {status}: {message}")]
    Http {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to decode response from {url}: {message}")]
    Parse {
        /// Requested URL.
        url: String,
        /// Decoder error description.
        message: String,
    },
    /// The response decoded but carried no usable record.
    #[error("{url} returned no records")]
    NoRecords {
        /// Requested URL.
        url: String,
    },
}

/// Raw outcome of fetching both snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshots {
    /// Weather fetch result.
    pub weather: Result<WeatherSnapshot, SnapshotError>,
    /// Air-quality fetch result.
    pub air_quality: Result<AirQualitySnapshot, SnapshotError>,
}

impl Snapshots {
    /// Substitute fallbacks for failed fetches.
    ///
    /// Each failure is logged at `warn` level; this never fails.
    ///
    /// # Examples
    /// ```
    /// use oasis_core::{SnapshotError, Snapshots, WeatherSnapshot, AirQualitySnapshot};
    ///
    /// let snapshots = Snapshots {
    ///     weather: Err(SnapshotError::NoRecords { url: "http://example.com".into() }),
    ///     air_quality: Ok(AirQualitySnapshot::fallback()),
    /// };
    /// let conditions = snapshots.resolve();
    /// assert_eq!(conditions.weather, WeatherSnapshot::fallback());
    /// ```
    #[must_use]
    pub fn resolve(self) -> AmbientConditions {
        let weather = self.weather.unwrap_or_else(|err| {
            warn!("weather unavailable, using fallback: {err}");
            WeatherSnapshot::fallback()
        });
        let air_quality = self.air_quality.unwrap_or_else(|err| {
            warn!("air quality unavailable, using fallback: {err}");
            AirQualitySnapshot::fallback()
        });
        info!(
            "ambient conditions: {} °C ({}), air quality {} ({})",
            weather.temperature, weather.status, air_quality.aqi, air_quality.description
        );
        AmbientConditions {
            weather,
            air_quality,
        }
    }
}

/// Fetch the current weather and air-quality snapshots.
///
/// Implementations report each snapshot independently so one failing source
/// does not discard the other.
pub trait SnapshotProvider {
    /// Fetch both snapshots.
    fn snapshots(&self) -> Snapshots;

    /// Fetch both snapshots and substitute fallbacks for failures.
    fn resolve(&self) -> AmbientConditions {
        self.snapshots().resolve()
    }
}

/// Provider that never touches the network and always reports fallbacks.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineSnapshotProvider;

impl SnapshotProvider for OfflineSnapshotProvider {
    fn snapshots(&self) -> Snapshots {
        Snapshots {
            weather: Ok(WeatherSnapshot::fallback()),
            air_quality: Ok(AirQualitySnapshot::fallback()),
        }
    }
}
