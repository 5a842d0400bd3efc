//! Open-Meteo forecast API response types.
//!
//! Only the `current` block is read. Every field is optional upstream and
//! missing values take documented defaults.
//!
//! See: <https://open-meteo.com/en/docs>

use oasis_core::WeatherSnapshot;
use serde::Deserialize;

use super::wmo::weather_status;

/// Station label attached to live weather snapshots.
pub const STATION_LABEL: &str = "Open-Meteo Real-time";
/// Query value for the `current` parameter.
pub const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,weather_code";

const DEFAULT_TEMPERATURE_C: f64 = 25.0;
const DEFAULT_WEATHER_CODE: u16 = 0;
const DEFAULT_HUMIDITY: f64 = 50.0;

/// Forecast response carrying current conditions.
#[derive(Debug, Default, Deserialize)]
pub struct ForecastResponse {
    /// Current conditions, absent when the request did not ask for them.
    #[serde(default)]
    pub current: CurrentConditions,
}

/// The `current` block of a forecast response.
#[derive(Debug, Default, Deserialize)]
pub struct CurrentConditions {
    /// Air temperature two metres above ground, in °C.
    pub temperature_2m: Option<f64>,
    /// Relative humidity two metres above ground, in percent.
    pub relative_humidity_2m: Option<f64>,
    /// WMO weather interpretation code.
    pub weather_code: Option<u16>,
}

impl ForecastResponse {
    /// Convert into a weather snapshot, filling gaps with defaults.
    #[must_use]
    pub fn into_snapshot(self) -> WeatherSnapshot {
        let current = self.current;
        let temperature = current.temperature_2m.unwrap_or(DEFAULT_TEMPERATURE_C);
        let code = current.weather_code.unwrap_or(DEFAULT_WEATHER_CODE);
        WeatherSnapshot {
            temperature,
            status: weather_status(code, temperature).to_owned(),
            station: STATION_LABEL.to_owned(),
            humidity: Some(current.relative_humidity_2m.unwrap_or(DEFAULT_HUMIDITY)),
        }
    }
}
