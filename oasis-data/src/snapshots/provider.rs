//! HTTP-based `SnapshotProvider`.
//!
//! The [`SnapshotProvider`] trait is synchronous so the engine stays
//! embeddable in synchronous contexts. This provider bridges the two async
//! requests to that interface by blocking on a Tokio runtime.

use std::time::Duration;

use log::debug;
use oasis_core::{
    AirQualitySnapshot, DEFAULT_CENTRE, SnapshotError, SnapshotProvider, Snapshots,
    WeatherSnapshot,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use super::atmo::RecordsResponse;
use super::open_meteo::{CURRENT_FIELDS, ForecastResponse};

/// Open-Meteo forecast endpoint.
pub const DEFAULT_WEATHER_URL: &str = "https://api.open-meteo.com/v1/forecast";
/// Latest Clermont-Ferrand ATMO index record.
pub const DEFAULT_AIR_QUALITY_URL: &str = "https://opendata.clermontmetropole.eu/api/v2/catalog/datasets/atmo-indice-qualite-de-lair/records?limit=1&where=lib_zone%3D%27Clermont-Ferrand%27&order_by=date_ech%20desc";
/// Default user agent for snapshot requests.
pub const DEFAULT_USER_AGENT: &str = "oasis-engine/0.1";
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors raised while building an [`HttpSnapshotProvider`].
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// A configured endpoint is not a valid absolute URL.
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Configuration for [`HttpSnapshotProvider`].
#[derive(Debug, Clone, PartialEq)]
pub struct HttpSnapshotProviderConfig {
    /// Forecast endpoint, without query parameters.
    pub weather_url: String,
    /// Air-quality records endpoint, including its query.
    pub air_quality_url: String,
    /// Latitude of the weather reading.
    pub latitude: f64,
    /// Longitude of the weather reading.
    pub longitude: f64,
    /// Per-request timeout.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpSnapshotProviderConfig {
    fn default() -> Self {
        Self {
            weather_url: DEFAULT_WEATHER_URL.to_owned(),
            air_quality_url: DEFAULT_AIR_QUALITY_URL.to_owned(),
            latitude: DEFAULT_CENTRE.y,
            longitude: DEFAULT_CENTRE.x,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpSnapshotProviderConfig {
    /// Set the forecast endpoint.
    #[must_use]
    pub fn with_weather_url(mut self, url: impl Into<String>) -> Self {
        self.weather_url = url.into();
        self
    }

    /// Set the air-quality endpoint.
    #[must_use]
    pub fn with_air_quality_url(mut self, url: impl Into<String>) -> Self {
        self.air_quality_url = url.into();
        self
    }

    /// Set the coordinates of the weather reading.
    #[must_use]
    pub const fn with_position(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Fetches weather and air quality from their public HTTP APIs.
///
/// Both requests run concurrently and are joined before returning; each
/// reports its own outcome so one failing source never hides the other.
///
/// # Runtime behaviour
///
/// Outside any Tokio runtime, or inside a `current_thread` one, the provider
/// blocks on its own runtime. Inside a multi-threaded runtime it uses that
/// runtime's handle with [`tokio::task::block_in_place`].
pub struct HttpSnapshotProvider {
    client: Client,
    config: HttpSnapshotProviderConfig,
    weather_url: Url,
    air_quality_url: Url,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpSnapshotProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSnapshotProvider")
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish_non_exhaustive()
    }
}

fn parse_url(raw: &str) -> Result<Url, ProviderBuildError> {
    Url::parse(raw).map_err(|source| ProviderBuildError::InvalidUrl {
        url: raw.to_owned(),
        source,
    })
}

impl HttpSnapshotProvider {
    /// Create a provider for the default endpoints.
    ///
    /// # Errors
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new() -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpSnapshotProviderConfig::default())
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    /// Returns an error if an endpoint is not a valid URL, or if the HTTP
    /// client or Tokio runtime fails to build.
    pub fn with_config(config: HttpSnapshotProviderConfig) -> Result<Self, ProviderBuildError> {
        let mut weather_url = parse_url(&config.weather_url)?;
        weather_url
            .query_pairs_mut()
            .append_pair("latitude", &config.latitude.to_string())
            .append_pair("longitude", &config.longitude.to_string())
            .append_pair("current", CURRENT_FIELDS);
        let air_quality_url = parse_url(&config.air_quality_url)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            weather_url,
            air_quality_url,
            runtime,
        })
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &HttpSnapshotProviderConfig {
        &self.config
    }

    /// Fully qualified forecast request URL.
    #[must_use]
    pub const fn weather_url(&self) -> &Url {
        &self.weather_url
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, SnapshotError> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, url))?;
        response
            .json()
            .await
            .map_err(|err| SnapshotError::Parse {
                url: url.to_string(),
                message: err.to_string(),
            })
    }

    async fn fetch_weather(&self) -> Result<WeatherSnapshot, SnapshotError> {
        let body: ForecastResponse = self.fetch_json(&self.weather_url).await?;
        Ok(body.into_snapshot())
    }

    async fn fetch_air_quality(&self) -> Result<AirQualitySnapshot, SnapshotError> {
        let body: RecordsResponse = self.fetch_json(&self.air_quality_url).await?;
        body.into_snapshot(self.air_quality_url.as_str())
    }

    async fn fetch_both(&self) -> Snapshots {
        let (weather, air_quality) = tokio::join!(self.fetch_weather(), self.fetch_air_quality());
        Snapshots {
            weather,
            air_quality,
        }
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &Url) -> SnapshotError {
        if error.is_timeout() {
            return SnapshotError::Timeout {
                url: url.to_string(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }
        if let Some(status) = error.status() {
            return SnapshotError::Http {
                url: url.to_string(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }
        SnapshotError::Network {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

impl SnapshotProvider for HttpSnapshotProvider {
    fn snapshots(&self) -> Snapshots {
        let future = self.fetch_both();
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn weather_url_carries_position_and_fields() {
        let provider = HttpSnapshotProvider::with_config(
            HttpSnapshotProviderConfig::default().with_position(45.7772, 3.087),
        )
        .expect("provider should build");
        let query: Vec<(String, String)> = provider
            .weather_url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            query,
            [
                ("latitude".to_owned(), "45.7772".to_owned()),
                ("longitude".to_owned(), "3.087".to_owned()),
                ("current".to_owned(), CURRENT_FIELDS.to_owned()),
            ]
        );
    }

    #[rstest]
    fn default_air_quality_url_filters_clermont() {
        let url = Url::parse(DEFAULT_AIR_QUALITY_URL).expect("valid default");
        let filter = url
            .query_pairs()
            .find(|(k, _)| k == "where")
            .map(|(_, v)| v.into_owned());
        assert_eq!(filter.as_deref(), Some("lib_zone='Clermont-Ferrand'"));
    }

    #[rstest]
    #[case(HttpSnapshotProviderConfig::default().with_weather_url("not a url"))]
    #[case(HttpSnapshotProviderConfig::default().with_air_quality_url("/relative/path"))]
    fn rejects_invalid_urls(#[case] config: HttpSnapshotProviderConfig) {
        assert!(matches!(
            HttpSnapshotProvider::with_config(config),
            Err(ProviderBuildError::InvalidUrl { .. })
        ));
    }

    #[rstest]
    fn config_builder_pattern() {
        let config = HttpSnapshotProviderConfig::default()
            .with_timeout(Duration::from_secs(3))
            .with_user_agent("test-agent/1.0");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.user_agent, "test-agent/1.0");
        assert_eq!(config.weather_url, DEFAULT_WEATHER_URL);
    }

    #[rstest]
    fn unreachable_hosts_report_network_errors() {
        let provider = HttpSnapshotProvider::with_config(
            HttpSnapshotProviderConfig::default()
                .with_weather_url("http://127.0.0.1:9/forecast")
                .with_air_quality_url("http://127.0.0.1:9/records")
                .with_timeout(Duration::from_secs(2)),
        )
        .expect("provider should build");
        let snapshots = provider.snapshots();
        assert!(matches!(
            snapshots.weather,
            Err(SnapshotError::Network { .. } | SnapshotError::Timeout { .. })
        ));
        assert!(snapshots.air_quality.is_err());
        assert_eq!(provider.resolve(), oasis_core::AmbientConditions::fallback());
    }
}
