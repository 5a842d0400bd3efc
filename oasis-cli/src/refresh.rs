//! Refresh command: run the engine once and publish the dataset.

use std::io::Write;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use oasis_core::{
    CatalogConfig, Clock, CoolIslandEngine, DEFAULT_SYNTHETIC_COUNT, Dataset, LocationCatalog,
    OfflineSnapshotProvider, SnapshotProvider, SystemClock,
};
use oasis_data::{
    DEFAULT_AIR_QUALITY_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_WEATHER_URL, HttpSnapshotProvider,
    HttpSnapshotProviderConfig,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::{
    ARG_REFRESH_AIR_QUALITY_URL, ARG_REFRESH_OFFLINE, ARG_REFRESH_OUTPUT, ARG_REFRESH_SEED,
    ARG_REFRESH_SYNTHETIC_COUNT, ARG_REFRESH_TIMEOUT_SECS, ARG_REFRESH_WEATHER_URL, CliError,
    DEFAULT_DATASET_PATH,
};

/// CLI arguments for the `refresh` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "refresh",
    long_about = "Fetch the current weather and air quality, enrich every \
                 candidate spot with its temperature differential, crowd \
                 estimate and comfort score, then write the dataset as JSON. \
                 Unreachable services are replaced by fallback readings.",
    about = "Run the engine and publish a dataset"
)]
#[ortho_config(prefix = "OASIS")]
pub(crate) struct RefreshArgs {
    /// Where to write the dataset JSON.
    #[arg(long = ARG_REFRESH_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Number of synthetic spots added after the curated list.
    #[arg(long = ARG_REFRESH_SYNTHETIC_COUNT, value_name = "count")]
    #[serde(default)]
    pub(crate) synthetic_count: Option<usize>,
    /// Seed for a reproducible run.
    #[arg(long = ARG_REFRESH_SEED, value_name = "u64")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Skip the live services and use fallback readings.
    #[arg(
        long = ARG_REFRESH_OFFLINE,
        value_name = "bool",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) offline: Option<bool>,
    /// Override the Open-Meteo forecast endpoint.
    #[arg(long = ARG_REFRESH_WEATHER_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) weather_url: Option<String>,
    /// Override the ATMO air-quality records endpoint.
    #[arg(long = ARG_REFRESH_AIR_QUALITY_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) air_quality_url: Option<String>,
    /// Per-request timeout in seconds.
    #[arg(long = ARG_REFRESH_TIMEOUT_SECS, value_name = "secs")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
}

impl RefreshArgs {
    pub(crate) fn into_config(self) -> Result<RefreshConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RefreshConfig::try_from(merged)
    }
}

/// Resolved `refresh` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RefreshConfig {
    /// Destination of the dataset JSON.
    pub(crate) output: Utf8PathBuf,
    /// Synthetic spots to generate.
    pub(crate) synthetic_count: usize,
    /// Fixed seed, or `None` for an entropy-seeded run.
    pub(crate) seed: Option<u64>,
    /// Use fallback readings instead of the live services.
    pub(crate) offline: bool,
    /// Forecast endpoint.
    pub(crate) weather_url: String,
    /// Air-quality endpoint.
    pub(crate) air_quality_url: String,
    /// Per-request timeout.
    pub(crate) timeout: Duration,
}

impl RefreshConfig {
    pub(crate) fn provider_config(&self) -> HttpSnapshotProviderConfig {
        HttpSnapshotProviderConfig::default()
            .with_weather_url(self.weather_url.clone())
            .with_air_quality_url(self.air_quality_url.clone())
            .with_timeout(self.timeout)
    }

    fn catalog(&self) -> Result<LocationCatalog, CliError> {
        let config = CatalogConfig::default().with_synthetic_count(self.synthetic_count);
        Ok(LocationCatalog::new(config)?)
    }

    fn rng(&self) -> ChaCha8Rng {
        self.seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64)
    }
}

impl TryFrom<RefreshArgs> for RefreshConfig {
    type Error = CliError;

    fn try_from(args: RefreshArgs) -> Result<Self, Self::Error> {
        let timeout_secs = args.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(CliError::InvalidValue {
                field: ARG_REFRESH_TIMEOUT_SECS,
                value: timeout_secs.to_string(),
                reason: "must be at least one second",
            });
        }

        Ok(Self {
            output: args
                .output
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATASET_PATH)),
            synthetic_count: args.synthetic_count.unwrap_or(DEFAULT_SYNTHETIC_COUNT),
            seed: args.seed,
            offline: args.offline.unwrap_or(false),
            weather_url: args
                .weather_url
                .unwrap_or_else(|| DEFAULT_WEATHER_URL.to_owned()),
            air_quality_url: args
                .air_quality_url
                .unwrap_or_else(|| DEFAULT_AIR_QUALITY_URL.to_owned()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Builds the snapshot provider for the current refresh invocation.
pub(super) trait SnapshotProviderBuilder {
    fn build(&self, config: &RefreshConfig) -> Result<Box<dyn SnapshotProvider>, CliError>;
}

pub(super) struct DefaultSnapshotProviderBuilder;

impl SnapshotProviderBuilder for DefaultSnapshotProviderBuilder {
    fn build(&self, config: &RefreshConfig) -> Result<Box<dyn SnapshotProvider>, CliError> {
        if config.offline {
            info!("offline run: using fallback ambient readings");
            return Ok(Box::new(OfflineSnapshotProvider));
        }
        let provider = HttpSnapshotProvider::with_config(config.provider_config())
            .map_err(CliError::BuildSnapshotProvider)?;
        Ok(Box::new(provider))
    }
}

pub(super) fn run_refresh(args: RefreshArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_refresh_with(
        args,
        &DefaultSnapshotProviderBuilder,
        &SystemClock,
        &mut stdout,
    )
}

pub(super) fn run_refresh_with(
    args: RefreshArgs,
    builder: &dyn SnapshotProviderBuilder,
    clock: &dyn Clock,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let dataset = generate_dataset(&config, builder, clock)?;
    publish_dataset(&config.output, &dataset)?;
    writeln!(
        writer,
        "Wrote {} cool islands to {}",
        dataset.cool_islands.len(),
        config.output
    )
    .map_err(CliError::WriteOutput)
}

fn generate_dataset(
    config: &RefreshConfig,
    builder: &dyn SnapshotProviderBuilder,
    clock: &dyn Clock,
) -> Result<Dataset, CliError> {
    let provider = builder.build(config)?;
    let conditions = provider.resolve();
    let engine = CoolIslandEngine::new(config.catalog()?);
    let mut rng = config.rng();
    Ok(engine.run(conditions, clock, &mut rng))
}

/// Writes `dataset` to `path` as indented JSON, creating parent directories.
pub(super) fn publish_dataset(path: &Utf8Path, dataset: &Dataset) -> Result<(), CliError> {
    let mut payload = dataset
        .to_json_pretty()
        .map_err(CliError::SerialiseDataset)?;
    payload.push('\n');
    oasis_fs::write_utf8(path, &payload).map_err(|source| CliError::WriteDataset {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "dataset with {} cool islands written to {path}",
        dataset.cool_islands.len()
    );
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RefreshConfig, CliError> {
    let merged = RefreshArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RefreshConfig::try_from(merged)
}
