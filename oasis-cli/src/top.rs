//! Top command: rank the coolest spots of a published dataset.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use oasis_core::{
    Amenity, Category, CoolIsland, DEFAULT_LIMIT, DEFAULT_MIN_COMFORT, Dataset, DatasetQuery,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_TOP_CATEGORY, ARG_TOP_INPUT, ARG_TOP_LIMIT, ARG_TOP_MIN_COMFORT, CliError,
    DEFAULT_DATASET_PATH,
};

/// CLI arguments for the `top` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "top",
    long_about = "Read a dataset written by `oasis refresh`, keep the spots \
                 matching the category and comfort filters, and print the \
                 coolest ones together with the ambient conditions.",
    about = "Print the coolest spots of a dataset"
)]
#[ortho_config(prefix = "OASIS")]
pub(crate) struct TopArgs {
    /// Dataset JSON to read.
    #[arg(long = ARG_TOP_INPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Restrict to a category; repeat to allow several.
    #[arg(long = ARG_TOP_CATEGORY, value_name = "label")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) categories: Vec<String>,
    /// Minimum comfort score on the 0 to 10 scale.
    #[arg(long = ARG_TOP_MIN_COMFORT, value_name = "score")]
    #[serde(default)]
    pub(crate) min_comfort: Option<f64>,
    /// Maximum number of spots to print.
    #[arg(long = ARG_TOP_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl TopArgs {
    pub(crate) fn into_config(self) -> Result<TopConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        TopConfig::try_from(merged)
    }
}

/// Resolved `top` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TopConfig {
    /// Dataset to read.
    pub(crate) input: Utf8PathBuf,
    /// Filters and ranking limit.
    pub(crate) query: DatasetQuery,
}

impl TopConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.input, ARG_TOP_INPUT)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match oasis_fs::is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<TopArgs> for TopConfig {
    type Error = CliError;

    fn try_from(args: TopArgs) -> Result<Self, Self::Error> {
        let categories = args
            .categories
            .iter()
            .map(|label| label.parse::<Category>())
            .collect::<Result<Vec<_>, _>>()?;

        let min_comfort = args.min_comfort.unwrap_or(DEFAULT_MIN_COMFORT);
        if !min_comfort.is_finite() {
            return Err(CliError::InvalidValue {
                field: ARG_TOP_MIN_COMFORT,
                value: min_comfort.to_string(),
                reason: "must be a finite number",
            });
        }

        let mut query = DatasetQuery::default()
            .with_min_comfort(min_comfort)
            .with_limit(args.limit.unwrap_or(DEFAULT_LIMIT));
        if !categories.is_empty() {
            query = query.with_categories(categories);
        }

        Ok(Self {
            input: args
                .input
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATASET_PATH)),
            query,
        })
    }
}

pub(super) fn run_top(args: TopArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_top_with(args, &mut stdout)
}

pub(super) fn run_top_with(args: TopArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let dataset = load_dataset(&config.input)?;
    write_report(writer, &dataset, &config.query).map_err(CliError::WriteOutput)
}

/// Loads a dataset previously written by `refresh`.
pub(super) fn load_dataset(path: &Utf8Path) -> Result<Dataset, CliError> {
    let payload = oasis_fs::read_utf8(path).map_err(|source| CliError::ReadDataset {
        path: path.to_path_buf(),
        source,
    })?;
    Dataset::from_json(&payload).map_err(|source| CliError::ParseDataset {
        path: path.to_path_buf(),
        source,
    })
}

fn write_report(
    writer: &mut dyn Write,
    dataset: &Dataset,
    query: &DatasetQuery,
) -> std::io::Result<()> {
    write_banner(writer, dataset)?;

    let matching = query.filter(&dataset.cool_islands);
    if matching.is_empty() {
        return writeln!(writer, "No cool island matches the current filters.");
    }
    writeln!(
        writer,
        "Average comfort {:.1}/10 across {} matching spots",
        Dataset::average_comfort(matching.iter().copied()),
        matching.len()
    )?;
    writeln!(writer)?;

    for (rank, island) in query.coolest(&dataset.cool_islands).iter().enumerate() {
        write_island(writer, rank.saturating_add(1), island)?;
    }
    Ok(())
}

fn write_banner(writer: &mut dyn Write, dataset: &Dataset) -> std::io::Result<()> {
    let weather = &dataset.weather;
    let air = &dataset.air_quality;
    writeln!(
        writer,
        "{} {:.1} °C | air quality: {} (index {})",
        weather.status, weather.temperature, air.description, air.aqi
    )?;
    writeln!(
        writer,
        "Updated {} from {}",
        dataset.metadata.timestamp.format("%Y-%m-%d %H:%M %:z"),
        dataset.metadata.source
    )
}

fn write_island(writer: &mut dyn Write, rank: usize, island: &CoolIsland) -> std::io::Result<()> {
    let amenities = island
        .amenities
        .iter()
        .map(Amenity::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(
        writer,
        "{rank}. {} [{}] {:.1} °C ({:+.1} °C), comfort {:.1}/10, crowd {}; {amenities}",
        island.name,
        island.category,
        island.local_temp,
        island.temp_diff,
        island.comfort_score,
        island.crowd_level
    )
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<TopConfig, CliError> {
    let merged = TopArgs::merge_from_layers(layers).map_err(CliError::from)?;
    TopConfig::try_from(merged)
}
