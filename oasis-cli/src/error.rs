//! Error types emitted by the Oasis CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use oasis_core::{CatalogConfigError, ParseCategoryError};
use oasis_data::ProviderBuildError;
use thiserror::Error;

/// Errors emitted by the Oasis CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// An option was supplied with a value the command cannot use.
    #[error("invalid --{field} value {value}: {reason}")]
    InvalidValue {
        /// Flag name without leading dashes.
        field: &'static str,
        /// The rejected value as supplied.
        value: String,
        /// What the value must satisfy.
        reason: &'static str,
    },
    /// A `--category` filter named no known category.
    #[error(transparent)]
    InvalidCategory(#[from] ParseCategoryError),
    /// The location catalog rejected its configuration.
    #[error(transparent)]
    Catalog(#[from] CatalogConfigError),
    /// A referenced input path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag that named the path.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag that named the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag that named the path.
        field: &'static str,
        /// The path being inspected.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Constructing the live snapshot provider failed.
    #[error("failed to build snapshot provider: {0}")]
    BuildSnapshotProvider(#[source] ProviderBuildError),
    /// Serialising the dataset failed.
    #[error("failed to serialise dataset: {0}")]
    SerialiseDataset(#[source] serde_json::Error),
    /// Writing the dataset file failed.
    #[error("failed to write dataset to {path:?}: {source}")]
    WriteDataset {
        /// Destination path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Reading the dataset file failed.
    #[error("failed to read dataset at {path:?}: {source}")]
    ReadDataset {
        /// Source path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Dataset JSON could not be decoded.
    #[error("failed to parse dataset JSON at {path:?}: {source}")]
    ParseDataset {
        /// Source path.
        path: Utf8PathBuf,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
