//! Live data sources for the Oasis engine.
//!
//! Responsibilities:
//! - Fetch the city-wide weather and air-quality snapshots over HTTP.
//! - Map upstream payloads and failures onto `oasis-core` types.
//!
//! Boundaries:
//! - Do not encode domain rules (live in `oasis-core`).
//! - Never substitute fallbacks here; report failures and let
//!   [`oasis_core::Snapshots::resolve`] decide.
//!
//! Invariants:
//! - No global mutable state.

#![forbid(unsafe_code)]

pub mod snapshots;

pub use snapshots::{
    DEFAULT_AIR_QUALITY_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, DEFAULT_WEATHER_URL,
    HttpSnapshotProvider, HttpSnapshotProviderConfig, ProviderBuildError, weather_label,
};
