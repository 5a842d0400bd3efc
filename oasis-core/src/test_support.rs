//! Deterministic collaborators for unit and behaviour tests.

use crate::{Snapshots, SnapshotProvider};

/// `SnapshotProvider` replaying a fixed pair of fetch results.
///
/// # Examples
/// ```
/// use oasis_core::test_support::StubSnapshotProvider;
/// use oasis_core::{AmbientConditions, SnapshotError, SnapshotProvider, WeatherSnapshot};
///
/// let provider = StubSnapshotProvider::new(
///     Err(SnapshotError::NoRecords { url: "stub".into() }),
///     Ok(oasis_core::AirQualitySnapshot::fallback()),
/// );
/// assert_eq!(provider.resolve(), AmbientConditions::fallback());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StubSnapshotProvider {
    snapshots: Snapshots,
}

impl StubSnapshotProvider {
    /// Replay the given results on every call.
    #[must_use]
    pub const fn new(
        weather: Result<crate::WeatherSnapshot, crate::SnapshotError>,
        air_quality: Result<crate::AirQualitySnapshot, crate::SnapshotError>,
    ) -> Self {
        Self {
            snapshots: Snapshots {
                weather,
                air_quality,
            },
        }
    }
}

impl SnapshotProvider for StubSnapshotProvider {
    fn snapshots(&self) -> Snapshots {
        self.snapshots.clone()
    }
}
