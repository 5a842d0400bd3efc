//! Fixtures shared by the refresh and top command tests.

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, FixedOffset};
use oasis_core::{
    Aggregator, Amenity, AmbientConditions, Category, CoolIsland, CrowdLevel, Dataset, FixedClock,
};
use tempfile::TempDir;

/// Instant every test run is stamped with.
pub(super) const RUN_TIMESTAMP: &str = "2025-07-16T13:00:00+02:00";

pub(super) fn run_timestamp() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(RUN_TIMESTAMP).expect("valid timestamp")
}

pub(super) fn fixed_clock() -> FixedClock {
    FixedClock::new(run_timestamp())
}

/// Temporary directory paired with its UTF-8 path.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, relative: &str) -> Utf8PathBuf {
        self.root.join(relative)
    }
}

fn island(
    name: &str,
    category: Category,
    temp_diff: f64,
    comfort_score: f64,
    crowd_level: CrowdLevel,
    amenities: &[Amenity],
) -> CoolIsland {
    CoolIsland {
        name: name.to_owned(),
        lat: 45.78,
        lon: 3.08,
        category,
        temp_diff,
        local_temp: 25.0 + temp_diff,
        crowd_level,
        comfort_score,
        amenities: amenities.iter().copied().collect(),
    }
}

/// Four spots under fallback conditions; one falls below the default
/// comfort threshold.
pub(super) fn sample_dataset() -> Dataset {
    let islands = vec![
        island(
            "Jardin Lecoq",
            Category::ParkGarden,
            -4.0,
            7.5,
            CrowdLevel::Medium,
            &[Amenity::Shade, Amenity::Benches],
        ),
        island(
            "Musée Bargoin",
            Category::CulturalSite,
            -7.0,
            9.1,
            CrowdLevel::Low,
            &[Amenity::AirConditioning, Amenity::Toilets],
        ),
        island(
            "Fontaine d'Amboise",
            Category::WaterFeature,
            -5.5,
            4.0,
            CrowdLevel::High,
            &[Amenity::DrinkingWater],
        ),
        island(
            "Rue des Gras",
            Category::ShadedPassage,
            -2.5,
            6.0,
            CrowdLevel::Low,
            &[Amenity::Shade],
        ),
    ];
    Aggregator::default().assemble(AmbientConditions::fallback(), islands, run_timestamp())
}

pub(super) fn write_dataset(path: &Utf8Path, dataset: &Dataset) {
    let payload = dataset.to_json_pretty().expect("serialise dataset");
    oasis_fs::write_utf8(path, &payload).expect("write dataset");
}
