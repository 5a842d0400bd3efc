//! ATMO air-quality index records from the Clermont open-data portal.
//!
//! The portal exposes an Opendatasoft v2 catalog API; each record nests its
//! values under `record.fields`.

use oasis_core::{AirQualitySnapshot, Pollutants, SnapshotError};
use serde::Deserialize;

/// Source label attached to live air-quality snapshots.
pub const SOURCE_LABEL: &str = "Open Data Clermont (ATMO)";

const UNKNOWN_DESCRIPTION: &str = "Inconnu";

/// Records listing returned by the catalog API.
#[derive(Debug, Default, Deserialize)]
pub struct RecordsResponse {
    /// Matching records, most recent first when ordered by date.
    #[serde(default)]
    pub records: Vec<RecordEnvelope>,
}

/// Wrapper around a single record.
#[derive(Debug, Deserialize)]
pub struct RecordEnvelope {
    /// The record itself.
    pub record: Record,
}

/// A dataset record.
#[derive(Debug, Deserialize)]
pub struct Record {
    /// Field values.
    #[serde(default)]
    pub fields: IndexFields,
}

/// Fields of an air-quality index record.
#[derive(Debug, Default, Deserialize)]
pub struct IndexFields {
    /// Index value.
    pub code_qual: Option<u32>,
    /// Index label.
    pub lib_qual: Option<String>,
    /// Nitrogen dioxide concentration.
    pub conc_no2: Option<f64>,
    /// Ozone concentration.
    pub conc_o3: Option<f64>,
    /// PM10 concentration.
    pub conc_pm10: Option<f64>,
}

impl RecordsResponse {
    /// Convert the first record into a snapshot.
    ///
    /// # Errors
    /// Returns [`SnapshotError::NoRecords`] when the listing is empty.
    pub fn into_snapshot(self, url: &str) -> Result<AirQualitySnapshot, SnapshotError> {
        let envelope = self
            .records
            .into_iter()
            .next()
            .ok_or_else(|| SnapshotError::NoRecords {
                url: url.to_owned(),
            })?;
        let fields = envelope.record.fields;
        Ok(AirQualitySnapshot {
            aqi: fields.code_qual.unwrap_or_default(),
            description: fields
                .lib_qual
                .unwrap_or_else(|| UNKNOWN_DESCRIPTION.to_owned()),
            pollutants: Some(Pollutants {
                no2: fields.conc_no2,
                o3: fields.conc_o3,
                pm10: fields.conc_pm10,
            }),
            source: SOURCE_LABEL.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://opendata.example/records";

    fn parse(json: &str) -> Result<AirQualitySnapshot, SnapshotError> {
        serde_json::from_str::<RecordsResponse>(json)
            .expect("should deserialise")
            .into_snapshot(URL)
    }

    #[test]
    fn reads_first_record() {
        let snapshot = parse(
            r#"{
                "total_count": 412,
                "records": [
                    {"record": {"id": "a", "fields": {
                        "lib_zone": "Clermont-Ferrand",
                        "code_qual": 3,
                        "lib_qual": "Dégradé",
                        "conc_no2": 18.2,
                        "conc_o3": 121.0,
                        "conc_pm10": null
                    }}},
                    {"record": {"id": "b", "fields": {"code_qual": 1}}}
                ]
            }"#,
        )
        .expect("should convert");
        assert_eq!(snapshot.aqi, 3);
        assert_eq!(snapshot.description, "Dégradé");
        assert_eq!(snapshot.source, SOURCE_LABEL);
        assert_eq!(
            snapshot.pollutants,
            Some(Pollutants {
                no2: Some(18.2),
                o3: Some(121.0),
                pm10: None,
            })
        );
    }

    #[test]
    fn missing_fields_take_defaults() {
        let snapshot = parse(r#"{"records": [{"record": {"fields": {}}}]}"#).expect("should convert");
        assert_eq!(snapshot.aqi, 0);
        assert_eq!(snapshot.description, "Inconnu");
    }

    #[test]
    fn empty_listing_is_an_error() {
        assert_eq!(
            parse(r#"{"total_count": 0, "records": []}"#),
            Err(SnapshotError::NoRecords { url: URL.to_owned() })
        );
    }
}
