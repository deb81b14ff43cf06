use crate::error::{SetupError, SetupResult};
use chrono::{DateTime, Utc};
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single vitals measurement as stored in the time-series collection.
///
/// Keys are camelCase on the wire so documents stay compatible with the
/// ingestion path that writes into the same collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalReading {
    pub patient_id: String,
    /// Beats per minute.
    pub heart_rate: i32,
    /// "systolic/diastolic" textual form, display-only.
    pub blood_pressure: String,
    /// Oxygen saturation percentage.
    pub oxygen_level: i32,
    /// Degrees Celsius.
    pub temperature: f64,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
}

/// A seed record: a reading without its timestamp, which is stamped with the
/// wall clock at insertion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedReading {
    pub patient_id: String,
    pub heart_rate: i32,
    pub blood_pressure: String,
    pub oxygen_level: i32,
    pub temperature: f64,
}

impl SeedReading {
    pub fn into_reading(self, timestamp: DateTime<Utc>) -> VitalReading {
        VitalReading {
            patient_id: self.patient_id,
            heart_rate: self.heart_rate,
            blood_pressure: self.blood_pressure,
            oxygen_level: self.oxygen_level,
            temperature: self.temperature,
            timestamp,
        }
    }
}

/// Built-in demonstration records.
pub fn default_seed_records() -> Vec<SeedReading> {
    vec![
        SeedReading {
            patient_id: "P001".to_string(),
            heart_rate: 75,
            blood_pressure: "120/80".to_string(),
            oxygen_level: 98,
            temperature: 36.8,
        },
        SeedReading {
            patient_id: "P002".to_string(),
            heart_rate: 82,
            blood_pressure: "118/75".to_string(),
            oxygen_level: 97,
            temperature: 37.1,
        },
    ]
}

/// Load seed records from a JSON array file.
pub fn load_seed_file(path: &Path) -> SetupResult<Vec<SeedReading>> {
    let raw = std::fs::read(path).map_err(|e| {
        SetupError::SetupCommandError(format!("Failed to read seed file {}: {}", path.display(), e))
    })?;
    serde_json::from_slice(&raw)
        .map_err(|e| SetupError::SetupCommandError(format!("Invalid seed file {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, Bson};
    use std::io::Write;

    #[test]
    fn reading_serializes_with_wire_field_names() {
        let reading = default_seed_records().remove(0).into_reading(Utc::now());
        let doc = bson::to_document(&reading).unwrap();

        assert_eq!(doc.get_str("patientId").unwrap(), "P001");
        assert_eq!(doc.get_i32("heartRate").unwrap(), 75);
        assert_eq!(doc.get_str("bloodPressure").unwrap(), "120/80");
        assert_eq!(doc.get_i32("oxygenLevel").unwrap(), 98);
        assert_eq!(doc.get_f64("temperature").unwrap(), 36.8);
        assert!(matches!(doc.get("timestamp"), Some(Bson::DateTime(_))));
    }

    #[test]
    fn default_seed_records_match_demo_patients() {
        let records = default_seed_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].patient_id, "P001");
        assert_eq!(records[1].patient_id, "P002");
        assert_eq!(records[1].blood_pressure, "118/75");
    }

    #[test]
    fn seed_file_round_trips() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"patientId":"P042","heartRate":64,"bloodPressure":"110/70","oxygenLevel":99,"temperature":36.5}}]"#
        )
        .unwrap();

        let records = load_seed_file(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].patient_id, "P042");
        assert_eq!(records[0].heart_rate, 64);
    }

    #[test]
    fn seed_file_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = load_seed_file(file.path());
        assert!(matches!(result, Err(SetupError::SetupCommandError(_))));
    }
}
