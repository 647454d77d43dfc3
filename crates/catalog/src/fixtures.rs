//! Fixture parsing for catalog JSON files.
//!
//! A catalog directory holds one JSON array per catalog kind:
//! - providers.json
//! - lab_tests.json
//! - lab_results.json
//! - appointments.json
//!
//! Parsing is schema-driven through serde; any shape mismatch is reported as
//! a `ParseError` naming the file.

use crate::error::{CatalogError, Result};
use crate::types::{Appointment, LabResult, LabTest, Provider};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub const PROVIDERS_FILE: &str = "providers.json";
pub const LAB_TESTS_FILE: &str = "lab_tests.json";
pub const LAB_RESULTS_FILE: &str = "lab_results.json";
pub const APPOINTMENTS_FILE: &str = "appointments.json";

/// Read a fixture file to a string, mapping a missing file to `FileNotFound`
fn read_fixture(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

/// Deserialize one fixture array, tagging errors with the file name
fn parse_json<T: DeserializeOwned>(file: &str, json: &str) -> Result<Vec<T>> {
    serde_json::from_str(json).map_err(|e| CatalogError::ParseError {
        file: file.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a providers fixture from its JSON text
pub fn parse_providers_json(json: &str) -> Result<Vec<Provider>> {
    parse_json(PROVIDERS_FILE, json)
}

/// Parse a lab tests fixture from its JSON text
pub fn parse_lab_tests_json(json: &str) -> Result<Vec<LabTest>> {
    parse_json(LAB_TESTS_FILE, json)
}

/// Parse a lab results fixture from its JSON text
pub fn parse_lab_results_json(json: &str) -> Result<Vec<LabResult>> {
    parse_json(LAB_RESULTS_FILE, json)
}

/// Parse an appointments fixture from its JSON text
pub fn parse_appointments_json(json: &str) -> Result<Vec<Appointment>> {
    parse_json(APPOINTMENTS_FILE, json)
}

/// Parse the providers.json file
pub fn parse_providers(path: &Path) -> Result<Vec<Provider>> {
    parse_providers_json(&read_fixture(path)?)
}

/// Parse the lab_tests.json file
pub fn parse_lab_tests(path: &Path) -> Result<Vec<LabTest>> {
    parse_lab_tests_json(&read_fixture(path)?)
}

/// Parse the lab_results.json file
pub fn parse_lab_results(path: &Path) -> Result<Vec<LabResult>> {
    parse_lab_results_json(&read_fixture(path)?)
}

/// Parse the appointments.json file
pub fn parse_appointments(path: &Path) -> Result<Vec<Appointment>> {
    parse_appointments_json(&read_fixture(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Specialty, TestCategory};

    #[test]
    fn test_parse_providers_json() {
        let json = r#"[
            {
                "id": "prov-1",
                "name": "Dr. María González",
                "specialty": "CARDIOLOGIST",
                "bio": "Cardiology and preventive care",
                "rating": 4.8,
                "review_count": 120,
                "consultation_fee_cents": 5000,
                "available_today": true,
                "offers_telemedicine": true,
                "accepts_new_patients": true,
                "next_slot": "2026-08-10T09:30"
            },
            {
                "id": "prov-2",
                "name": "Dr. Carlos Ramírez",
                "specialty": "GENERAL_DOCTOR",
                "bio": "Family medicine",
                "rating": 4.5,
                "review_count": 80,
                "consultation_fee_cents": 3000,
                "available_today": false,
                "offers_telemedicine": false,
                "accepts_new_patients": true,
                "next_slot": null
            }
        ]"#;

        let providers = parse_providers_json(json).unwrap();
        assert_eq!(providers.len(), 2);
        assert_eq!(providers[0].specialty, Specialty::Cardiologist);
        assert_eq!(providers[1].next_slot, None);
    }

    #[test]
    fn test_parse_lab_tests_json() {
        let json = r#"[
            {
                "id": "test-1",
                "name": "Complete Blood Count",
                "category": "BLOOD_TEST",
                "description": "Counts red cells, white cells and platelets",
                "price_cents": 2500,
                "turnaround_hours": 24,
                "requires_preparation": false,
                "fasting_required": false,
                "home_collection": true,
                "preparation_notes": null
            }
        ]"#;

        let tests = parse_lab_tests_json(json).unwrap();
        assert_eq!(tests.len(), 1);
        assert_eq!(tests[0].category, TestCategory::BloodTest);
        assert!(tests[0].home_collection);
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let err = parse_providers_json("{not valid json").unwrap_err();
        match err {
            CatalogError::ParseError { file, .. } => assert_eq!(file, PROVIDERS_FILE),
            other => panic!("expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_category_id_is_a_parse_error() {
        let json = r#"[
            {
                "id": "test-1",
                "name": "Mystery",
                "category": "NOT_A_CATEGORY",
                "description": "",
                "price_cents": 100,
                "turnaround_hours": 1,
                "requires_preparation": false,
                "fasting_required": false,
                "home_collection": false,
                "preparation_notes": null
            }
        ]"#;

        assert!(parse_lab_tests_json(json).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = parse_providers(Path::new("/no/such/dir/providers.json")).unwrap_err();
        assert!(matches!(err, CatalogError::FileNotFound { .. }));
    }
}
