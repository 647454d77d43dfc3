//! The in-memory catalog store.
//!
//! `CatalogIndex` holds the four entity collections in catalog order (the
//! order screens render and the order filtering must preserve), plus
//! secondary indices for id and category lookups and precomputed aggregate
//! statistics.
//!
//! The index owns its entities; queries hand out borrowed slices and
//! references. Filtering itself lives in the engine crate; the store only
//! answers "give me the collection" questions.

use crate::error::{CatalogError, Result};
use crate::fixtures;
use crate::types::*;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::info;

/// In-memory store for one loaded catalog.
///
/// Primary storage is insertion-ordered `Vec`s; id and category indices map
/// into positions so category queries stay order-preserving.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    // Primary stores, in catalog order
    providers: Vec<Provider>,
    lab_tests: Vec<LabTest>,
    lab_results: Vec<LabResult>,
    appointments: Vec<Appointment>,

    // Id -> position
    provider_positions: HashMap<EntityId, usize>,
    lab_test_positions: HashMap<EntityId, usize>,
    lab_result_positions: HashMap<EntityId, usize>,
    appointment_positions: HashMap<EntityId, usize>,

    // Category id -> positions, preserving catalog order
    specialty_index: HashMap<&'static str, Vec<usize>>,
    test_category_index: HashMap<&'static str, Vec<usize>>,

    // Precomputed aggregates
    stats: CatalogStats,
}

impl CatalogIndex {
    /// Creates a new, empty CatalogIndex
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a full catalog from a fixture directory.
    ///
    /// Steps:
    /// 1. Parse all four fixture files in parallel
    /// 2. Build the primary stores and id indices
    /// 3. Build the category indices
    /// 4. Compute aggregate statistics
    /// 5. Validate catalog integrity
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        info!("Loading catalog fixtures from {}", data_dir.display());

        let providers_path = data_dir.join(fixtures::PROVIDERS_FILE);
        let lab_tests_path = data_dir.join(fixtures::LAB_TESTS_FILE);
        let lab_results_path = data_dir.join(fixtures::LAB_RESULTS_FILE);
        let appointments_path = data_dir.join(fixtures::APPOINTMENTS_FILE);

        // Nested joins give four-way parallel parsing
        let ((providers, lab_tests), (lab_results, appointments)) = rayon::join(
            || {
                rayon::join(
                    || fixtures::parse_providers(&providers_path),
                    || fixtures::parse_lab_tests(&lab_tests_path),
                )
            },
            || {
                rayon::join(
                    || fixtures::parse_lab_results(&lab_results_path),
                    || fixtures::parse_appointments(&appointments_path),
                )
            },
        );

        let providers = providers?;
        let lab_tests = lab_tests?;
        let lab_results = lab_results?;
        let appointments = appointments?;

        info!(
            providers = providers.len(),
            lab_tests = lab_tests.len(),
            lab_results = lab_results.len(),
            appointments = appointments.len(),
            "Parsed catalog fixtures"
        );

        let mut index = CatalogIndex::new();
        for provider in providers {
            index.insert_provider(provider);
        }
        for test in lab_tests {
            index.insert_lab_test(test);
        }
        for result in lab_results {
            index.insert_lab_result(result);
        }
        for appointment in appointments {
            index.insert_appointment(appointment);
        }

        index.build_category_index();
        index.compute_stats();
        index.validate()?;

        info!("Catalog index built and validated");
        Ok(index)
    }

    // Getters - borrowed views into the store, in catalog order

    /// All providers, in catalog order
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// All lab tests, in catalog order
    pub fn lab_tests(&self) -> &[LabTest] {
        &self.lab_tests
    }

    /// All lab results, in catalog order
    pub fn lab_results(&self) -> &[LabResult] {
        &self.lab_results
    }

    /// All appointments, in catalog order
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Get a provider by id
    pub fn get_provider(&self, id: &str) -> Option<&Provider> {
        self.provider_positions.get(id).map(|&pos| &self.providers[pos])
    }

    /// Get a lab test by id
    pub fn get_lab_test(&self, id: &str) -> Option<&LabTest> {
        self.lab_test_positions.get(id).map(|&pos| &self.lab_tests[pos])
    }

    /// Get a lab result by id
    pub fn get_lab_result(&self, id: &str) -> Option<&LabResult> {
        self.lab_result_positions.get(id).map(|&pos| &self.lab_results[pos])
    }

    /// Get an appointment by id
    pub fn get_appointment(&self, id: &str) -> Option<&Appointment> {
        self.appointment_positions.get(id).map(|&pos| &self.appointments[pos])
    }

    /// Providers in a specialty, in catalog order.
    ///
    /// An unknown specialty id yields an empty vec, not an error.
    pub fn providers_in_specialty(&self, specialty_id: &str) -> Vec<&Provider> {
        self.specialty_index
            .get(specialty_id)
            .map(|positions| positions.iter().map(|&pos| &self.providers[pos]).collect())
            .unwrap_or_default()
    }

    /// Lab tests in a category, in catalog order
    pub fn tests_in_category(&self, category_id: &str) -> Vec<&LabTest> {
        self.test_category_index
            .get(category_id)
            .map(|positions| positions.iter().map(|&pos| &self.lab_tests[pos]).collect())
            .unwrap_or_default()
    }

    /// Precomputed aggregate statistics
    pub fn stats(&self) -> &CatalogStats {
        &self.stats
    }

    /// Entity counts per kind: (providers, lab tests, lab results, appointments)
    pub fn counts(&self) -> (usize, usize, usize, usize) {
        (
            self.providers.len(),
            self.lab_tests.len(),
            self.lab_results.len(),
            self.appointments.len(),
        )
    }

    // Mutators - used while assembling a catalog

    /// Insert a provider at the end of the catalog
    pub fn insert_provider(&mut self, provider: Provider) {
        self.provider_positions
            .insert(provider.id.clone(), self.providers.len());
        self.providers.push(provider);
    }

    /// Insert a lab test at the end of the catalog
    pub fn insert_lab_test(&mut self, test: LabTest) {
        self.lab_test_positions
            .insert(test.id.clone(), self.lab_tests.len());
        self.lab_tests.push(test);
    }

    /// Insert a lab result at the end of the catalog
    pub fn insert_lab_result(&mut self, result: LabResult) {
        self.lab_result_positions
            .insert(result.id.clone(), self.lab_results.len());
        self.lab_results.push(result);
    }

    /// Insert an appointment at the end of the catalog
    pub fn insert_appointment(&mut self, appointment: Appointment) {
        self.appointment_positions
            .insert(appointment.id.clone(), self.appointments.len());
        self.appointments.push(appointment);
    }

    /// Build the category indices after primary data is loaded
    pub fn build_category_index(&mut self) {
        self.specialty_index.clear();
        for (pos, provider) in self.providers.iter().enumerate() {
            self.specialty_index
                .entry(provider.specialty.id())
                .or_default()
                .push(pos);
        }

        self.test_category_index.clear();
        for (pos, test) in self.lab_tests.iter().enumerate() {
            self.test_category_index
                .entry(test.category.id())
                .or_default()
                .push(pos);
        }
    }

    /// Compute aggregate statistics over the loaded catalog
    pub fn compute_stats(&mut self) {
        let rating_sum: f32 = self.providers.par_iter().map(|p| p.rating).sum();
        let price_sum: f32 = self.lab_tests.par_iter().map(|t| t.price_cents as f32).sum();
        let available_today_count = self
            .providers
            .par_iter()
            .filter(|p| p.available_today)
            .count();

        self.stats = CatalogStats {
            provider_count: self.providers.len(),
            lab_test_count: self.lab_tests.len(),
            lab_result_count: self.lab_results.len(),
            appointment_count: self.appointments.len(),
            avg_provider_rating: if self.providers.is_empty() {
                0.0
            } else {
                rating_sum / self.providers.len() as f32
            },
            avg_test_price_cents: if self.lab_tests.is_empty() {
                0.0
            } else {
                price_sum / self.lab_tests.len() as f32
            },
            available_today_count,
        };
    }

    /// Validate catalog integrity.
    ///
    /// Checks:
    /// - Every id is non-empty and unique within its kind
    /// - Provider ratings are within 0.0 - 5.0
    /// - Every appointment references an existing provider
    pub fn validate(&self) -> Result<()> {
        check_ids("Provider", self.providers.iter().map(|p| p.id.as_str()))?;
        check_ids("LabTest", self.lab_tests.iter().map(|t| t.id.as_str()))?;
        check_ids("LabResult", self.lab_results.iter().map(|r| r.id.as_str()))?;
        check_ids("Appointment", self.appointments.iter().map(|a| a.id.as_str()))?;

        for provider in &self.providers {
            if !(0.0..=5.0).contains(&provider.rating) {
                return Err(CatalogError::InvalidValue {
                    field: "rating".to_string(),
                    value: provider.rating.to_string(),
                });
            }
        }

        for appointment in &self.appointments {
            if !self.provider_positions.contains_key(&appointment.provider_id) {
                return Err(CatalogError::MissingReference {
                    entity: "Provider".to_string(),
                    id: appointment.provider_id.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Check that every id in an iterator is non-empty and unique
fn check_ids<'a>(entity: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(CatalogError::ValidationError(format!(
                "{entity} with empty id"
            )));
        }
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                entity: entity.to_string(),
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
