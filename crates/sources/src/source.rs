//! The query interface callers use to obtain entity collections.
//!
//! The filter engine never fetches anything: a screen asks a source for a
//! collection, then lends it to the engine for one evaluation. Sources
//! return owned entities so a remote implementation (backend query) and the
//! local fixture implementation look identical to callers.

use anyhow::Result;
use catalog::{Appointment, CatalogEntity, CatalogIndex, LabResult, LabTest, Provider};
use std::sync::Arc;
use tracing::debug;

/// Supplies entity collections for one catalog kind.
///
/// Implementations answer in catalog order; `fetch_by_category` with an id
/// no entity carries returns an empty vec, not an error.
pub trait EntitySource<E: CatalogEntity + Clone> {
    /// The whole catalog for this kind
    fn fetch_all(&self) -> Result<Vec<E>>;

    /// Entities whose category id equals `category_id` exactly
    fn fetch_by_category(&self, category_id: &str) -> Result<Vec<E>>;

    /// One entity by id
    fn fetch_by_id(&self, id: &str) -> Result<Option<E>>;
}

/// Source backed by a loaded `CatalogIndex`.
///
/// Wraps the index in an `Arc` so any number of screens can share one
/// loaded catalog without copying it.
#[derive(Clone)]
pub struct FixtureSource {
    index: Arc<CatalogIndex>,
}

impl FixtureSource {
    pub fn new(index: Arc<CatalogIndex>) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }
}

impl EntitySource<Provider> for FixtureSource {
    fn fetch_all(&self) -> Result<Vec<Provider>> {
        debug!("Fetching all providers");
        Ok(self.index.providers().to_vec())
    }

    fn fetch_by_category(&self, category_id: &str) -> Result<Vec<Provider>> {
        debug!("Fetching providers in specialty {category_id}");
        Ok(self
            .index
            .providers_in_specialty(category_id)
            .into_iter()
            .cloned()
            .collect())
    }

    fn fetch_by_id(&self, id: &str) -> Result<Option<Provider>> {
        Ok(self.index.get_provider(id).cloned())
    }
}

impl EntitySource<LabTest> for FixtureSource {
    fn fetch_all(&self) -> Result<Vec<LabTest>> {
        debug!("Fetching all lab tests");
        Ok(self.index.lab_tests().to_vec())
    }

    fn fetch_by_category(&self, category_id: &str) -> Result<Vec<LabTest>> {
        debug!("Fetching lab tests in category {category_id}");
        Ok(self
            .index
            .tests_in_category(category_id)
            .into_iter()
            .cloned()
            .collect())
    }

    fn fetch_by_id(&self, id: &str) -> Result<Option<LabTest>> {
        Ok(self.index.get_lab_test(id).cloned())
    }
}

impl EntitySource<LabResult> for FixtureSource {
    fn fetch_all(&self) -> Result<Vec<LabResult>> {
        debug!("Fetching all lab results");
        Ok(self.index.lab_results().to_vec())
    }

    // No secondary index for results; a linear scan keeps catalog order
    fn fetch_by_category(&self, category_id: &str) -> Result<Vec<LabResult>> {
        Ok(self
            .index
            .lab_results()
            .iter()
            .filter(|r| r.category_id() == category_id)
            .cloned()
            .collect())
    }

    fn fetch_by_id(&self, id: &str) -> Result<Option<LabResult>> {
        Ok(self.index.get_lab_result(id).cloned())
    }
}

impl EntitySource<Appointment> for FixtureSource {
    fn fetch_all(&self) -> Result<Vec<Appointment>> {
        debug!("Fetching all appointments");
        Ok(self.index.appointments().to_vec())
    }

    fn fetch_by_category(&self, category_id: &str) -> Result<Vec<Appointment>> {
        Ok(self
            .index
            .appointments()
            .iter()
            .filter(|a| a.category_id() == category_id)
            .cloned()
            .collect())
    }

    fn fetch_by_id(&self, id: &str) -> Result<Option<Appointment>> {
        Ok(self.index.get_appointment(id).cloned())
    }
}
