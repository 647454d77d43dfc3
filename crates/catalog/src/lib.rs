//! # Catalog Crate
//!
//! Canonical schemas and in-memory store for the Carebook catalogs.
//!
//! ## Main Components
//!
//! - **types**: Entity schemas (Provider, LabTest, LabResult, Appointment),
//!   category enums with stable wire ids, navigation descriptors
//! - **entity**: The `CatalogEntity` trait the filter engine works against
//! - **fixtures**: Parse catalog JSON fixture files into schema structs
//! - **index**: `CatalogIndex`, the ordered in-memory store with id/category
//!   lookups and aggregate stats
//! - **error**: Error types for loading and validation
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::CatalogIndex;
//! use std::path::Path;
//!
//! // Load the whole catalog
//! let index = CatalogIndex::load_from_files(Path::new("data/catalog"))?;
//!
//! // Query it
//! let provider = index.get_provider("prov-1").unwrap();
//! let cardiologists = index.providers_in_specialty("CARDIOLOGIST");
//!
//! println!("{} has {} cardiologists", provider.name, cardiologists.len());
//! ```

// Public modules
pub mod entity;
pub mod error;
pub mod fixtures;
pub mod index;
pub mod types;

// Re-export commonly used types for convenience
pub use entity::CatalogEntity;
pub use error::{CatalogError, Result};
pub use index::CatalogIndex;
pub use types::{
    // Type aliases
    EntityId,
    // Core types
    Appointment,
    CatalogStats,
    LabResult,
    LabTest,
    NavigationTarget,
    Provider,
    // Enums
    AppointmentStatus,
    Specialty,
    TestCategory,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_creation() {
        let index = CatalogIndex::new();
        assert_eq!(index.counts(), (0, 0, 0, 0));
    }

    #[test]
    fn test_insert_lab_test() {
        let mut index = CatalogIndex::new();

        index.insert_lab_test(LabTest {
            id: "test-1".to_string(),
            name: "Complete Blood Count".to_string(),
            category: TestCategory::BloodTest,
            description: "Counts red cells, white cells and platelets".to_string(),
            price_cents: 2500,
            turnaround_hours: 24,
            requires_preparation: false,
            fasting_required: false,
            home_collection: true,
            preparation_notes: None,
        });

        let retrieved = index.get_lab_test("test-1").unwrap();
        assert_eq!(retrieved.name, "Complete Blood Count");
        assert_eq!(retrieved.category, TestCategory::BloodTest);
    }

    #[test]
    fn test_empty_queries() {
        let index = CatalogIndex::new();

        assert!(index.get_provider("x").is_none());
        assert!(index.get_lab_test("x").is_none());
        assert!(index.get_lab_result("x").is_none());
        assert!(index.get_appointment("x").is_none());
        assert!(index.tests_in_category("BLOOD_TEST").is_empty());
    }
}
