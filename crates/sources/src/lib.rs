//! # Sources Crate
//!
//! Entity-collection suppliers for the Carebook catalogs.
//!
//! ## Components
//!
//! ### EntitySource
//! The query interface screens use to obtain a collection before lending it
//! to the filter engine: fetch-all, fetch-by-category, fetch-by-id. The
//! engine itself never fetches.
//!
//! ### FixtureSource
//! Answers queries from a loaded `CatalogIndex` shared behind an `Arc`.
//! A remote source (backend catalog query) would implement the same trait;
//! callers cannot tell the difference.
//!
//! ### seed
//! The built-in demo catalog: hardcoded, fictional data used by tests,
//! examples, and offline runs.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{seed, EntitySource, FixtureSource};
//! use catalog::Provider;
//! use std::sync::Arc;
//!
//! let source = FixtureSource::new(Arc::new(seed::demo_catalog()));
//! let providers: Vec<Provider> = source.fetch_by_category("CARDIOLOGIST")?;
//! ```

// Public modules
pub mod seed;
pub mod source;

// Re-export commonly used types
pub use source::{EntitySource, FixtureSource};

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{LabTest, Provider};
    use std::sync::Arc;

    #[test]
    fn test_one_source_serves_every_catalog_kind() {
        let source = FixtureSource::new(Arc::new(seed::demo_catalog()));

        let providers: Vec<Provider> = source.fetch_all().unwrap();
        let tests: Vec<LabTest> = source.fetch_all().unwrap();

        assert!(!providers.is_empty());
        assert!(!tests.is_empty());
    }

    #[test]
    fn test_demo_providers_resolve_by_id() {
        let source = FixtureSource::new(Arc::new(seed::demo_catalog()));

        let maria: Option<Provider> = source.fetch_by_id("prov-1").unwrap();
        let carlos: Option<Provider> = source.fetch_by_id("prov-2").unwrap();

        assert_eq!(maria.unwrap().name, "Dr. María González");
        assert_eq!(carlos.unwrap().name, "Dr. Carlos Ramírez");
    }
}
