//! The FacetStack chains multiple facet predicates.
//!
//! This module provides the FacetStack struct that applies the active
//! predicates of one query in sequence using the builder pattern.

use crate::traits::Facet;
use catalog::CatalogEntity;
use tracing;

/// Chains facet predicates into one conjunctive query.
///
/// ## Usage
/// ```ignore
/// let stack = FacetStack::new()
///     .add_facet(SearchTextFacet::new("maria"))
///     .add_facet(CategoryFacet::new("CARDIOLOGIST"))
///     .add_facet(BooleanFacet::new("available_today", true));
///
/// let kept = stack.apply(index.providers().iter().collect());
/// ```
pub struct FacetStack<E: CatalogEntity> {
    facets: Vec<Box<dyn Facet<E>>>,
}

impl<E: CatalogEntity> FacetStack<E> {
    /// Create a new empty FacetStack.
    pub fn new() -> Self {
        Self { facets: Vec::new() }
    }

    /// Add a facet to the stack (builder pattern).
    pub fn add_facet(mut self, facet: impl Facet<E> + 'static) -> Self {
        self.facets.push(Box::new(facet));
        self
    }

    /// Number of active facets
    pub fn len(&self) -> usize {
        self.facets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Apply all facets in sequence over borrowed entities.
    ///
    /// ## Algorithm
    /// 1. Start with the input references
    /// 2. For each facet in order:
    ///    a. Log facet name and input count
    ///    b. Retain entities the facet matches
    ///    c. Log output count
    /// 3. Return the surviving references
    ///
    /// Facets combine as a logical AND. `retain` keeps relative order, so
    /// the result is always a stable subsequence of the input; one pass per
    /// facet gives O(n × f) overall.
    pub fn apply<'a>(&self, entities: Vec<&'a E>) -> Vec<&'a E> {
        let mut current = entities;
        for facet in &self.facets {
            tracing::debug!(
                "Applying facet: {} (input count: {})",
                facet.name(),
                current.len()
            );
            current.retain(|entity| facet.matches(entity));
            tracing::debug!(
                "Facet applied: {} (output count: {})",
                facet.name(),
                current.len()
            );
        }
        current
    }
}

impl<E: CatalogEntity> Default for FacetStack<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::{BooleanFacet, CategoryFacet};
    use catalog::{Provider, Specialty};

    fn sample_provider(id: &str, specialty: Specialty, available_today: bool) -> Provider {
        Provider {
            id: id.to_string(),
            name: format!("Dr. {id}"),
            specialty,
            bio: String::new(),
            rating: 4.0,
            review_count: 10,
            consultation_fee_cents: 3000,
            available_today,
            offers_telemedicine: false,
            accepts_new_patients: true,
            next_slot: None,
        }
    }

    #[test]
    fn test_empty_stack_keeps_everything() {
        let providers = vec![
            sample_provider("prov-1", Specialty::Cardiologist, true),
            sample_provider("prov-2", Specialty::GeneralDoctor, false),
        ];

        let stack: FacetStack<Provider> = FacetStack::new();
        let kept = stack.apply(providers.iter().collect());
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_facets_combine_as_and() {
        let providers = vec![
            sample_provider("prov-1", Specialty::Cardiologist, true),
            sample_provider("prov-2", Specialty::Cardiologist, false),
            sample_provider("prov-3", Specialty::GeneralDoctor, true),
        ];

        let stack = FacetStack::new()
            .add_facet(CategoryFacet::new("CARDIOLOGIST"))
            .add_facet(BooleanFacet::new("available_today", true));

        let kept = stack.apply(providers.iter().collect());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "prov-1");
    }

    #[test]
    fn test_apply_preserves_input_order() {
        let providers = vec![
            sample_provider("prov-3", Specialty::Cardiologist, true),
            sample_provider("prov-1", Specialty::Cardiologist, true),
            sample_provider("prov-2", Specialty::Cardiologist, true),
        ];

        let stack = FacetStack::new().add_facet(CategoryFacet::new("CARDIOLOGIST"));
        let kept = stack.apply(providers.iter().collect());

        let ids: Vec<&str> = kept.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["prov-3", "prov-1", "prov-2"]);
    }
}
