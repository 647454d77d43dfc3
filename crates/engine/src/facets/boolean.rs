//! Boolean facet predicate.
//!
//! Requires one named boolean field of the entity (e.g. "available_today",
//! "requires_preparation") to equal the requested value exactly.

use crate::traits::Facet;
use catalog::CatalogEntity;

/// Keeps entities whose named boolean facet equals the expected value.
///
/// The facet name is validated against the entity kind's recognized facet
/// list before a stack is built, so `boolean_facet` resolves for every
/// entity this predicate sees.
pub struct BooleanFacet {
    facet: String,
    expected: bool,
}

impl BooleanFacet {
    /// Create a new BooleanFacet for one facet name and expected value
    pub fn new(facet: &str, expected: bool) -> Self {
        Self {
            facet: facet.to_string(),
            expected,
        }
    }
}

impl<E: CatalogEntity> Facet<E> for BooleanFacet {
    fn name(&self) -> &str {
        &self.facet
    }

    fn matches(&self, entity: &E) -> bool {
        entity.boolean_facet(&self.facet) == Some(self.expected)
    }
}
