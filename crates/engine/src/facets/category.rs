//! Category equality predicate.
//!
//! Compares the entity's category id exactly (case-sensitive). A category id
//! present in no entity simply keeps nothing: an empty result, not an
//! error.

use crate::traits::Facet;
use catalog::CatalogEntity;

/// Keeps entities whose category id equals the selected chip exactly
pub struct CategoryFacet {
    category_id: String,
}

impl CategoryFacet {
    /// Create a new CategoryFacet for one category id.
    ///
    /// The "ALL" chip never reaches a stack; the criteria compiler only
    /// builds this facet for `CategoryChoice::Only`.
    pub fn new(category_id: &str) -> Self {
        Self {
            category_id: category_id.to_string(),
        }
    }
}

impl<E: CatalogEntity> Facet<E> for CategoryFacet {
    fn name(&self) -> &str {
        "CategoryFacet"
    }

    fn matches(&self, entity: &E) -> bool {
        entity.category_id() == self.category_id
    }
}
