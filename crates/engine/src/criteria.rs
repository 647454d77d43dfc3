//! Filter criteria: the combined set of active search and filter
//! parameters for one query.
//!
//! Screens hand the engine one `FilterCriteria` value instead of scattering
//! search text, chip selection, and toggle state across local variables.
//! Every field is optional in effect: the default value imposes no
//! constraint at all.

use std::collections::BTreeMap;

/// Which category chip is active.
///
/// `All` disables category filtering entirely. `Only` compares the entity's
/// category id exactly (case-sensitive).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryChoice {
    #[default]
    All,
    Only(String),
}

impl CategoryChoice {
    /// Parse a chip value: the literal "ALL" disables the filter, anything
    /// else is an exact category id
    pub fn parse(value: &str) -> Self {
        if value == "ALL" {
            CategoryChoice::All
        } else {
            CategoryChoice::Only(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryChoice::All)
    }
}

/// Explicit result ordering.
///
/// Without a sort key the result list keeps the catalog order of its input.
/// Both sorts are stable, so entities with equal keys keep their original
/// relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive alphabetical by display name
    Name,
    /// Descending by the entity kind's rank value (rating for providers,
    /// price for tests)
    Featured,
}

/// The combined set of active search/filter parameters for one query.
///
/// ## Usage
/// ```ignore
/// let criteria = FilterCriteria::default()
///     .with_search("maria")
///     .with_category("CARDIOLOGIST")
///     .with_facet("available_today", true);
///
/// let results = engine::filter(index.providers(), &criteria)?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Matched case-insensitively as a substring against the entity's
    /// searchable text fields; "" imposes no constraint
    pub search_text: String,

    /// Active category chip
    pub category: CategoryChoice,

    /// Boolean facet toggles; each present entry must match the entity's
    /// field exactly. BTreeMap keeps facet application order deterministic.
    pub facets: BTreeMap<String, bool>,

    /// Explicit ordering, if any
    pub sort: Option<SortKey>,
}

impl FilterCriteria {
    /// Criteria imposing no constraint (returns the input unchanged)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search (builder pattern)
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Restrict to one category id (builder pattern)
    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category = CategoryChoice::Only(category_id.into());
        self
    }

    /// Require a boolean facet to match exactly (builder pattern)
    pub fn with_facet(mut self, name: impl Into<String>, expected: bool) -> Self {
        self.facets.insert(name.into(), expected);
        self
    }

    /// Order results explicitly (builder pattern)
    pub fn with_sort(mut self, key: SortKey) -> Self {
        self.sort = Some(key);
        self
    }

    /// True if no field imposes any constraint
    pub fn is_unconstrained(&self) -> bool {
        self.search_text.is_empty() && self.category.is_all() && self.facets.is_empty()
    }
}
