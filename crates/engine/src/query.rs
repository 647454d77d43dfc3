//! The engine's entry point: evaluate one FilterCriteria over one borrowed
//! entity collection.
//!
//! `filter` is a pure function: no side effects, no I/O, no state between
//! calls. Concurrent callers (two screens filtering independently) share
//! nothing and need no coordination; which result a screen renders on rapid
//! successive calls is the presentation layer's last-write-wins concern.

use crate::criteria::{CategoryChoice, FilterCriteria, SortKey};
use crate::error::{EngineError, Result};
use crate::facets::{BooleanFacet, CategoryFacet, SearchTextFacet};
use crate::stack::FacetStack;
use catalog::CatalogEntity;
use std::cmp::Ordering;

/// Evaluate criteria over a borrowed collection.
///
/// Returns the subsequence of `entities` (as references into the input, in
/// original relative order unless `criteria.sort` is set) satisfying all
/// active predicates. Absent/default criteria fields impose no constraint.
///
/// # Errors
/// `InvalidInput` if a facet name is not recognized by the entity kind.
/// An empty result is a normal outcome, never an error, including when the
/// category id matches no entity.
pub fn filter<'a, E: CatalogEntity>(
    entities: &'a [E],
    criteria: &FilterCriteria,
) -> Result<Vec<&'a E>> {
    validate_criteria::<E>(criteria)?;

    let stack = compile_stack::<E>(criteria);
    let mut results = stack.apply(entities.iter().collect());

    if let Some(key) = criteria.sort {
        apply_sort(&mut results, key);
    }

    Ok(results)
}

/// Reject criteria the entity kind cannot answer.
///
/// Facet names are part of the criteria shape; an unrecognized name is a
/// caller bug and fails fast before any filtering work. Category ids are
/// values, not shape; an unknown id filters to an empty list instead.
fn validate_criteria<E: CatalogEntity>(criteria: &FilterCriteria) -> Result<()> {
    for name in criteria.facets.keys() {
        if !E::FACETS.contains(&name.as_str()) {
            return Err(EngineError::InvalidInput {
                reason: format!(
                    "unknown facet \"{name}\" (recognized: {})",
                    E::FACETS.join(", ")
                ),
            });
        }
    }
    Ok(())
}

/// Compile the active criteria fields into a facet stack.
///
/// Only active fields become predicates: empty search text, the ALL
/// category chip, and an empty facet map compile to nothing.
fn compile_stack<E: CatalogEntity>(criteria: &FilterCriteria) -> FacetStack<E> {
    let mut stack = FacetStack::new();

    if !criteria.search_text.is_empty() {
        stack = stack.add_facet(SearchTextFacet::new(&criteria.search_text));
    }

    if let CategoryChoice::Only(category_id) = &criteria.category {
        stack = stack.add_facet(CategoryFacet::new(category_id));
    }

    for (name, &expected) in &criteria.facets {
        stack = stack.add_facet(BooleanFacet::new(name, expected));
    }

    stack
}

/// Stable sort, so equal keys keep catalog order
fn apply_sort<E: CatalogEntity>(results: &mut [&E], key: SortKey) {
    match key {
        SortKey::Name => {
            results.sort_by(|a, b| {
                a.display_name()
                    .to_lowercase()
                    .cmp(&b.display_name().to_lowercase())
            });
        }
        SortKey::Featured => {
            results.sort_by(|a, b| {
                b.rank_value()
                    .partial_cmp(&a.rank_value())
                    .unwrap_or(Ordering::Equal)
            });
        }
    }
}
