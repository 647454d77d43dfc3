//! Catalog filter engine for Carebook list screens.
//!
//! This crate provides:
//! - FilterCriteria describing one query (search text, category chip,
//!   boolean facet toggles, optional sort)
//! - Facet trait and predicate implementations
//! - FacetStack for composing predicates
//! - `filter` / `select_entity` entry points
//! - MatchSummary annotations for result highlighting
//!
//! ## Architecture
//! One query is evaluated in stages:
//! 1. Criteria are validated against the entity kind's recognized facets
//! 2. Active criteria compile into a FacetStack of predicates
//! 3. The stack filters the borrowed collection in one pass per facet
//! 4. An explicit sort key, if any, reorders the result stably
//!
//! The engine is stateless and owns no entities: collections are borrowed
//! for the duration of one evaluation, and all screen state (current search
//! text, selected chip, toggles) lives with the caller as a FilterCriteria.
//!
//! ## Example Usage
//! ```ignore
//! use engine::{FilterCriteria, SortKey};
//!
//! let criteria = FilterCriteria::new()
//!     .with_search("maria")
//!     .with_facet("available_today", true)
//!     .with_sort(SortKey::Featured);
//!
//! let hits = engine::filter(index.providers(), &criteria)?;
//! let intent = engine::select_entity(hits[0])?;
//! ```

pub mod criteria;
pub mod error;
pub mod facets;
pub mod query;
pub mod relevance;
pub mod selection;
pub mod stack;
pub mod traits;

// Re-export main types
pub use criteria::{CategoryChoice, FilterCriteria, SortKey};
pub use error::{EngineError, Result};
pub use query::filter;
pub use relevance::{summarize_matches, MatchSummary};
pub use selection::{select_entity, NavigationIntent};
pub use stack::FacetStack;
pub use traits::Facet;
