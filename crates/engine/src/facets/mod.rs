//! Facet predicate implementations.
//!
//! This module contains the concrete predicates that criteria compile into:
//! free-text search, category equality, and boolean facet equality.

pub mod boolean;
pub mod category;
pub mod search_text;

// Re-export for convenience
pub use boolean::BooleanFacet;
pub use category::CategoryFacet;
pub use search_text::SearchTextFacet;
