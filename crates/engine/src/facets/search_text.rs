//! Free-text search predicate.
//!
//! Matches the query case-insensitively as a substring of at least one of
//! the entity's searchable text fields: display name, category label, or
//! description. Multi-field search is a logical OR across those fields; the
//! facet as a whole is ANDed with the rest of the stack.

use crate::traits::Facet;
use catalog::CatalogEntity;

/// Normalize text for search comparison: Unicode lowercase plus Latin
/// diacritic folding.
///
/// Folding makes "maria" find "Dr. María González": catalog names carry
/// accents, typed queries usually don't.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' | 'ã' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

/// Keeps entities whose searchable text contains the query.
///
/// ## Algorithm
/// The query is normalized once at construction; each candidate field is
/// normalized at match time and checked for a substring hit.
pub struct SearchTextFacet {
    needle: String,
}

impl SearchTextFacet {
    /// Create a new SearchTextFacet for a non-empty query.
    ///
    /// Empty queries never reach a stack: they impose no constraint and the
    /// criteria compiler skips them.
    pub fn new(query: &str) -> Self {
        Self {
            needle: normalize(query),
        }
    }
}

impl<E: CatalogEntity> Facet<E> for SearchTextFacet {
    fn name(&self) -> &str {
        "SearchTextFacet"
    }

    fn matches(&self, entity: &E) -> bool {
        normalize(entity.display_name()).contains(&self.needle)
            || normalize(entity.category_label()).contains(&self.needle)
            || normalize(entity.description()).contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Provider, Specialty};

    fn sample_provider(name: &str, specialty: Specialty, bio: &str) -> Provider {
        Provider {
            id: "prov-1".to_string(),
            name: name.to_string(),
            specialty,
            bio: bio.to_string(),
            rating: 4.0,
            review_count: 10,
            consultation_fee_cents: 3000,
            available_today: true,
            offers_telemedicine: false,
            accepts_new_patients: true,
            next_slot: None,
        }
    }

    #[test]
    fn test_normalize_lowercases_and_folds() {
        assert_eq!(normalize("MARÍA"), "maria");
        assert_eq!(normalize("maría"), "maria");
        assert_eq!(normalize("Ramírez"), "ramirez");
        assert_eq!(normalize("Niño"), "nino");
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        let provider = sample_provider("Dr. María González", Specialty::Cardiologist, "");

        assert!(SearchTextFacet::new("maría").matches(&provider));
        assert!(SearchTextFacet::new("MARÍA").matches(&provider));
        assert!(SearchTextFacet::new("gonzález").matches(&provider));
        assert!(!SearchTextFacet::new("ramírez").matches(&provider));
    }

    #[test]
    fn test_unaccented_query_finds_accented_name() {
        let provider = sample_provider("Dr. María González", Specialty::Cardiologist, "");

        assert!(SearchTextFacet::new("maria").matches(&provider));
        assert!(SearchTextFacet::new("gonzalez").matches(&provider));
    }

    #[test]
    fn test_matches_category_label() {
        let provider = sample_provider("Dr. Ana Torres", Specialty::Dermatologist, "");

        // "dermat" hits the category label, not the name
        assert!(SearchTextFacet::new("dermat").matches(&provider));
    }

    #[test]
    fn test_matches_description() {
        let provider = sample_provider(
            "Dr. Luis Vega",
            Specialty::GeneralDoctor,
            "Specialized in sports medicine",
        );

        assert!(SearchTextFacet::new("sports").matches(&provider));
        assert!(!SearchTextFacet::new("pediatrics").matches(&provider));
    }
}
