//! Match summaries for filtered results.
//!
//! After filtering, the presentation layer wants to know *why* each hit
//! matched the search text so it can highlight the right row fields. This
//! module computes one summary per result, in result order.

use crate::criteria::FilterCriteria;
use crate::facets::search_text::normalize;
use catalog::{CatalogEntity, EntityId};
use rayon::prelude::*;

/// Which searchable fields of one result the query text matched.
///
/// With empty search text nothing is marked; there was no text predicate
/// to attribute the hit to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub entity_id: EntityId,
    pub matched_name: bool,
    pub matched_category: bool,
    pub matched_description: bool,
}

impl MatchSummary {
    pub fn matched_any(&self) -> bool {
        self.matched_name || self.matched_category || self.matched_description
    }
}

/// Compute match summaries for a filtered result set.
///
/// # Arguments
/// * `results` - The references returned by `filter` for the same criteria
/// * `criteria` - The criteria the results were filtered with
///
/// # Returns
/// One MatchSummary per result, in the same order.
pub fn summarize_matches<E: CatalogEntity>(
    results: &[&E],
    criteria: &FilterCriteria,
) -> Vec<MatchSummary> {
    let needle = normalize(&criteria.search_text);

    results
        .par_iter()
        .map(|entity| {
            if needle.is_empty() {
                return MatchSummary {
                    entity_id: entity.entity_id().to_string(),
                    matched_name: false,
                    matched_category: false,
                    matched_description: false,
                };
            }

            MatchSummary {
                entity_id: entity.entity_id().to_string(),
                matched_name: normalize(entity.display_name()).contains(&needle),
                matched_category: normalize(entity.category_label()).contains(&needle),
                matched_description: normalize(entity.description()).contains(&needle),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::filter;
    use catalog::{Provider, Specialty};

    fn sample_provider(id: &str, name: &str, bio: &str) -> Provider {
        Provider {
            id: id.to_string(),
            name: name.to_string(),
            specialty: Specialty::Cardiologist,
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
    fn test_summaries_attribute_the_matched_field() {
        let providers = vec![
            sample_provider("prov-1", "Dr. María González", "Preventive cardiology"),
            sample_provider("prov-2", "Dr. Ana Torres", "Working with María's clinic"),
        ];

        let criteria = FilterCriteria::new().with_search("maría");
        let results = filter(&providers, &criteria).unwrap();
        let summaries = summarize_matches(&results, &criteria);

        assert_eq!(summaries.len(), 2);
        assert!(summaries[0].matched_name);
        assert!(!summaries[0].matched_description);
        assert!(!summaries[1].matched_name);
        assert!(summaries[1].matched_description);
    }

    #[test]
    fn test_empty_search_marks_nothing() {
        let providers = vec![sample_provider("prov-1", "Dr. María González", "")];

        let criteria = FilterCriteria::default();
        let results = filter(&providers, &criteria).unwrap();
        let summaries = summarize_matches(&results, &criteria);

        assert_eq!(summaries.len(), 1);
        assert!(!summaries[0].matched_any());
    }
}
