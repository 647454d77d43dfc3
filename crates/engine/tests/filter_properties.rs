//! Integration tests for the filter engine.
//!
//! These exercise the engine's externally observable guarantees over a
//! realistic provider catalog: stable-subsequence output, idempotence,
//! monotonicity, Unicode-insensitive search, and the no-error semantics of
//! empty results.

use catalog::{Provider, Specialty};
use engine::{filter, select_entity, EngineError, FilterCriteria};

fn provider(id: &str, name: &str, specialty: Specialty, available_today: bool) -> Provider {
    Provider {
        id: id.to_string(),
        name: name.to_string(),
        specialty,
        bio: String::new(),
        rating: 4.0,
        review_count: 25,
        consultation_fee_cents: 3500,
        available_today,
        offers_telemedicine: false,
        accepts_new_patients: true,
        next_slot: None,
    }
}

/// The catalog from the booking screen's demo data
fn demo_catalog() -> Vec<Provider> {
    vec![
        provider("1", "Dr. María González", Specialty::Cardiologist, true),
        provider("2", "Dr. Carlos Ramírez", Specialty::GeneralDoctor, false),
        provider("3", "Dr. Ana Torres", Specialty::Dermatologist, true),
        provider("4", "Dr. Luis Vega", Specialty::GeneralDoctor, true),
        provider("5", "Dr. Sofía Herrera", Specialty::Pediatrician, false),
    ]
}

#[test]
fn result_is_a_stable_subsequence_of_the_input() {
    let entities = demo_catalog();
    let criteria = FilterCriteria::new().with_facet("available_today", true);

    let results = filter(&entities, &criteria).unwrap();

    // Every returned reference points into the input collection
    for result in &results {
        assert!(entities.iter().any(|e| std::ptr::eq(e, *result)));
    }

    // Relative order is preserved
    let positions: Vec<usize> = results
        .iter()
        .map(|r| entities.iter().position(|e| std::ptr::eq(e, *r)).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);

    // No duplicates
    let mut deduped = positions.clone();
    deduped.dedup();
    assert_eq!(positions, deduped);
}

#[test]
fn filtering_twice_with_the_same_criteria_is_a_no_op() {
    let entities = demo_catalog();
    let criteria = FilterCriteria::new()
        .with_search("dr.")
        .with_facet("available_today", true);

    let once: Vec<Provider> = filter(&entities, &criteria)
        .unwrap()
        .into_iter()
        .cloned()
        .collect();
    let twice = filter(&once, &criteria).unwrap();

    let first_ids: Vec<&str> = once.iter().map(|p| p.id.as_str()).collect();
    let second_ids: Vec<&str> = twice.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(first_ids, second_ids);
}

#[test]
fn default_criteria_return_the_collection_unchanged() {
    let entities = demo_catalog();
    let results = filter(&entities, &FilterCriteria::default()).unwrap();

    assert_eq!(results.len(), entities.len());
    for (result, original) in results.iter().zip(entities.iter()) {
        assert!(std::ptr::eq(*result, original));
    }
}

#[test]
fn adding_a_facet_never_grows_the_result() {
    let entities = demo_catalog();

    let base = FilterCriteria::new().with_search("dr.");
    let narrowed = base.clone().with_facet("available_today", true);
    let narrowed_further = narrowed.clone().with_category("GENERAL_DOCTOR");

    let n0 = filter(&entities, &base).unwrap().len();
    let n1 = filter(&entities, &narrowed).unwrap().len();
    let n2 = filter(&entities, &narrowed_further).unwrap().len();

    assert!(n1 <= n0);
    assert!(n2 <= n1);
}

#[test]
fn search_is_case_insensitive_for_accented_text() {
    let entities = demo_catalog();

    let lower = filter(&entities, &FilterCriteria::new().with_search("maría")).unwrap();
    let upper = filter(&entities, &FilterCriteria::new().with_search("MARÍA")).unwrap();

    let lower_ids: Vec<&str> = lower.iter().map(|p| p.id.as_str()).collect();
    let upper_ids: Vec<&str> = upper.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(lower_ids, upper_ids);
    assert_eq!(lower_ids, vec!["1"]);
}

#[test]
fn booking_screen_scenario() {
    let entities = demo_catalog();

    // Free text hits only the cardiologist
    let by_name = filter(&entities, &FilterCriteria::new().with_search("maria")).unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, "1");

    // Category chip hits both general doctors, in catalog order
    let by_category =
        filter(&entities, &FilterCriteria::new().with_category("GENERAL_DOCTOR")).unwrap();
    let ids: Vec<&str> = by_category.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "4"]);

    // ALL chip plus an availability toggle
    let available =
        filter(&entities, &FilterCriteria::new().with_facet("available_today", true)).unwrap();
    let ids: Vec<&str> = available.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3", "4"]);

    // No match is an empty list, not an error
    let nothing = filter(&entities, &FilterCriteria::new().with_search("xyz")).unwrap();
    assert!(nothing.is_empty());
}

#[test]
fn unaccented_query_finds_accented_names() {
    // Typed queries usually drop accents; the engine folds Latin diacritics
    // during search normalization so "maria" still finds "María".
    let entities = demo_catalog();
    let hits = filter(&entities, &FilterCriteria::new().with_search("gonzalez")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "1");
}

#[test]
fn selecting_a_hit_yields_a_booking_intent() {
    let entities = demo_catalog();
    let hits = filter(&entities, &FilterCriteria::new().with_search("maría")).unwrap();

    let intent = select_entity(hits[0]).unwrap();
    assert_eq!(intent.entity_id, "1");
}

#[test]
fn malformed_facet_name_fails_before_filtering() {
    let entities = demo_catalog();
    let criteria = FilterCriteria::new()
        .with_search("maría")
        .with_facet("speaks_french", true);

    let err = filter(&entities, &criteria).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput { .. }));

    // Same criteria on an empty collection still fail: validation does not
    // depend on the data
    let empty: Vec<Provider> = Vec::new();
    assert!(filter(&empty, &criteria).is_err());
}
