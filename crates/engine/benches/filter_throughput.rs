//! Benchmarks for filter evaluation
//!
//! Run with: cargo bench --package engine
//!
//! This benchmarks one criteria evaluation over a synthetic provider
//! catalog at the upper end of realistic client-side sizes.

use catalog::{Provider, Specialty};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use engine::{filter, summarize_matches, FilterCriteria, SortKey};

const SPECIALTIES: [Specialty; 4] = [
    Specialty::GeneralDoctor,
    Specialty::Cardiologist,
    Specialty::Dermatologist,
    Specialty::Pediatrician,
];

fn synthetic_catalog(size: usize) -> Vec<Provider> {
    (0..size)
        .map(|i| Provider {
            id: format!("prov-{i}"),
            name: format!("Dr. Provider {i}"),
            specialty: SPECIALTIES[i % SPECIALTIES.len()],
            bio: format!("Clinic {} - general practice and checkups", i % 17),
            rating: 3.0 + (i % 20) as f32 / 10.0,
            review_count: (i % 200) as u32,
            consultation_fee_cents: 2500 + (i % 40) as u32 * 100,
            available_today: i % 3 == 0,
            offers_telemedicine: i % 2 == 0,
            accepts_new_patients: i % 5 != 0,
            next_slot: None,
        })
        .collect()
}

fn bench_filter_full_criteria(c: &mut Criterion) {
    let providers = synthetic_catalog(500);
    let criteria = FilterCriteria::new()
        .with_search("clinic 3")
        .with_category("CARDIOLOGIST")
        .with_facet("available_today", true);

    c.bench_function("filter_full_criteria_500", |b| {
        b.iter(|| {
            let hits = filter(black_box(&providers), black_box(&criteria)).unwrap();
            black_box(hits)
        })
    });
}

fn bench_filter_search_only(c: &mut Criterion) {
    let providers = synthetic_catalog(500);
    let criteria = FilterCriteria::new().with_search("provider 42");

    c.bench_function("filter_search_only_500", |b| {
        b.iter(|| {
            let hits = filter(black_box(&providers), black_box(&criteria)).unwrap();
            black_box(hits)
        })
    });
}

fn bench_filter_sorted(c: &mut Criterion) {
    let providers = synthetic_catalog(500);
    let criteria = FilterCriteria::new()
        .with_facet("offers_telemedicine", true)
        .with_sort(SortKey::Featured);

    c.bench_function("filter_sorted_500", |b| {
        b.iter(|| {
            let hits = filter(black_box(&providers), black_box(&criteria)).unwrap();
            black_box(hits)
        })
    });
}

fn bench_match_summaries(c: &mut Criterion) {
    let providers = synthetic_catalog(500);
    let criteria = FilterCriteria::new().with_search("clinic");
    let hits = filter(&providers, &criteria).unwrap();

    c.bench_function("summarize_matches_500", |b| {
        b.iter(|| {
            let summaries = summarize_matches(black_box(&hits), black_box(&criteria));
            black_box(summaries)
        })
    });
}

criterion_group!(
    benches,
    bench_filter_full_criteria,
    bench_filter_search_only,
    bench_filter_sorted,
    bench_match_summaries
);
criterion_main!(benches);
