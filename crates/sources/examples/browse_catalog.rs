//! Example: Browse the demo catalog
//!
//! Run with: cargo run --package sources --example browse_catalog
//!
//! This example shows how to:
//! 1. Build the demo catalog
//! 2. Fetch a collection through a source
//! 3. Filter it with criteria
//! 4. Resolve a selection into a navigation intent

use catalog::Provider;
use engine::{FilterCriteria, SortKey};
use sources::{seed, EntitySource, FixtureSource};
use std::sync::Arc;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    println!("=== Carebook Catalog Browsing Example ===\n");

    // Build the demo catalog
    let start = Instant::now();
    let source = FixtureSource::new(Arc::new(seed::demo_catalog()));
    println!("Built demo catalog in {:?}", start.elapsed());

    let (providers, tests, results, appointments) = source.index().counts();
    println!("  Providers: {providers}");
    println!("  Lab tests: {tests}");
    println!("  Lab results: {results}");
    println!("  Appointments: {appointments}\n");

    // Fetch and filter providers
    let collection: Vec<Provider> = source.fetch_all()?;
    let criteria = FilterCriteria::new()
        .with_facet("available_today", true)
        .with_sort(SortKey::Featured);

    let start = Instant::now();
    let hits = engine::filter(&collection, &criteria)?;
    println!(
        "Available today ({} of {}, filtered in {:?}):",
        hits.len(),
        collection.len(),
        start.elapsed()
    );
    for (i, provider) in hits.iter().enumerate() {
        println!(
            "  {}. {} [{}] - {:.1} stars",
            i + 1,
            provider.name,
            provider.specialty.label(),
            provider.rating
        );
    }

    // Resolve the top hit into a navigation intent
    if let Some(top) = hits.first() {
        let intent = engine::select_entity(*top)?;
        println!("\nSelecting the top hit routes to: {:?}", intent.target);
    }

    Ok(())
}
