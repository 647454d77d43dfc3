//! Simple test harness for the catalog service.
//!
//! This binary runs one search per catalog kind against the built-in demo
//! catalog and prints the results.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use engine::{FilterCriteria, SortKey};
use server::CatalogService;
use sources::seed;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,server=debug,engine=debug")
        .init();

    info!("Starting Carebook service test harness");

    let service = CatalogService::new(Arc::new(seed::demo_catalog()));

    let overview = service.overview().await?;
    info!(
        providers = overview.provider_count,
        available_today = overview.available_today_count,
        lab_tests = overview.lab_test_count,
        upcoming_appointments = overview.upcoming_appointments,
        "Catalog overview"
    );

    // Providers available today, best rated first
    let criteria = FilterCriteria::new()
        .with_facet("available_today", true)
        .with_sort(SortKey::Featured);
    let providers = service.search_providers(&criteria, 10).await?;
    info!("Providers available today ({} matched):", providers.total_matched);
    for (i, row) in providers.rows.iter().enumerate() {
        info!("{}. {} - {} [{}]", i + 1, row.title, row.subtitle, row.fee);
    }

    // Blood tests with home collection
    let criteria = FilterCriteria::new()
        .with_category("BLOOD_TEST")
        .with_facet("home_collection", true);
    let tests = service.search_lab_tests(&criteria, 10).await?;
    info!("Blood tests with home collection ({} matched):", tests.total_matched);
    for row in &tests.rows {
        info!("- {} ({}) {}", row.title, row.subtitle, row.price);
    }

    // Ready results
    let criteria = FilterCriteria::new().with_facet("ready", true);
    let results = service.search_results(&criteria, 10).await?;
    info!("Ready results ({} matched):", results.total_matched);
    for row in &results.rows {
        info!("- {} [{}]", row.title, row.status);
    }

    // Upcoming appointments
    let criteria = FilterCriteria::new().with_facet("upcoming", true);
    let appointments = service.search_appointments(&criteria, 10).await?;
    info!("Upcoming appointments ({} matched):", appointments.total_matched);
    for row in &appointments.rows {
        info!("- {} - {}", row.title, row.subtitle);
    }

    // Resolve a selection the way a list tap would
    let intent = service.open_provider("prov-1")?;
    info!("Selecting prov-1 routes to: {:?}", intent.target);

    Ok(())
}
