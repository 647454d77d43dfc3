//! # Catalog Service
//!
//! This module coordinates one catalog query end to end:
//! 1. Fetch the collection for the requested catalog kind
//! 2. Evaluate the caller's FilterCriteria through the engine
//! 3. Compute match summaries for highlighting
//! 4. Truncate to the requested page size
//! 5. Map entities to display-ready rows
//!
//! The service owns no screen state; every call carries its criteria
//! explicitly. An empty row list is a normal "no matches" response, never
//! an error. Errors here mean malformed criteria or an unresolvable id.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use tracing::info;

use catalog::{
    Appointment, CatalogIndex, CatalogStats, EntityId, LabResult, LabTest, Provider,
};
use engine::{FilterCriteria, MatchSummary, NavigationIntent};
use sources::{EntitySource, FixtureSource};

/// One display-ready provider row
#[derive(Debug, Clone)]
pub struct ProviderRow {
    pub provider_id: EntityId,
    pub title: String,
    pub subtitle: String,
    pub fee: String,
    pub badges: Vec<String>,
    pub matched: MatchSummary,
}

/// One display-ready lab test row
#[derive(Debug, Clone)]
pub struct LabTestRow {
    pub test_id: EntityId,
    pub title: String,
    pub subtitle: String,
    pub price: String,
    pub badges: Vec<String>,
    pub matched: MatchSummary,
}

/// One display-ready lab result row
#[derive(Debug, Clone)]
pub struct LabResultRow {
    pub result_id: EntityId,
    pub title: String,
    pub subtitle: String,
    pub status: String,
    pub matched: MatchSummary,
}

/// One display-ready appointment row
#[derive(Debug, Clone)]
pub struct AppointmentRow {
    pub appointment_id: EntityId,
    pub title: String,
    pub subtitle: String,
    pub badges: Vec<String>,
    pub matched: MatchSummary,
}

/// Result of one catalog search.
///
/// `total_matched` counts every entity passing the criteria; `rows` holds
/// at most the requested page of them.
#[derive(Debug, Clone)]
pub struct SearchResponse<R> {
    pub total_matched: usize,
    pub rows: Vec<R>,
}

/// Aggregate view of the loaded catalogs for the home screen
#[derive(Debug, Clone)]
pub struct CatalogOverview {
    pub provider_count: usize,
    pub available_today_count: usize,
    pub avg_provider_rating: f32,
    pub lab_test_count: usize,
    pub avg_test_price: String,
    pub upcoming_appointments: usize,
    pub results_ready: usize,
}

/// Coordinates sources and the filter engine for the presentation layer
#[derive(Clone)]
pub struct CatalogService {
    source: FixtureSource,
}

impl CatalogService {
    /// Create a service over a loaded catalog
    pub fn new(index: Arc<CatalogIndex>) -> Self {
        Self {
            source: FixtureSource::new(index),
        }
    }

    /// Search the provider catalog
    pub async fn search_providers(
        &self,
        criteria: &FilterCriteria,
        limit: usize,
    ) -> Result<SearchResponse<ProviderRow>> {
        let start = Instant::now();
        let collection: Vec<Provider> = self.source.fetch_all()?;

        let hits = engine::filter(&collection, criteria).context("Provider search failed")?;
        let summaries = engine::summarize_matches(&hits, criteria);
        let total_matched = hits.len();

        let rows: Vec<ProviderRow> = hits
            .into_iter()
            .zip(summaries)
            .take(limit)
            .map(|(provider, matched)| provider_row(provider, matched))
            .collect();

        info!(
            total_matched,
            returned = rows.len(),
            elapsed = ?start.elapsed(),
            "Provider search complete"
        );
        Ok(SearchResponse {
            total_matched,
            rows,
        })
    }

    /// Search the lab test catalog
    pub async fn search_lab_tests(
        &self,
        criteria: &FilterCriteria,
        limit: usize,
    ) -> Result<SearchResponse<LabTestRow>> {
        let start = Instant::now();
        let collection: Vec<LabTest> = self.source.fetch_all()?;

        let hits = engine::filter(&collection, criteria).context("Lab test search failed")?;
        let summaries = engine::summarize_matches(&hits, criteria);
        let total_matched = hits.len();

        let rows: Vec<LabTestRow> = hits
            .into_iter()
            .zip(summaries)
            .take(limit)
            .map(|(test, matched)| lab_test_row(test, matched))
            .collect();

        info!(
            total_matched,
            returned = rows.len(),
            elapsed = ?start.elapsed(),
            "Lab test search complete"
        );
        Ok(SearchResponse {
            total_matched,
            rows,
        })
    }

    /// Search prior lab results
    pub async fn search_results(
        &self,
        criteria: &FilterCriteria,
        limit: usize,
    ) -> Result<SearchResponse<LabResultRow>> {
        let start = Instant::now();
        let collection: Vec<LabResult> = self.source.fetch_all()?;

        let hits = engine::filter(&collection, criteria).context("Result search failed")?;
        let summaries = engine::summarize_matches(&hits, criteria);
        let total_matched = hits.len();

        let rows: Vec<LabResultRow> = hits
            .into_iter()
            .zip(summaries)
            .take(limit)
            .map(|(result, matched)| lab_result_row(result, matched))
            .collect();

        info!(
            total_matched,
            returned = rows.len(),
            elapsed = ?start.elapsed(),
            "Result search complete"
        );
        Ok(SearchResponse {
            total_matched,
            rows,
        })
    }

    /// Search the appointment history
    pub async fn search_appointments(
        &self,
        criteria: &FilterCriteria,
        limit: usize,
    ) -> Result<SearchResponse<AppointmentRow>> {
        let start = Instant::now();
        let collection: Vec<Appointment> = self.source.fetch_all()?;

        let hits = engine::filter(&collection, criteria).context("Appointment search failed")?;
        let summaries = engine::summarize_matches(&hits, criteria);
        let total_matched = hits.len();

        let rows: Vec<AppointmentRow> = hits
            .into_iter()
            .zip(summaries)
            .take(limit)
            .map(|(appointment, matched)| appointment_row(appointment, matched))
            .collect();

        info!(
            total_matched,
            returned = rows.len(),
            elapsed = ?start.elapsed(),
            "Appointment search complete"
        );
        Ok(SearchResponse {
            total_matched,
            rows,
        })
    }

    /// Summarize the loaded catalogs for the home screen.
    ///
    /// The provider and lab sides are independent, so both halves run
    /// concurrently.
    pub async fn overview(&self) -> Result<CatalogOverview> {
        let (care, labs) = tokio::join!(self.care_overview(), self.lab_overview());
        let (provider_count, available_today_count, avg_provider_rating, upcoming_appointments) =
            care?;
        let (lab_test_count, avg_test_price_cents, results_ready) = labs?;

        Ok(CatalogOverview {
            provider_count,
            available_today_count,
            avg_provider_rating,
            lab_test_count,
            avg_test_price: format_cents(avg_test_price_cents as u32),
            upcoming_appointments,
            results_ready,
        })
    }

    async fn care_overview(&self) -> Result<(usize, usize, f32, usize)> {
        let stats: &CatalogStats = self.source.index().stats();
        let upcoming = self
            .source
            .index()
            .appointments()
            .iter()
            .filter(|a| a.upcoming)
            .count();
        Ok((
            stats.provider_count,
            stats.available_today_count,
            stats.avg_provider_rating,
            upcoming,
        ))
    }

    async fn lab_overview(&self) -> Result<(usize, f32, usize)> {
        let stats: &CatalogStats = self.source.index().stats();
        let ready = self
            .source
            .index()
            .lab_results()
            .iter()
            .filter(|r| r.ready)
            .count();
        Ok((stats.lab_test_count, stats.avg_test_price_cents, ready))
    }

    /// Resolve a provider selection into a navigation intent
    pub fn open_provider(&self, id: &str) -> Result<NavigationIntent> {
        let provider: Provider = self
            .source
            .fetch_by_id(id)?
            .ok_or_else(|| anyhow!("Provider {id} not found"))?;
        Ok(engine::select_entity(&provider)?)
    }

    /// Resolve a lab test selection into a navigation intent
    pub fn open_lab_test(&self, id: &str) -> Result<NavigationIntent> {
        let test: LabTest = self
            .source
            .fetch_by_id(id)?
            .ok_or_else(|| anyhow!("Lab test {id} not found"))?;
        Ok(engine::select_entity(&test)?)
    }

    /// Resolve a lab result selection into a navigation intent
    pub fn open_result(&self, id: &str) -> Result<NavigationIntent> {
        let result: LabResult = self
            .source
            .fetch_by_id(id)?
            .ok_or_else(|| anyhow!("Result {id} not found"))?;
        Ok(engine::select_entity(&result)?)
    }

    /// Resolve an appointment selection into a navigation intent
    pub fn open_appointment(&self, id: &str) -> Result<NavigationIntent> {
        let appointment: Appointment = self
            .source
            .fetch_by_id(id)?
            .ok_or_else(|| anyhow!("Appointment {id} not found"))?;
        Ok(engine::select_entity(&appointment)?)
    }
}

fn format_cents(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

fn provider_row(provider: &Provider, matched: MatchSummary) -> ProviderRow {
    let mut badges = Vec::new();
    if provider.available_today {
        badges.push("Available today".to_string());
    }
    if provider.offers_telemedicine {
        badges.push("Telemedicine".to_string());
    }
    if provider.accepts_new_patients {
        badges.push("New patients".to_string());
    }

    ProviderRow {
        provider_id: provider.id.clone(),
        title: provider.name.clone(),
        subtitle: format!(
            "{} - {:.1} stars ({} reviews)",
            provider.specialty.label(),
            provider.rating,
            provider.review_count
        ),
        fee: format_cents(provider.consultation_fee_cents),
        badges,
        matched,
    }
}

fn lab_test_row(test: &LabTest, matched: MatchSummary) -> LabTestRow {
    let mut badges = Vec::new();
    if test.home_collection {
        badges.push("Home collection".to_string());
    }
    if test.fasting_required {
        badges.push("Fasting required".to_string());
    } else if test.requires_preparation {
        badges.push("Preparation required".to_string());
    }

    LabTestRow {
        test_id: test.id.clone(),
        title: test.name.clone(),
        subtitle: format!(
            "{} - results in {}h",
            test.category.label(),
            test.turnaround_hours
        ),
        price: format_cents(test.price_cents),
        badges,
        matched,
    }
}

fn lab_result_row(result: &LabResult, matched: MatchSummary) -> LabResultRow {
    let status = if !result.ready {
        "Processing".to_string()
    } else if result.abnormal {
        "Ready - review recommended".to_string()
    } else {
        "Ready".to_string()
    };

    LabResultRow {
        result_id: result.id.clone(),
        title: result.test_name.clone(),
        subtitle: format!("{} - collected {}", result.category.label(), result.collected_at),
        status,
        matched,
    }
}

fn appointment_row(appointment: &Appointment, matched: MatchSummary) -> AppointmentRow {
    let mut badges = vec![appointment.status.label().to_string()];
    if appointment.telemedicine {
        badges.push("Telemedicine".to_string());
    }

    AppointmentRow {
        appointment_id: appointment.id.clone(),
        title: appointment.provider_name.clone(),
        subtitle: format!(
            "{} - {}",
            appointment.specialty.label(),
            appointment.scheduled_at
        ),
        badges,
        matched,
    }
}
