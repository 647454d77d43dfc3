//! Core domain types for the Carebook catalog.
//!
//! This module defines the canonical entity schemas for the four browsable
//! catalogs (care providers, lab tests, prior results, appointments), the
//! category enums with their stable wire ids, and the navigation descriptors
//! that tell a router which view an entity opens.
//!
//! Every screen works against these schemas; there are no per-screen entity
//! shapes.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Opaque unique identifier for a catalog entity (unique within its kind)
pub type EntityId = String;

// =============================================================================
// Category Enums
// =============================================================================
// Wire ids are SCREAMING_SNAKE_CASE and case-sensitive; category filtering
// compares ids exactly.

/// Medical specialty of a care provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Specialty {
    GeneralDoctor,
    Cardiologist,
    Dermatologist,
    Pediatrician,
    Gynecologist,
    Psychologist,
    Nutritionist,
    Dentist,
}

impl Specialty {
    /// Stable wire id, matching the serialized form
    pub fn id(&self) -> &'static str {
        match self {
            Specialty::GeneralDoctor => "GENERAL_DOCTOR",
            Specialty::Cardiologist => "CARDIOLOGIST",
            Specialty::Dermatologist => "DERMATOLOGIST",
            Specialty::Pediatrician => "PEDIATRICIAN",
            Specialty::Gynecologist => "GYNECOLOGIST",
            Specialty::Psychologist => "PSYCHOLOGIST",
            Specialty::Nutritionist => "NUTRITIONIST",
            Specialty::Dentist => "DENTIST",
        }
    }

    /// Human-readable label shown in list rows and filter chips
    pub fn label(&self) -> &'static str {
        match self {
            Specialty::GeneralDoctor => "General Doctor",
            Specialty::Cardiologist => "Cardiologist",
            Specialty::Dermatologist => "Dermatologist",
            Specialty::Pediatrician => "Pediatrician",
            Specialty::Gynecologist => "Gynecologist",
            Specialty::Psychologist => "Psychologist",
            Specialty::Nutritionist => "Nutritionist",
            Specialty::Dentist => "Dentist",
        }
    }
}

/// Category of a lab test or a lab result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestCategory {
    BloodTest,
    UrineTest,
    Imaging,
    Cardiology,
    Hormonal,
    Genetic,
}

impl TestCategory {
    /// Stable wire id, matching the serialized form
    pub fn id(&self) -> &'static str {
        match self {
            TestCategory::BloodTest => "BLOOD_TEST",
            TestCategory::UrineTest => "URINE_TEST",
            TestCategory::Imaging => "IMAGING",
            TestCategory::Cardiology => "CARDIOLOGY",
            TestCategory::Hormonal => "HORMONAL",
            TestCategory::Genetic => "GENETIC",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            TestCategory::BloodTest => "Blood Test",
            TestCategory::UrineTest => "Urine Test",
            TestCategory::Imaging => "Imaging",
            TestCategory::Cardiology => "Cardiology",
            TestCategory::Hormonal => "Hormonal",
            TestCategory::Genetic => "Genetic",
        }
    }
}

/// Lifecycle state of an appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Stable wire id, matching the serialized form
    pub fn id(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "SCHEDULED",
            AppointmentStatus::Completed => "COMPLETED",
            AppointmentStatus::Cancelled => "CANCELLED",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }
}

// =============================================================================
// Entity Schemas
// =============================================================================

/// A care provider available for booking or telemedicine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    pub id: EntityId,
    pub name: String,
    pub specialty: Specialty,
    /// Short professional bio shown on the profile and searched as free text
    pub bio: String,
    /// Average patient rating, 0.0 to 5.0
    pub rating: f32,
    pub review_count: u32,
    pub consultation_fee_cents: u32,
    pub available_today: bool,
    pub offers_telemedicine: bool,
    pub accepts_new_patients: bool,
    /// Next open slot, if the provider published one (e.g. "2026-08-10T09:30")
    pub next_slot: Option<String>,
}

/// A lab test offered in the test catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabTest {
    pub id: EntityId,
    pub name: String,
    pub category: TestCategory,
    pub description: String,
    pub price_cents: u32,
    /// Typical hours until results are available
    pub turnaround_hours: u16,
    pub requires_preparation: bool,
    pub fasting_required: bool,
    pub home_collection: bool,
    pub preparation_notes: Option<String>,
}

/// A prior lab result belonging to the signed-in patient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabResult {
    pub id: EntityId,
    pub test_name: String,
    pub category: TestCategory,
    /// One-line summary shown in the results list
    pub summary: String,
    /// Collection date, ISO 8601 (e.g. "2026-07-28")
    pub collected_at: String,
    pub ready: bool,
    pub abnormal: bool,
}

/// A booked appointment, past or upcoming
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: EntityId,
    /// Id of the provider this appointment is with; must resolve in the catalog
    pub provider_id: EntityId,
    pub provider_name: String,
    pub specialty: Specialty,
    /// Scheduled start, ISO 8601 (e.g. "2026-08-12T10:00")
    pub scheduled_at: String,
    pub location: Option<String>,
    pub telemedicine: bool,
    pub upcoming: bool,
    pub status: AppointmentStatus,
}

// =============================================================================
// Navigation Descriptors
// =============================================================================

/// Which downstream view an entity opens, with the parameters that view needs.
///
/// The catalog only *names* the target; transitioning the displayed view is
/// the router's job. Tapping a provider goes straight to the booking flow
/// (carrying the published next slot as the default); everything else opens
/// its detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    BookingFlow {
        provider_id: EntityId,
        default_slot: Option<String>,
    },
    ProviderProfile {
        provider_id: EntityId,
    },
    TestDetail {
        test_id: EntityId,
    },
    ResultDetail {
        result_id: EntityId,
    },
    AppointmentDetail {
        appointment_id: EntityId,
    },
}

// =============================================================================
// Catalog Statistics
// =============================================================================

/// Precomputed aggregate statistics over a loaded catalog
#[derive(Debug, Clone, Default)]
pub struct CatalogStats {
    pub provider_count: usize,
    pub lab_test_count: usize,
    pub lab_result_count: usize,
    pub appointment_count: usize,
    /// Average provider rating across the catalog, 0.0 if empty
    pub avg_provider_rating: f32,
    /// Average lab test price in cents, 0.0 if empty
    pub avg_test_price_cents: f32,
    /// Providers available today
    pub available_today_count: usize,
}
