//! The `CatalogEntity` trait: the seam between the concrete schemas and the
//! generic filter engine.
//!
//! Every browsable catalog kind implements this trait. The engine never sees
//! the concrete structs; it filters anything exposing an id, the three
//! searchable text fields, a category id, and a fixed set of boolean facets.

use crate::types::{Appointment, LabResult, LabTest, NavigationTarget, Provider};

/// One item in a browsable catalog.
///
/// ## Contract
/// - `FACETS` lists every boolean facet name the kind recognizes;
///   `boolean_facet` returns `Some` exactly for those names.
/// - The three searchable text fields are display name, category label, and
///   description. Free-text search matches any of them.
/// - Implementations are plain accessors; nothing here mutates the entity.
pub trait CatalogEntity: Send + Sync {
    /// Boolean facet names this kind recognizes
    const FACETS: &'static [&'static str];

    /// Unique, opaque id
    fn entity_id(&self) -> &str;

    /// Primary display name (searched as free text)
    fn display_name(&self) -> &str;

    /// Stable id of the entity's category (exact-match filtered)
    fn category_id(&self) -> &str;

    /// Human-readable category label (searched as free text)
    fn category_label(&self) -> &str;

    /// Longer descriptive text (searched as free text)
    fn description(&self) -> &str;

    /// Value of a boolean facet, or `None` if the name is not in `FACETS`
    fn boolean_facet(&self, name: &str) -> Option<bool>;

    /// Ordering key for the Featured sort (higher ranks first)
    fn rank_value(&self) -> f32;

    /// Which downstream view selecting this entity opens
    fn navigation_target(&self) -> NavigationTarget;
}

impl CatalogEntity for Provider {
    const FACETS: &'static [&'static str] = &[
        "available_today",
        "offers_telemedicine",
        "accepts_new_patients",
    ];

    fn entity_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn category_id(&self) -> &str {
        self.specialty.id()
    }

    fn category_label(&self) -> &str {
        self.specialty.label()
    }

    fn description(&self) -> &str {
        &self.bio
    }

    fn boolean_facet(&self, name: &str) -> Option<bool> {
        match name {
            "available_today" => Some(self.available_today),
            "offers_telemedicine" => Some(self.offers_telemedicine),
            "accepts_new_patients" => Some(self.accepts_new_patients),
            _ => None,
        }
    }

    fn rank_value(&self) -> f32 {
        self.rating
    }

    fn navigation_target(&self) -> NavigationTarget {
        NavigationTarget::BookingFlow {
            provider_id: self.id.clone(),
            default_slot: self.next_slot.clone(),
        }
    }
}

impl CatalogEntity for LabTest {
    const FACETS: &'static [&'static str] = &[
        "requires_preparation",
        "fasting_required",
        "home_collection",
    ];

    fn entity_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn category_id(&self) -> &str {
        self.category.id()
    }

    fn category_label(&self) -> &str {
        self.category.label()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn boolean_facet(&self, name: &str) -> Option<bool> {
        match name {
            "requires_preparation" => Some(self.requires_preparation),
            "fasting_required" => Some(self.fasting_required),
            "home_collection" => Some(self.home_collection),
            _ => None,
        }
    }

    // Cheaper tests rank higher in the Featured sort
    fn rank_value(&self) -> f32 {
        -(self.price_cents as f32)
    }

    fn navigation_target(&self) -> NavigationTarget {
        NavigationTarget::TestDetail {
            test_id: self.id.clone(),
        }
    }
}

impl CatalogEntity for LabResult {
    const FACETS: &'static [&'static str] = &["ready", "abnormal"];

    fn entity_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.test_name
    }

    fn category_id(&self) -> &str {
        self.category.id()
    }

    fn category_label(&self) -> &str {
        self.category.label()
    }

    fn description(&self) -> &str {
        &self.summary
    }

    fn boolean_facet(&self, name: &str) -> Option<bool> {
        match name {
            "ready" => Some(self.ready),
            "abnormal" => Some(self.abnormal),
            _ => None,
        }
    }

    // Ready results surface first
    fn rank_value(&self) -> f32 {
        if self.ready { 1.0 } else { 0.0 }
    }

    fn navigation_target(&self) -> NavigationTarget {
        NavigationTarget::ResultDetail {
            result_id: self.id.clone(),
        }
    }
}

impl CatalogEntity for Appointment {
    const FACETS: &'static [&'static str] = &["upcoming", "telemedicine"];

    fn entity_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.provider_name
    }

    fn category_id(&self) -> &str {
        self.specialty.id()
    }

    fn category_label(&self) -> &str {
        self.specialty.label()
    }

    fn description(&self) -> &str {
        &self.scheduled_at
    }

    fn boolean_facet(&self, name: &str) -> Option<bool> {
        match name {
            "upcoming" => Some(self.upcoming),
            "telemedicine" => Some(self.telemedicine),
            _ => None,
        }
    }

    fn rank_value(&self) -> f32 {
        if self.upcoming { 1.0 } else { 0.0 }
    }

    fn navigation_target(&self) -> NavigationTarget {
        NavigationTarget::AppointmentDetail {
            appointment_id: self.id.clone(),
        }
    }
}
