//! Entity selection: resolve a tapped entity into a navigation intent.
//!
//! The engine names the downstream view and packages the parameters that
//! view needs; actually transitioning is the router's job.

use crate::error::{EngineError, Result};
use catalog::{CatalogEntity, EntityId, NavigationTarget};

/// Descriptor of which downstream view to present after selecting an entity.
///
/// Opaque to the engine's callers: the routing layer pattern-matches the
/// target, the list layer just passes it along.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    pub entity_id: EntityId,
    pub target: NavigationTarget,
}

/// Resolve the navigation target for a selected entity.
///
/// Performs no mutation. The only failure mode is an entity without a
/// resolvable id (empty or whitespace), which is a caller bug, not a
/// runtime condition.
pub fn select_entity<E: CatalogEntity>(entity: &E) -> Result<NavigationIntent> {
    let id = entity.entity_id();
    if id.trim().is_empty() {
        return Err(EngineError::InvalidReference {
            reason: "entity id is empty".to_string(),
        });
    }

    Ok(NavigationIntent {
        entity_id: id.to_string(),
        target: entity.navigation_target(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{LabTest, Provider, Specialty, TestCategory};

    fn sample_provider(id: &str) -> Provider {
        Provider {
            id: id.to_string(),
            name: "Dr. María González".to_string(),
            specialty: Specialty::Cardiologist,
            bio: String::new(),
            rating: 4.8,
            review_count: 120,
            consultation_fee_cents: 5000,
            available_today: true,
            offers_telemedicine: true,
            accepts_new_patients: true,
            next_slot: Some("2026-08-10T09:30".to_string()),
        }
    }

    #[test]
    fn test_provider_selection_opens_booking_flow() {
        let intent = select_entity(&sample_provider("prov-1")).unwrap();

        assert_eq!(intent.entity_id, "prov-1");
        assert_eq!(
            intent.target,
            NavigationTarget::BookingFlow {
                provider_id: "prov-1".to_string(),
                default_slot: Some("2026-08-10T09:30".to_string()),
            }
        );
    }

    #[test]
    fn test_lab_test_selection_opens_detail() {
        let test = LabTest {
            id: "test-1".to_string(),
            name: "Complete Blood Count".to_string(),
            category: TestCategory::BloodTest,
            description: String::new(),
            price_cents: 2500,
            turnaround_hours: 24,
            requires_preparation: false,
            fasting_required: false,
            home_collection: true,
            preparation_notes: None,
        };

        let intent = select_entity(&test).unwrap();
        assert_eq!(
            intent.target,
            NavigationTarget::TestDetail {
                test_id: "test-1".to_string()
            }
        );
    }

    #[test]
    fn test_empty_id_is_invalid_reference() {
        let err = select_entity(&sample_provider("")).unwrap_err();
        assert!(matches!(err, EngineError::InvalidReference { .. }));

        let err = select_entity(&sample_provider("   ")).unwrap_err();
        assert!(matches!(err, EngineError::InvalidReference { .. }));
    }
}
