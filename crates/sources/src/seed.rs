//! Built-in demo catalog.
//!
//! All data in this module is hardcoded and fictional. It stands in for a
//! backend catalog query in tests, examples, and offline CLI runs, and it
//! is the same data the app's demo screens ship with.

use catalog::{
    Appointment, AppointmentStatus, CatalogIndex, LabResult, LabTest, Provider, Specialty,
    TestCategory,
};

/// Assemble the demo catalog into a ready-to-query index
pub fn demo_catalog() -> CatalogIndex {
    let mut index = CatalogIndex::new();

    for provider in demo_providers() {
        index.insert_provider(provider);
    }
    for test in demo_lab_tests() {
        index.insert_lab_test(test);
    }
    for result in demo_lab_results() {
        index.insert_lab_result(result);
    }
    for appointment in demo_appointments() {
        index.insert_appointment(appointment);
    }

    index.build_category_index();
    index.compute_stats();
    index
}

fn provider(
    id: &str,
    name: &str,
    specialty: Specialty,
    bio: &str,
    rating: f32,
    review_count: u32,
    fee_cents: u32,
    available_today: bool,
    offers_telemedicine: bool,
    next_slot: Option<&str>,
) -> Provider {
    Provider {
        id: id.to_string(),
        name: name.to_string(),
        specialty,
        bio: bio.to_string(),
        rating,
        review_count,
        consultation_fee_cents: fee_cents,
        available_today,
        offers_telemedicine,
        accepts_new_patients: true,
        next_slot: next_slot.map(str::to_string),
    }
}

fn demo_providers() -> Vec<Provider> {
    vec![
        provider(
            "prov-1",
            "Dr. María González",
            Specialty::Cardiologist,
            "Cardiology and preventive heart care, 15 years of experience",
            4.8,
            124,
            5000,
            true,
            true,
            Some("2026-08-10T09:30"),
        ),
        provider(
            "prov-2",
            "Dr. Carlos Ramírez",
            Specialty::GeneralDoctor,
            "Family medicine and chronic condition follow-up",
            4.5,
            89,
            3000,
            false,
            true,
            Some("2026-08-14T16:00"),
        ),
        provider(
            "prov-3",
            "Dr. Ana Torres",
            Specialty::Dermatologist,
            "Clinical dermatology, skin cancer screening",
            4.7,
            203,
            4500,
            true,
            false,
            Some("2026-08-09T11:00"),
        ),
        provider(
            "prov-4",
            "Dr. Luis Vega",
            Specialty::GeneralDoctor,
            "Specialized in sports medicine and rehabilitation",
            4.2,
            56,
            2800,
            true,
            true,
            None,
        ),
        provider(
            "prov-5",
            "Dr. Sofía Herrera",
            Specialty::Pediatrician,
            "Pediatrics, newborn care and vaccination schedules",
            4.9,
            311,
            3500,
            false,
            true,
            Some("2026-08-20T10:15"),
        ),
        provider(
            "prov-6",
            "Dr. Jorge Castillo",
            Specialty::Psychologist,
            "Cognitive behavioral therapy, anxiety and sleep disorders",
            4.6,
            147,
            4000,
            true,
            true,
            Some("2026-08-08T18:00"),
        ),
        provider(
            "prov-7",
            "Dra. Elena Ríos",
            Specialty::Nutritionist,
            "Clinical nutrition and metabolic health plans",
            4.4,
            72,
            2500,
            true,
            false,
            None,
        ),
        provider(
            "prov-8",
            "Dr. Miguel Fuentes",
            Specialty::Dentist,
            "General dentistry and orthodontics",
            4.3,
            95,
            3200,
            false,
            false,
            Some("2026-08-18T09:00"),
        ),
    ]
}

fn lab_test(
    id: &str,
    name: &str,
    category: TestCategory,
    description: &str,
    price_cents: u32,
    turnaround_hours: u16,
    requires_preparation: bool,
    fasting_required: bool,
    home_collection: bool,
    preparation_notes: Option<&str>,
) -> LabTest {
    LabTest {
        id: id.to_string(),
        name: name.to_string(),
        category,
        description: description.to_string(),
        price_cents,
        turnaround_hours,
        requires_preparation,
        fasting_required,
        home_collection,
        preparation_notes: preparation_notes.map(str::to_string),
    }
}

fn demo_lab_tests() -> Vec<LabTest> {
    vec![
        lab_test(
            "test-1",
            "Complete Blood Count",
            TestCategory::BloodTest,
            "Counts red cells, white cells and platelets",
            2500,
            24,
            false,
            false,
            true,
            None,
        ),
        lab_test(
            "test-2",
            "Lipid Panel",
            TestCategory::BloodTest,
            "Cholesterol and triglyceride levels",
            3200,
            24,
            true,
            true,
            true,
            Some("Fast for 12 hours before collection"),
        ),
        lab_test(
            "test-3",
            "Urinalysis",
            TestCategory::UrineTest,
            "Screens for urinary tract and kidney conditions",
            1800,
            12,
            false,
            false,
            true,
            None,
        ),
        lab_test(
            "test-4",
            "Chest X-Ray",
            TestCategory::Imaging,
            "Two-view chest radiograph",
            6500,
            4,
            false,
            false,
            false,
            None,
        ),
        lab_test(
            "test-5",
            "Resting Electrocardiogram",
            TestCategory::Cardiology,
            "12-lead ECG with cardiologist report",
            5400,
            6,
            false,
            false,
            false,
            None,
        ),
        lab_test(
            "test-6",
            "Thyroid Profile",
            TestCategory::Hormonal,
            "TSH, T3 and T4 levels",
            4100,
            48,
            true,
            false,
            true,
            Some("Take morning medication after collection"),
        ),
    ]
}

fn demo_lab_results() -> Vec<LabResult> {
    vec![
        LabResult {
            id: "res-1".to_string(),
            test_name: "Complete Blood Count".to_string(),
            category: TestCategory::BloodTest,
            summary: "All values within reference ranges".to_string(),
            collected_at: "2026-07-28".to_string(),
            ready: true,
            abnormal: false,
        },
        LabResult {
            id: "res-2".to_string(),
            test_name: "Lipid Panel".to_string(),
            category: TestCategory::BloodTest,
            summary: "LDL cholesterol above reference range".to_string(),
            collected_at: "2026-07-28".to_string(),
            ready: true,
            abnormal: true,
        },
        LabResult {
            id: "res-3".to_string(),
            test_name: "Thyroid Profile".to_string(),
            category: TestCategory::Hormonal,
            summary: "Processing at the laboratory".to_string(),
            collected_at: "2026-08-05".to_string(),
            ready: false,
            abnormal: false,
        },
        LabResult {
            id: "res-4".to_string(),
            test_name: "Chest X-Ray".to_string(),
            category: TestCategory::Imaging,
            summary: "No acute findings".to_string(),
            collected_at: "2026-06-14".to_string(),
            ready: true,
            abnormal: false,
        },
    ]
}

fn demo_appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "appt-1".to_string(),
            provider_id: "prov-1".to_string(),
            provider_name: "Dr. María González".to_string(),
            specialty: Specialty::Cardiologist,
            scheduled_at: "2026-08-12T10:00".to_string(),
            location: Some("Heart Center, Suite 302".to_string()),
            telemedicine: false,
            upcoming: true,
            status: AppointmentStatus::Scheduled,
        },
        Appointment {
            id: "appt-2".to_string(),
            provider_id: "prov-6".to_string(),
            provider_name: "Dr. Jorge Castillo".to_string(),
            specialty: Specialty::Psychologist,
            scheduled_at: "2026-08-15T18:30".to_string(),
            location: None,
            telemedicine: true,
            upcoming: true,
            status: AppointmentStatus::Scheduled,
        },
        Appointment {
            id: "appt-3".to_string(),
            provider_id: "prov-2".to_string(),
            provider_name: "Dr. Carlos Ramírez".to_string(),
            specialty: Specialty::GeneralDoctor,
            scheduled_at: "2026-07-02T09:00".to_string(),
            location: Some("Downtown Clinic".to_string()),
            telemedicine: false,
            upcoming: false,
            status: AppointmentStatus::Completed,
        },
        Appointment {
            id: "appt-4".to_string(),
            provider_id: "prov-5".to_string(),
            provider_name: "Dr. Sofía Herrera".to_string(),
            specialty: Specialty::Pediatrician,
            scheduled_at: "2026-06-20T11:30".to_string(),
            location: Some("Children's Wing".to_string()),
            telemedicine: false,
            upcoming: false,
            status: AppointmentStatus::Cancelled,
        },
    ]
}
