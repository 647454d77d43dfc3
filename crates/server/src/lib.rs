//! Server crate for the Carebook catalog core.
//!
//! This crate contains the service layer that coordinates sources and the
//! filter engine into per-catalog search and selection operations.

pub mod service;

pub use service::{
    AppointmentRow, CatalogOverview, CatalogService, LabResultRow, LabTestRow, ProviderRow,
    SearchResponse,
};
