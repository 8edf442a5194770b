//! Waste intake, risk scoring, processing, and transport tracking.
//!
//! [`WasteService`] and [`TransportService`] are meant to share one repository
//! through an `Arc`, so a status change made by either is visible to the other.

pub mod context;
pub mod domain;
pub mod report;
pub mod repository;
pub mod service;
pub mod transport;
mod validation;

#[cfg(test)]
mod tests;

pub use context::{Location, Officer};
pub use domain::{ValidationError, WasteCategory, WasteId, WasteItem, WasteKind, WasteStatus};
pub use report::{CategoryExposure, RiskReport};
pub use repository::{InMemoryWasteRepository, RepositoryError, WasteRepository};
pub use service::{WasteError, WasteService};
pub use transport::{TransportRecord, TransportService, TIMESTAMP_FORMAT};
