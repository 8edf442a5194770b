//! Post-disaster waste registry: intake, risk scoring, processing, and transport.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
