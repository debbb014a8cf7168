//! Photo capture and location resolution pipeline for civic issue reports.
//!
//! A report screen acquires a photo (camera first, file pick as fallback)
//! and the device location (fix, then best-effort reverse geocoding), and
//! combines both into a [`models::ReportDraft`] once each stage has settled.

pub mod config;
pub mod handlers;
pub mod libraries;
pub mod models;
pub mod services;

pub use config::Config;
pub use models::{Coordinates, ImagePayload, LocationOutcome, ReportDraft, ResolvedLocation};
pub use services::{LocationResolver, PhotoAcquirer, ReportSession};
