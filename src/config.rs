//! Application configuration.
//!
//! Centralized configuration for the AskCSV frontend. In development these
//! are hardcoded; in production they could be loaded from the environment.

/// Backend API base URL.
///
/// The processing server that answers questions over CSV columns.
pub const BACKEND_URL: &str = "http://localhost:5001";

/// Canonical media type the platform file picker reports for CSV files.
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Application name shown in the hero section.
pub const APP_NAME: &str = "AskCSV";
