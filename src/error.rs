//! Error types for Moodlens
//!
//! The analytics layers themselves never fail: insufficient data is signalled
//! with `Option` or zeroed defaults. Errors only arise at the ingestion
//! boundary, where entries are parsed and their domains enforced.

use thiserror::Error;

/// Errors that can occur while ingesting entries
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse entry: {0}")]
    ParseError(String),

    #[error("{field} out of range: {value} (expected {expected})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("Missing required field: {0}")]
    MissingField(String),
}
