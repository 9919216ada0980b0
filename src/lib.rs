//! Moodlens - mood analytics engine
//!
//! Moodlens turns a collection of timestamped mood entries into derived
//! analytics through a deterministic pipeline: statistics → trends → streaks
//! → temporal patterns → distribution → correlations → wellness → insights.
//!
//! Every computation is a pure function of the entry slice it receives; the
//! crate holds no state and performs no I/O. Callers own storage, transport,
//! and presentation.

pub mod analyzer;
pub mod config;
pub mod correlation;
pub mod distribution;
pub mod error;
pub mod insight;
pub mod patterns;
pub mod schema;
pub mod stats;
pub mod streak;
pub mod trend;
pub mod types;
pub mod wellness;

pub use analyzer::{analyze, generate_insights, MoodAnalytics, MoodAnalyzer};
pub use config::AnalyticsConfig;
pub use error::AnalyticsError;
pub use types::{Insight, MoodEntry};

// Schema exports
pub use schema::{parse_input, validate, SCHEMA_VERSION};

/// Engine version embedded in reports
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for reports
pub const PRODUCER_NAME: &str = "moodlens";
