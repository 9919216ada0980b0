//! Analytics configuration
//!
//! Thresholds are carried as an explicit immutable value handed to each entry
//! point, never as process-wide state, so concurrent analyses with different
//! settings cannot interfere.

use serde::{Deserialize, Serialize};

/// Minimum mood score counted as "positive" for streak classification
pub const DEFAULT_POSITIVE_THRESHOLD: u8 = 6;

/// Mean-change magnitude below which a trend reads as stable
pub const DEFAULT_TREND_SENSITIVITY: f64 = 0.5;

/// Minimum run length considered a streak by callers
pub const DEFAULT_STREAK_MINIMUM: u32 = 3;

/// Tunable thresholds for the analytics layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Entries with `mood_score >= positive_threshold` classify as positive
    #[serde(default = "default_positive_threshold")]
    pub positive_threshold: u8,
    /// Trend direction is `Stable` when the magnitude is below this
    #[serde(default = "default_trend_sensitivity")]
    pub trend_sensitivity: f64,
    /// Current-streak length required before the streak insight fires; the
    /// streak computation itself reports runs of any length
    #[serde(default = "default_streak_minimum")]
    pub streak_minimum: u32,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            positive_threshold: DEFAULT_POSITIVE_THRESHOLD,
            trend_sensitivity: DEFAULT_TREND_SENSITIVITY,
            streak_minimum: DEFAULT_STREAK_MINIMUM,
        }
    }
}

fn default_positive_threshold() -> u8 {
    DEFAULT_POSITIVE_THRESHOLD
}

fn default_trend_sensitivity() -> f64 {
    DEFAULT_TREND_SENSITIVITY
}

fn default_streak_minimum() -> u32 {
    DEFAULT_STREAK_MINIMUM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.positive_threshold, 6);
        assert!((config.trend_sensitivity - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.streak_minimum, 3);
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let config: AnalyticsConfig =
            serde_json::from_str(r#"{"positive_threshold": 7}"#).unwrap();
        assert_eq!(config.positive_threshold, 7);
        assert!((config.trend_sensitivity - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.streak_minimum, 3);
    }
}
