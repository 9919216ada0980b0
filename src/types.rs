//! Core types for the Moodlens analytics engine
//!
//! This module defines the input entry record and the derived value objects
//! produced by each analytics layer. Derived objects are pure functions of the
//! entry collection: recomputed on every call, never persisted, no identity
//! beyond their value.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One timestamped record of a user's self-reported mood and context.
///
/// Entries arrive from the upstream email/extraction pipeline. `mood_score`
/// is always present; the secondary metrics are optional and every aggregate
/// excludes entries missing the field it needs rather than defaulting to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Opaque unique identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Mood score, 1-10 inclusive
    pub mood_score: u8,
    /// Energy level, 1-10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_level: Option<u8>,
    /// Stress level, 1-10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<u8>,
    /// Hours slept, 0-24
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    /// When the entry was written; the offset defines the local hour and
    /// weekday used for temporal bucketing
    pub created_at: DateTime<FixedOffset>,
    /// Author identity (email address), not consumed by analytics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Free-text note extracted from the email body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Reported activity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    /// Reported weather
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,
    /// Raw email body the metrics were extracted from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
    /// Email subject line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl MoodEntry {
    /// Create an entry with only the required fields set
    pub fn new(mood_score: u8, created_at: DateTime<FixedOffset>) -> Self {
        Self {
            id: Uuid::new_v4(),
            mood_score,
            energy_level: None,
            stress_level: None,
            sleep_hours: None,
            created_at,
            from: None,
            note: None,
            activity: None,
            weather: None,
            original_text: None,
            subject: None,
        }
    }
}

/// Aggregate statistics over mood scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicStats {
    /// Arithmetic mean, rounded to one decimal
    pub average: f64,
    /// Lowest mood score
    pub min: u8,
    /// Highest mood score
    pub max: u8,
    /// max - min
    pub range: u8,
    /// Sum of all mood scores
    pub total: u32,
    /// Number of entries
    pub count: usize,
}

impl BasicStats {
    /// Zeroed stats for an empty entry collection
    pub fn empty() -> Self {
        Self {
            average: 0.0,
            min: 0,
            max: 0,
            range: 0,
            total: 0,
            count: 0,
        }
    }
}

/// Direction of a period-over-period mood change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

/// Period-over-period comparison of mean mood
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub direction: TrendDirection,
    /// Absolute change in mean mood, rounded to one decimal
    pub magnitude: f64,
    /// Change relative to the previous period, rounded to a whole percent
    pub percentage: f64,
}

/// Positive/negative classification of a run of entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakKind {
    Positive,
    Negative,
    /// Reserved for the empty-input case; entries themselves are always
    /// classified positive or negative
    Neutral,
}

/// A maximal run of consecutive-in-time entries sharing one classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakResult {
    pub length: u32,
    pub kind: StreakKind,
    /// Whether the run includes the most recent entry
    pub is_current: bool,
}

/// Current and longest streaks for an entry collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    pub current: StreakResult,
    pub longest: StreakResult,
}

/// Per-bucket aggregate used by the temporal pattern layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketStats {
    /// Mean mood of the bucket's entries, rounded to one decimal; 0 when the
    /// bucket is empty
    pub average: f64,
    pub count: usize,
}

impl BucketStats {
    pub fn empty() -> Self {
        Self {
            average: 0.0,
            count: 0,
        }
    }
}

/// Time-of-day bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    /// Local hour in [6, 12)
    Morning,
    /// Local hour in [12, 18)
    Afternoon,
    /// Everything else: [18, 24) and [0, 6)
    Evening,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }
}

/// Mood averages bucketed by time of day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePatterns {
    pub morning: BucketStats,
    pub afternoon: BucketStats,
    pub evening: BucketStats,
    /// Bucket with the highest average among non-empty buckets
    pub best: Option<TimeOfDay>,
}

/// Mood averages bucketed by weekday (Sunday through Saturday)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayPatterns {
    pub sunday: BucketStats,
    pub monday: BucketStats,
    pub tuesday: BucketStats,
    pub wednesday: BucketStats,
    pub thursday: BucketStats,
    pub friday: BucketStats,
    pub saturday: BucketStats,
    /// Name of the weekday with the highest average among non-empty buckets
    pub best: Option<String>,
}

/// Fixed mood-score band used for distribution histogramming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodBand {
    /// Scores 1-3
    Low,
    /// Scores 4-5
    Medium,
    /// Scores 6-7
    Good,
    /// Scores 8-10
    High,
}

impl MoodBand {
    /// Declaration order doubles as the tie-break order for `most_common`
    pub const ALL: [MoodBand; 4] = [
        MoodBand::Low,
        MoodBand::Medium,
        MoodBand::Good,
        MoodBand::High,
    ];

    /// Human-readable score range
    pub fn label(&self) -> &'static str {
        match self {
            MoodBand::Low => "1-3",
            MoodBand::Medium => "4-5",
            MoodBand::Good => "6-7",
            MoodBand::High => "8-10",
        }
    }

    pub fn contains(&self, score: u8) -> bool {
        match self {
            MoodBand::Low => (1..=3).contains(&score),
            MoodBand::Medium => (4..=5).contains(&score),
            MoodBand::Good => (6..=7).contains(&score),
            MoodBand::High => (8..=10).contains(&score),
        }
    }
}

/// Per-band count and share of the total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandStats {
    pub band: MoodBand,
    pub count: usize,
    /// Share of all entries, rounded to a whole percent
    pub percentage: u32,
}

/// Histogram of mood scores over the four fixed bands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionResult {
    /// One entry per band, in band declaration order
    pub bands: [BandStats; 4],
    /// Share of entries in the top two bands combined
    pub positive_percentage: u32,
    /// Band with the highest count; ties resolve to the earlier band
    pub most_common: Option<MoodBand>,
}

/// Pairwise mood correlations against the secondary metrics.
///
/// `None` means insufficient data (fewer than 3 paired values), which is
/// distinct from a coefficient of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    pub sleep_mood: Option<f64>,
    pub energy_mood: Option<f64>,
    pub stress_mood: Option<f64>,
}

/// Qualitative wellness level derived from the composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WellnessLevel {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// Component averages that fed the composite score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessComponents {
    pub mood: f64,
    pub energy: f64,
    pub stress: f64,
}

/// Composite 0-10 score blending mood, energy, and inverted stress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessScore {
    pub score: f64,
    pub level: WellnessLevel,
    pub components: WellnessComponents,
}

/// Category of a generated insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Positive,
    Warning,
    Info,
}

/// One natural-language observation about the entry collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    /// Suggested follow-up, when the rule has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// 1 is most important; the insight list is sorted ascending
    pub priority: u8,
}
