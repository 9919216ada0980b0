//! Analysis orchestration
//!
//! `MoodAnalyzer` binds a configuration to the individual computation layers
//! and exposes one method per computation plus a comprehensive aggregate.
//! Every method is a pure function of its inputs; the analyzer itself holds
//! no entry data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::AnalyticsConfig;
use crate::correlation::{self, Metric};
use crate::distribution;
use crate::insight;
use crate::patterns;
use crate::stats;
use crate::streak;
use crate::trend;
use crate::types::{
    BasicStats, CorrelationResult, DistributionResult, Insight, MoodEntry, StreakSummary,
    TimePatterns, TrendResult, WeekdayPatterns, WellnessScore,
};
use crate::wellness;

/// Aggregate of every computation over one entry set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodAnalytics {
    pub stats: BasicStats,
    pub weekly_trend: Option<TrendResult>,
    pub recent_trend: Option<TrendResult>,
    pub streaks: StreakSummary,
    pub time_patterns: TimePatterns,
    pub weekday_patterns: WeekdayPatterns,
    pub distribution: DistributionResult,
    pub correlations: CorrelationResult,
    pub wellness: WellnessScore,
    pub insights: Vec<Insight>,
    pub entry_count: usize,
    pub computed_at: DateTime<Utc>,
}

/// Configured front door to the analytics layers
#[derive(Debug, Clone, Default)]
pub struct MoodAnalyzer {
    config: AnalyticsConfig,
}

impl MoodAnalyzer {
    pub fn new(config: AnalyticsConfig) -> Self {
        MoodAnalyzer { config }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn basic_stats(&self, entries: &[MoodEntry]) -> BasicStats {
        stats::basic_stats(entries)
    }

    pub fn weekly_trend(&self, entries: &[MoodEntry]) -> Option<TrendResult> {
        trend::weekly_trend(entries, self.config.trend_sensitivity)
    }

    pub fn weekly_trend_at(
        &self,
        entries: &[MoodEntry],
        now: DateTime<Utc>,
    ) -> Option<TrendResult> {
        trend::weekly_trend_at(entries, now, self.config.trend_sensitivity)
    }

    pub fn recent_trend(&self, entries: &[MoodEntry]) -> Option<TrendResult> {
        trend::recent_trend(entries, self.config.trend_sensitivity)
    }

    pub fn streaks(&self, entries: &[MoodEntry]) -> StreakSummary {
        streak::streaks(entries, self.config.positive_threshold)
    }

    pub fn time_patterns(&self, entries: &[MoodEntry]) -> TimePatterns {
        patterns::time_patterns(entries)
    }

    pub fn weekday_patterns(&self, entries: &[MoodEntry]) -> WeekdayPatterns {
        patterns::weekday_patterns(entries)
    }

    pub fn distribution(&self, entries: &[MoodEntry]) -> DistributionResult {
        distribution::distribution(entries)
    }

    pub fn correlation(&self, entries: &[MoodEntry], a: Metric, b: Metric) -> Option<f64> {
        correlation::correlation(entries, a, b)
    }

    pub fn all_correlations(&self, entries: &[MoodEntry]) -> CorrelationResult {
        correlation::all_correlations(entries)
    }

    pub fn wellness_score(&self, entries: &[MoodEntry]) -> WellnessScore {
        wellness::wellness_score(entries)
    }

    pub fn generate_insights(&self, entries: &[MoodEntry]) -> Vec<Insight> {
        insight::generate_insights(entries, &self.config)
    }

    pub fn generate_insights_at(
        &self,
        entries: &[MoodEntry],
        now: DateTime<Utc>,
    ) -> Vec<Insight> {
        insight::generate_insights_at(entries, &self.config, now)
    }

    /// Run every layer and collect the results.
    pub fn analyze(&self, entries: &[MoodEntry]) -> MoodAnalytics {
        self.analyze_at(entries, Utc::now())
    }

    /// `analyze` against an explicit reference time, for reproducible output.
    pub fn analyze_at(&self, entries: &[MoodEntry], now: DateTime<Utc>) -> MoodAnalytics {
        MoodAnalytics {
            stats: stats::basic_stats(entries),
            weekly_trend: trend::weekly_trend_at(entries, now, self.config.trend_sensitivity),
            recent_trend: trend::recent_trend(entries, self.config.trend_sensitivity),
            streaks: streak::streaks(entries, self.config.positive_threshold),
            time_patterns: patterns::time_patterns(entries),
            weekday_patterns: patterns::weekday_patterns(entries),
            distribution: distribution::distribution(entries),
            correlations: correlation::all_correlations(entries),
            wellness: wellness::wellness_score(entries),
            insights: insight::generate_insights_at(entries, &self.config, now),
            entry_count: entries.len(),
            computed_at: now,
        }
    }
}

/// Comprehensive analytics with the default configuration.
pub fn analyze(entries: &[MoodEntry]) -> MoodAnalytics {
    MoodAnalyzer::default().analyze(entries)
}

/// Insights with the default configuration.
pub fn generate_insights(entries: &[MoodEntry]) -> Vec<Insight> {
    MoodAnalyzer::default().generate_insights(entries)
}
