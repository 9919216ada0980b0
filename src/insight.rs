//! Insight generation layer
//!
//! Rule-based synthesis of natural-language insights from the other layers'
//! outputs. Each rule is an independent function evaluated against a shared
//! snapshot; firing rules are collected, sorted by priority, and truncated.

use chrono::{DateTime, Duration, Utc};

use crate::config::AnalyticsConfig;
use crate::correlation::{correlation, Metric};
use crate::patterns::{time_buckets, time_patterns};
use crate::stats::{mean_mood, mood_variance};
use crate::streak::streaks;
use crate::trend::weekly_trend_at;
use crate::types::{
    Insight, InsightKind, MoodEntry, StreakKind, StreakSummary, TimePatterns, TrendDirection,
    TrendResult,
};

/// Hard cap on the number of insights returned per call
const MAX_INSIGHTS: usize = 4;

/// Entry count below which only the "keep tracking" insight fires
const MIN_ENTRIES_FOR_RULES: usize = 3;

const GOOD_SLEEP_HOURS: f64 = 7.0;
const POOR_SLEEP_HOURS: f64 = 6.0;
const HIGH_STRESS: u8 = 7;
const LOW_STRESS: u8 = 4;

/// Everything the rule set reads, computed once per call
struct Snapshot<'a> {
    entries: &'a [MoodEntry],
    config: &'a AnalyticsConfig,
    weekly_trend: Option<TrendResult>,
    streaks: StreakSummary,
    time_patterns: TimePatterns,
    variance: f64,
    overall_mean: Option<f64>,
    recent_mean: Option<f64>,
}

impl<'a> Snapshot<'a> {
    fn capture(entries: &'a [MoodEntry], config: &'a AnalyticsConfig, now: DateTime<Utc>) -> Self {
        let week_ago = now - Duration::days(7);
        let recent: Vec<MoodEntry> = entries
            .iter()
            .filter(|e| e.created_at.with_timezone(&Utc) >= week_ago)
            .cloned()
            .collect();

        Snapshot {
            entries,
            config,
            weekly_trend: weekly_trend_at(entries, now, config.trend_sensitivity),
            streaks: streaks(entries, config.positive_threshold),
            time_patterns: time_patterns(entries),
            variance: mood_variance(entries),
            overall_mean: mean_mood(entries),
            recent_mean: mean_mood(&recent),
        }
    }
}

fn subset_mean<F>(entries: &[MoodEntry], keep: F) -> Option<f64>
where
    F: Fn(&MoodEntry) -> bool,
{
    let moods: Vec<f64> = entries
        .iter()
        .filter(|e| keep(e))
        .map(|e| f64::from(e.mood_score))
        .collect();
    if moods.is_empty() {
        None
    } else {
        Some(moods.iter().sum::<f64>() / moods.len() as f64)
    }
}

fn keep_tracking_insight() -> Insight {
    Insight {
        kind: InsightKind::Info,
        title: "Keep tracking".to_string(),
        description: "Log a few more mood entries to unlock trends, streaks, and patterns."
            .to_string(),
        action: Some("Aim for at least one entry per day this week.".to_string()),
        priority: 1,
    }
}

fn weekly_trend_rule(snapshot: &Snapshot) -> Option<Insight> {
    let trend = snapshot.weekly_trend.as_ref()?;
    match trend.direction {
        TrendDirection::Up => Some(Insight {
            kind: InsightKind::Positive,
            title: "Mood trending up".to_string(),
            description: format!(
                "Your average mood rose {:.1} points over the past week.",
                trend.magnitude
            ),
            action: None,
            priority: 1,
        }),
        TrendDirection::Down => Some(Insight {
            kind: InsightKind::Warning,
            title: "Mood trending down".to_string(),
            description: format!(
                "Your average mood dropped {:.1} points over the past week.",
                trend.magnitude
            ),
            action: Some("Consider what changed this week and what has helped before.".to_string()),
            priority: 1,
        }),
        TrendDirection::Stable => None,
    }
}

fn sleep_rule(snapshot: &Snapshot) -> Option<Insight> {
    let with_sleep = snapshot
        .entries
        .iter()
        .filter(|e| e.sleep_hours.is_some())
        .count();
    if with_sleep < 5 {
        return None;
    }

    let good = subset_mean(snapshot.entries, |e| {
        e.sleep_hours.map_or(false, |h| h >= GOOD_SLEEP_HOURS)
    });
    let poor = subset_mean(snapshot.entries, |e| {
        e.sleep_hours.map_or(false, |h| h < POOR_SLEEP_HOURS)
    });

    let delta = good? - poor?;
    if delta > 1.0 {
        Some(Insight {
            kind: InsightKind::Positive,
            title: "Sleep boosts your mood".to_string(),
            description: format!(
                "On nights with 7+ hours of sleep your mood averages {:.1} points higher.",
                delta
            ),
            action: Some("Protect your sleep schedule where you can.".to_string()),
            priority: 2,
        })
    } else {
        None
    }
}

fn stress_rule(snapshot: &Snapshot) -> Option<Insight> {
    let with_stress = snapshot
        .entries
        .iter()
        .filter(|e| e.stress_level.is_some())
        .count();
    if with_stress < 5 {
        return None;
    }

    let low = subset_mean(snapshot.entries, |e| {
        e.stress_level.map_or(false, |s| s <= LOW_STRESS)
    });
    let high = subset_mean(snapshot.entries, |e| {
        e.stress_level.map_or(false, |s| s >= HIGH_STRESS)
    });

    let delta = low? - high?;
    if delta > 1.0 {
        Some(Insight {
            kind: InsightKind::Warning,
            title: "Stress weighs on your mood".to_string(),
            description: format!(
                "High-stress days score {:.1} points lower than low-stress days.",
                delta
            ),
            action: Some("Short breaks or breathing exercises may take the edge off.".to_string()),
            priority: 2,
        })
    } else {
        None
    }
}

fn energy_rule(snapshot: &Snapshot) -> Option<Insight> {
    let with_energy = snapshot
        .entries
        .iter()
        .filter(|e| e.energy_level.is_some())
        .count();
    if with_energy < 5 {
        return None;
    }

    let r = correlation(snapshot.entries, Metric::Energy, Metric::Mood)?;
    if r > 0.6 {
        Some(Insight {
            kind: InsightKind::Positive,
            title: "Energy and mood move together".to_string(),
            description: format!(
                "Your energy level tracks your mood at {:.0}% correlation.",
                r * 100.0
            ),
            action: Some("Activities that raise your energy likely lift your mood too.".to_string()),
            priority: 3,
        })
    } else {
        None
    }
}

fn best_time_rule(snapshot: &Snapshot) -> Option<Insight> {
    let best = snapshot.time_patterns.best?;
    let buckets = time_buckets(&snapshot.time_patterns);
    let best_average = buckets
        .iter()
        .find(|(time, _)| *time == best)
        .map(|(_, stats)| stats.average)?;

    let clearly_best = buckets
        .iter()
        .filter(|(time, stats)| *time != best && stats.count > 0)
        .all(|(_, stats)| best_average - stats.average > 0.5);

    if clearly_best {
        Some(Insight {
            kind: InsightKind::Info,
            title: format!("Your best time of day: {}", best.as_str()),
            description: format!(
                "Your mood averages {:.1} in the {}, higher than any other time of day.",
                best_average,
                best.as_str()
            ),
            action: Some(format!(
                "Schedule demanding tasks for the {}.",
                best.as_str()
            )),
            priority: 4,
        })
    } else {
        None
    }
}

fn streak_rule(snapshot: &Snapshot) -> Option<Insight> {
    let current = &snapshot.streaks.current;
    if current.length < snapshot.config.streak_minimum {
        return None;
    }
    match current.kind {
        StreakKind::Positive => Some(Insight {
            kind: InsightKind::Positive,
            title: format!("{}-day positive streak", current.length),
            description: format!(
                "Your last {} entries all scored {} or above. Keep it going.",
                current.length, snapshot.config.positive_threshold
            ),
            action: None,
            priority: 2,
        }),
        StreakKind::Negative => Some(Insight {
            kind: InsightKind::Warning,
            title: "A challenging stretch".to_string(),
            description: format!(
                "Your last {} entries scored below {}. Rough patches pass.",
                current.length, snapshot.config.positive_threshold
            ),
            action: Some("Reaching out to someone you trust can help.".to_string()),
            priority: 2,
        }),
        StreakKind::Neutral => None,
    }
}

fn variance_rule(snapshot: &Snapshot) -> Option<Insight> {
    let variance = snapshot.variance;
    if variance < 2.0 {
        Some(Insight {
            kind: InsightKind::Positive,
            title: "Stable mood patterns".to_string(),
            description: "Your mood has been steady, with little day-to-day swing.".to_string(),
            action: None,
            priority: 3,
        })
    } else if variance > 6.0 {
        Some(Insight {
            kind: InsightKind::Warning,
            title: "Noticeable mood fluctuations".to_string(),
            description: "Your mood has been swinging widely between entries.".to_string(),
            action: Some("Noting what precedes the swings can reveal triggers.".to_string()),
            priority: 3,
        })
    } else {
        None
    }
}

fn recent_improvement_rule(snapshot: &Snapshot) -> Option<Insight> {
    let recent = snapshot.recent_mean?;
    let overall = snapshot.overall_mean?;
    if recent - overall > 1.0 {
        Some(Insight {
            kind: InsightKind::Positive,
            title: "Recent improvement".to_string(),
            description: format!(
                "Your past week averages {:.1}, up from {:.1} overall.",
                recent, overall
            ),
            action: None,
            priority: 2,
        })
    } else {
        None
    }
}

/// Generate insights against an explicit reference time.
pub fn generate_insights_at(
    entries: &[MoodEntry],
    config: &AnalyticsConfig,
    now: DateTime<Utc>,
) -> Vec<Insight> {
    if entries.len() < MIN_ENTRIES_FOR_RULES {
        return vec![keep_tracking_insight()];
    }

    let snapshot = Snapshot::capture(entries, config, now);
    let rules: [fn(&Snapshot) -> Option<Insight>; 8] = [
        weekly_trend_rule,
        sleep_rule,
        stress_rule,
        energy_rule,
        best_time_rule,
        streak_rule,
        variance_rule,
        recent_improvement_rule,
    ];

    let mut insights: Vec<Insight> = rules.iter().filter_map(|rule| rule(&snapshot)).collect();

    insights.sort_by_key(|i| i.priority);
    insights.truncate(MAX_INSIGHTS);
    insights
}

/// Generate insights relative to the current time.
pub fn generate_insights(entries: &[MoodEntry], config: &AnalyticsConfig) -> Vec<Insight> {
    generate_insights_at(entries, config, Utc::now())
}
