//! Statistics layer
//!
//! Basic aggregate statistics over mood scores. Empty input produces a zeroed
//! result rather than an error.

use crate::types::{BasicStats, MoodEntry};

/// Round to one decimal place
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Arithmetic mean of the mood scores in `entries`; `None` when empty
pub(crate) fn mean_mood(entries: &[MoodEntry]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    let total: u32 = entries.iter().map(|e| u32::from(e.mood_score)).sum();
    Some(f64::from(total) / entries.len() as f64)
}

/// Population variance of the mood scores; 0 for empty input
pub(crate) fn mood_variance(entries: &[MoodEntry]) -> f64 {
    let Some(mean) = mean_mood(entries) else {
        return 0.0;
    };
    let sum_sq: f64 = entries
        .iter()
        .map(|e| {
            let d = f64::from(e.mood_score) - mean;
            d * d
        })
        .sum();
    sum_sq / entries.len() as f64
}

/// Compute average, min, max, range, total, and count of mood scores
pub fn basic_stats(entries: &[MoodEntry]) -> BasicStats {
    if entries.is_empty() {
        return BasicStats::empty();
    }

    let mut min = u8::MAX;
    let mut max = u8::MIN;
    let mut total: u32 = 0;

    for entry in entries {
        min = min.min(entry.mood_score);
        max = max.max(entry.mood_score);
        total += u32::from(entry.mood_score);
    }

    BasicStats {
        average: round1(f64::from(total) / entries.len() as f64),
        min,
        max,
        range: max - min,
        total,
        count: entries.len(),
    }
}
