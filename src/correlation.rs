//! Correlation layer
//!
//! Pearson correlation between mood and the secondary metrics. Only entries
//! carrying both values are paired; fewer than 3 pairs yields `None`, which
//! callers must keep distinct from a coefficient of zero.

use crate::stats::round2;
use crate::types::{CorrelationResult, MoodEntry};

/// Minimum paired values required before a coefficient is computed
const MIN_PAIRS: usize = 3;

/// Selects which field of an entry feeds one side of a correlation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Mood,
    Sleep,
    Energy,
    Stress,
}

impl Metric {
    fn value(&self, entry: &MoodEntry) -> Option<f64> {
        match self {
            Metric::Mood => Some(f64::from(entry.mood_score)),
            Metric::Sleep => entry.sleep_hours,
            Metric::Energy => entry.energy_level.map(f64::from),
            Metric::Stress => entry.stress_level.map(f64::from),
        }
    }
}

/// Pearson correlation coefficient between two metrics, rounded to two
/// decimals.
///
/// Returns `None` with fewer than 3 paired values; returns `Some(0.0)` when
/// either series has no variance.
pub fn correlation(entries: &[MoodEntry], a: Metric, b: Metric) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = entries
        .iter()
        .filter_map(|e| Some((a.value(e)?, b.value(e)?)))
        .collect();

    if pairs.len() < MIN_PAIRS {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_a: f64 = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_b: f64 = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut variance_a = 0.0;
    let mut variance_b = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_a;
        let dy = y - mean_b;
        covariance += dx * dy;
        variance_a += dx * dx;
        variance_b += dy * dy;
    }

    let denominator = (variance_a * variance_b).sqrt();
    if denominator == 0.0 {
        return Some(0.0);
    }

    Some(round2(covariance / denominator))
}

/// Mood correlated against each secondary metric
pub fn all_correlations(entries: &[MoodEntry]) -> CorrelationResult {
    CorrelationResult {
        sleep_mood: correlation(entries, Metric::Sleep, Metric::Mood),
        energy_mood: correlation(entries, Metric::Energy, Metric::Mood),
        stress_mood: correlation(entries, Metric::Stress, Metric::Mood),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, FixedOffset};

    fn make_entry(mood: u8, index: i64) -> MoodEntry {
        let base: DateTime<FixedOffset> = "2024-03-04T09:00:00+00:00".parse().unwrap();
        MoodEntry::new(mood, base + Duration::hours(index))
    }

    fn with_sleep(mood: u8, sleep: f64, index: i64) -> MoodEntry {
        let mut entry = make_entry(mood, index);
        entry.sleep_hours = Some(sleep);
        entry
    }

    fn with_energy(mood: u8, energy: u8, index: i64) -> MoodEntry {
        let mut entry = make_entry(mood, index);
        entry.energy_level = Some(energy);
        entry
    }

    #[test]
    fn test_insufficient_pairs_is_none() {
        let entries = vec![with_sleep(5, 7.0, 0), with_sleep(6, 8.0, 1)];
        assert_eq!(correlation(&entries, Metric::Sleep, Metric::Mood), None);
    }

    #[test]
    fn test_entries_missing_the_field_are_excluded() {
        // Five entries, only two with sleep data: still insufficient
        let entries = vec![
            with_sleep(5, 7.0, 0),
            with_sleep(6, 8.0, 1),
            make_entry(7, 2),
            make_entry(4, 3),
            make_entry(8, 4),
        ];
        assert_eq!(correlation(&entries, Metric::Sleep, Metric::Mood), None);
    }

    #[test]
    fn test_perfect_positive_correlation() {
        let entries = vec![
            with_energy(2, 2, 0),
            with_energy(4, 4, 1),
            with_energy(6, 6, 2),
            with_energy(8, 8, 3),
        ];
        let r = correlation(&entries, Metric::Energy, Metric::Mood).unwrap();
        assert!((r - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_perfect_negative_correlation() {
        let mut entries = Vec::new();
        for (i, (mood, stress)) in [(9u8, 1u8), (7, 3), (5, 5), (3, 7)].iter().enumerate() {
            let mut e = make_entry(*mood, i as i64);
            e.stress_level = Some(*stress);
            entries.push(e);
        }
        let r = correlation(&entries, Metric::Stress, Metric::Mood).unwrap();
        assert!((r + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_variance_is_zero_not_none() {
        let entries = vec![
            with_sleep(5, 8.0, 0),
            with_sleep(7, 8.0, 1),
            with_sleep(6, 8.0, 2),
        ];
        assert_eq!(correlation(&entries, Metric::Sleep, Metric::Mood), Some(0.0));
    }

    #[test]
    fn test_symmetry() {
        let entries = vec![
            with_sleep(5, 8.0, 0),
            with_sleep(3, 5.0, 1),
            with_sleep(6, 7.0, 2),
            with_sleep(2, 4.0, 3),
            with_sleep(7, 8.0, 4),
        ];
        let ab = correlation(&entries, Metric::Sleep, Metric::Mood);
        let ba = correlation(&entries, Metric::Mood, Metric::Sleep);
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_sleep_mood_scenario_strongly_positive() {
        let entries = vec![
            with_sleep(5, 8.0, 0),
            with_sleep(3, 5.0, 1),
            with_sleep(6, 7.0, 2),
            with_sleep(2, 4.0, 3),
            with_sleep(7, 8.0, 4),
        ];
        let r = correlation(&entries, Metric::Sleep, Metric::Mood).unwrap();
        assert!(r > 0.7, "expected strongly positive, got {r}");
    }

    #[test]
    fn test_all_correlations_mixed_availability() {
        let entries = vec![
            with_energy(2, 2, 0),
            with_energy(4, 4, 1),
            with_energy(6, 6, 2),
        ];
        let result = all_correlations(&entries);

        assert!(result.energy_mood.is_some());
        assert_eq!(result.sleep_mood, None);
        assert_eq!(result.stress_mood, None);
    }
}
