//! Trend layer
//!
//! Period-over-period comparison of mean mood: weekly windows, the most
//! recent handful of entries, or any two caller-chosen sets. A missing period
//! yields `None` rather than a fabricated trend.

use chrono::{DateTime, Duration, Utc};

use crate::stats::{mean_mood, round1};
use crate::types::{MoodEntry, TrendDirection, TrendResult};

/// Number of most-recent entries compared by [`recent_trend`]
const RECENT_WINDOW: usize = 3;

/// Compare two entry sets and report direction and magnitude of the change.
///
/// Returns `None` when either set is empty. The percentage is relative to the
/// previous period's mean, with a zero mean guarded to 0.
pub fn trend(
    recent: &[MoodEntry],
    previous: &[MoodEntry],
    sensitivity: f64,
) -> Option<TrendResult> {
    let recent_mean = mean_mood(recent)?;
    let previous_mean = mean_mood(previous)?;

    let difference = recent_mean - previous_mean;
    let magnitude = round1(difference.abs());
    let percentage = if previous_mean == 0.0 {
        0.0
    } else {
        (difference / previous_mean * 100.0).round()
    };

    // Stability is judged on the raw difference; rounding the stored
    // magnitude first could promote a sub-threshold change to Up/Down
    let direction = if difference.abs() < sensitivity {
        TrendDirection::Stable
    } else if difference > 0.0 {
        TrendDirection::Up
    } else {
        TrendDirection::Down
    };

    Some(TrendResult {
        direction,
        magnitude,
        percentage,
    })
}

/// Weekly trend relative to the current time
pub fn weekly_trend(entries: &[MoodEntry], sensitivity: f64) -> Option<TrendResult> {
    weekly_trend_at(entries, Utc::now(), sensitivity)
}

/// Weekly trend relative to `now`: the last 7 days against the 7 days before
pub fn weekly_trend_at(
    entries: &[MoodEntry],
    now: DateTime<Utc>,
    sensitivity: f64,
) -> Option<TrendResult> {
    let week_ago = now - Duration::days(7);
    let two_weeks_ago = now - Duration::days(14);

    let recent: Vec<MoodEntry> = entries
        .iter()
        .filter(|e| e.created_at >= week_ago)
        .cloned()
        .collect();
    let previous: Vec<MoodEntry> = entries
        .iter()
        .filter(|e| e.created_at >= two_weeks_ago && e.created_at < week_ago)
        .cloned()
        .collect();

    trend(&recent, &previous, sensitivity)
}

/// Short-horizon trend: the most recent 3 entries against the 3 before them.
///
/// Requires at least 6 entries.
pub fn recent_trend(entries: &[MoodEntry], sensitivity: f64) -> Option<TrendResult> {
    if entries.len() < RECENT_WINDOW * 2 {
        return None;
    }

    let mut sorted: Vec<&MoodEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let recent: Vec<MoodEntry> = sorted[..RECENT_WINDOW].iter().map(|e| (*e).clone()).collect();
    let previous: Vec<MoodEntry> = sorted[RECENT_WINDOW..RECENT_WINDOW * 2]
        .iter()
        .map(|e| (*e).clone())
        .collect();

    trend(&recent, &previous, sensitivity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TREND_SENSITIVITY;

    fn make_entry(score: u8, offset_hours: i64) -> MoodEntry {
        let base: DateTime<chrono::FixedOffset> = "2024-03-04T12:00:00+00:00".parse().unwrap();
        MoodEntry::new(score, base + Duration::hours(offset_hours))
    }

    fn make_entries(scores: &[u8]) -> Vec<MoodEntry> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &s)| make_entry(s, i as i64))
            .collect()
    }

    #[test]
    fn test_trend_requires_both_periods() {
        let some = make_entries(&[7, 8]);
        assert!(trend(&some, &[], DEFAULT_TREND_SENSITIVITY).is_none());
        assert!(trend(&[], &some, DEFAULT_TREND_SENSITIVITY).is_none());
    }

    #[test]
    fn test_trend_up() {
        let recent = make_entries(&[8, 8]);
        let previous = make_entries(&[5, 5]);
        let result = trend(&recent, &previous, DEFAULT_TREND_SENSITIVITY).unwrap();

        assert_eq!(result.direction, TrendDirection::Up);
        assert!((result.magnitude - 3.0).abs() < f64::EPSILON);
        // (8 - 5) / 5 * 100 = 60
        assert!((result.percentage - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_trend_down() {
        let recent = make_entries(&[4]);
        let previous = make_entries(&[7]);
        let result = trend(&recent, &previous, DEFAULT_TREND_SENSITIVITY).unwrap();

        assert_eq!(result.direction, TrendDirection::Down);
        assert!((result.magnitude - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_trend_stable_below_sensitivity() {
        let recent = make_entries(&[6, 6]);
        let previous = make_entries(&[6, 5, 7, 6]);
        let result = trend(&recent, &previous, DEFAULT_TREND_SENSITIVITY).unwrap();
        assert_eq!(result.direction, TrendDirection::Stable);
    }

    #[test]
    fn test_direction_ignores_magnitude_rounding() {
        // 7 sixes and 8 fives average 5.4667: the raw difference of 0.4667
        // sits below the sensitivity even though it rounds to 0.5
        let recent = make_entries(&[6, 6, 6, 6, 6, 6, 6, 5, 5, 5, 5, 5, 5, 5, 5]);
        let previous = make_entries(&[5, 5, 5]);
        let result = trend(&recent, &previous, DEFAULT_TREND_SENSITIVITY).unwrap();

        assert_eq!(result.direction, TrendDirection::Stable);
        assert!((result.magnitude - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weekly_trend_partitions_by_week() {
        let now: DateTime<Utc> = "2024-03-15T12:00:00Z".parse().unwrap();
        let base: DateTime<chrono::FixedOffset> = "2024-03-15T10:00:00+00:00".parse().unwrap();

        let mut entries = Vec::new();
        // Last 7 days: moods of 8
        for day in 0..3 {
            entries.push(MoodEntry::new(8, base - Duration::days(day)));
        }
        // The 7 days before: moods of 5
        for day in 8..11 {
            entries.push(MoodEntry::new(5, base - Duration::days(day)));
        }
        // Older than 14 days: ignored
        entries.push(MoodEntry::new(1, base - Duration::days(20)));

        let result = weekly_trend_at(&entries, now, DEFAULT_TREND_SENSITIVITY).unwrap();
        assert_eq!(result.direction, TrendDirection::Up);
        assert!((result.magnitude - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weekly_trend_none_without_previous_week() {
        let now: DateTime<Utc> = "2024-03-15T12:00:00Z".parse().unwrap();
        let base: DateTime<chrono::FixedOffset> = "2024-03-15T10:00:00+00:00".parse().unwrap();
        let entries = vec![MoodEntry::new(8, base), MoodEntry::new(7, base)];

        assert!(weekly_trend_at(&entries, now, DEFAULT_TREND_SENSITIVITY).is_none());
    }

    #[test]
    fn test_recent_trend_requires_six_entries() {
        let entries = make_entries(&[5, 6, 7, 8, 9]);
        assert!(recent_trend(&entries, DEFAULT_TREND_SENSITIVITY).is_none());
    }

    #[test]
    fn test_recent_trend_compares_latest_three() {
        // Chronological order; the last three (8, 9, 7 -> mean 8) are the
        // most recent, compared against (5, 4, 6 -> mean 5)
        let entries = make_entries(&[5, 4, 6, 8, 9, 7]);
        let result = recent_trend(&entries, DEFAULT_TREND_SENSITIVITY).unwrap();

        assert_eq!(result.direction, TrendDirection::Up);
        assert!((result.magnitude - 3.0).abs() < f64::EPSILON);
        assert!((result.percentage - 60.0).abs() < f64::EPSILON);
    }
}
