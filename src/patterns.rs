//! Temporal pattern layer
//!
//! Buckets entries by local time of day and by weekday, with per-bucket mood
//! averages and best-bucket selection. The entry's own UTC offset decides
//! which local hour and weekday it falls on.

use chrono::{Datelike, Timelike, Weekday};

use crate::stats::round1;
use crate::types::{BucketStats, MoodEntry, TimeOfDay, TimePatterns, WeekdayPatterns};

/// Weekday names in Sunday-first order, matching the dashboard's layout
const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

fn bucket_for_hour(hour: u32) -> TimeOfDay {
    match hour {
        6..=11 => TimeOfDay::Morning,
        12..=17 => TimeOfDay::Afternoon,
        _ => TimeOfDay::Evening,
    }
}

fn bucket_stats(sum: u32, count: usize) -> BucketStats {
    if count == 0 {
        return BucketStats::empty();
    }
    BucketStats {
        average: round1(f64::from(sum) / count as f64),
        count,
    }
}

/// Bucket entries into morning/afternoon/evening by local hour
pub fn time_patterns(entries: &[MoodEntry]) -> TimePatterns {
    let mut sums = [0u32; 3];
    let mut counts = [0usize; 3];

    for entry in entries {
        let idx = bucket_for_hour(entry.created_at.hour()) as usize;
        sums[idx] += u32::from(entry.mood_score);
        counts[idx] += 1;
    }

    let buckets = [
        bucket_stats(sums[0], counts[0]),
        bucket_stats(sums[1], counts[1]),
        bucket_stats(sums[2], counts[2]),
    ];

    let mut best: Option<TimeOfDay> = None;
    let mut best_average = f64::NEG_INFINITY;
    for (i, time) in TimeOfDay::ALL.iter().enumerate() {
        if buckets[i].count > 0 && buckets[i].average > best_average {
            best_average = buckets[i].average;
            best = Some(*time);
        }
    }

    let [morning, afternoon, evening] = buckets;
    TimePatterns {
        morning,
        afternoon,
        evening,
        best,
    }
}

/// Bucket entries by local weekday, Sunday through Saturday
pub fn weekday_patterns(entries: &[MoodEntry]) -> WeekdayPatterns {
    let mut sums = [0u32; 7];
    let mut counts = [0usize; 7];

    for entry in entries {
        let idx = entry.created_at.weekday().num_days_from_sunday() as usize;
        sums[idx] += u32::from(entry.mood_score);
        counts[idx] += 1;
    }

    let buckets: Vec<BucketStats> = (0..7).map(|i| bucket_stats(sums[i], counts[i])).collect();

    let mut best: Option<String> = None;
    let mut best_average = f64::NEG_INFINITY;
    for (i, bucket) in buckets.iter().enumerate() {
        if bucket.count > 0 && bucket.average > best_average {
            best_average = bucket.average;
            best = Some(WEEKDAY_NAMES[i].to_string());
        }
    }

    WeekdayPatterns {
        sunday: buckets[0].clone(),
        monday: buckets[1].clone(),
        tuesday: buckets[2].clone(),
        wednesday: buckets[3].clone(),
        thursday: buckets[4].clone(),
        friday: buckets[5].clone(),
        saturday: buckets[6].clone(),
        best,
    }
}

/// Bucket averages in declaration order, paired with their time of day.
/// Used by the insight rules to compare the best bucket against the rest.
pub(crate) fn time_buckets(patterns: &TimePatterns) -> [(TimeOfDay, &BucketStats); 3] {
    [
        (TimeOfDay::Morning, &patterns.morning),
        (TimeOfDay::Afternoon, &patterns.afternoon),
        (TimeOfDay::Evening, &patterns.evening),
    ]
}
