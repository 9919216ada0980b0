//! Streak layer
//!
//! Run-length detection over a binary positive/negative classification of
//! entries. Both the current streak and the longest streak walk the entries
//! newest-first; on a tie in length the longest streak keeps the first run
//! found, so the most recent of two equal runs wins.

use crate::types::{MoodEntry, StreakKind, StreakResult, StreakSummary};

fn classify(entry: &MoodEntry, positive_threshold: u8) -> StreakKind {
    if entry.mood_score >= positive_threshold {
        StreakKind::Positive
    } else {
        StreakKind::Negative
    }
}

/// Compute the current and longest streaks for `entries`
pub fn streaks(entries: &[MoodEntry], positive_threshold: u8) -> StreakSummary {
    if entries.is_empty() {
        return StreakSummary {
            current: StreakResult {
                length: 0,
                kind: StreakKind::Neutral,
                is_current: true,
            },
            longest: StreakResult {
                length: 0,
                kind: StreakKind::Neutral,
                is_current: false,
            },
        };
    }

    let mut sorted: Vec<&MoodEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let current = current_streak(&sorted, positive_threshold);
    let longest = longest_streak(&sorted, positive_threshold);

    StreakSummary { current, longest }
}

/// Count consecutive entries from the newest one sharing its classification
fn current_streak(sorted_desc: &[&MoodEntry], positive_threshold: u8) -> StreakResult {
    let kind = classify(sorted_desc[0], positive_threshold);
    let length = sorted_desc
        .iter()
        .take_while(|e| classify(e, positive_threshold) == kind)
        .count() as u32;

    StreakResult {
        length,
        kind,
        is_current: true,
    }
}

/// Longest run of one classification; ties keep the run found first
/// (the more recent one, given the newest-first walk)
fn longest_streak(sorted_desc: &[&MoodEntry], positive_threshold: u8) -> StreakResult {
    let mut best_length: u32 = 0;
    let mut best_kind = StreakKind::Neutral;
    let mut best_start: usize = 0;

    let mut run_length: u32 = 0;
    let mut run_kind = StreakKind::Neutral;
    let mut run_start: usize = 0;

    for (i, entry) in sorted_desc.iter().enumerate() {
        let kind = classify(entry, positive_threshold);
        if run_length > 0 && kind == run_kind {
            run_length += 1;
        } else {
            if run_length > best_length {
                best_length = run_length;
                best_kind = run_kind;
                best_start = run_start;
            }
            run_kind = kind;
            run_length = 1;
            run_start = i;
        }
    }
    if run_length > best_length {
        best_length = run_length;
        best_kind = run_kind;
        best_start = run_start;
    }

    StreakResult {
        length: best_length,
        kind: best_kind,
        is_current: best_start == 0,
    }
}
