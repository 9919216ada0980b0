//! Wellness score layer
//!
//! Composite score blending mood, energy, and inverted stress into a single
//! 0-10 figure with a coarse qualitative level.

use crate::stats::round1;
use crate::types::{MoodEntry, WellnessComponents, WellnessLevel, WellnessScore};

const MOOD_WEIGHT: f64 = 0.4;
const ENERGY_WEIGHT: f64 = 0.3;
const STRESS_WEIGHT: f64 = 0.3;

/// Assumed midpoint when no entry carries the metric
const NEUTRAL_LEVEL: f64 = 5.0;

fn level_for(score: f64) -> WellnessLevel {
    if score >= 8.0 {
        WellnessLevel::Excellent
    } else if score >= 6.5 {
        WellnessLevel::Good
    } else if score >= 5.0 {
        WellnessLevel::Fair
    } else {
        WellnessLevel::Poor
    }
}

fn average_of<F>(entries: &[MoodEntry], pick: F) -> Option<f64>
where
    F: Fn(&MoodEntry) -> Option<f64>,
{
    let values: Vec<f64> = entries.iter().filter_map(&pick).collect();
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Weighted wellness score over all entries.
///
/// Energy and stress average only the entries that carry them; when no entry
/// does, the neutral midpoint 5 stands in. An empty slice scores zero at the
/// `Poor` level with zeroed components.
pub fn wellness_score(entries: &[MoodEntry]) -> WellnessScore {
    if entries.is_empty() {
        return WellnessScore {
            score: 0.0,
            level: WellnessLevel::Poor,
            components: WellnessComponents {
                mood: 0.0,
                energy: 0.0,
                stress: 0.0,
            },
        };
    }

    let mood = entries
        .iter()
        .map(|e| f64::from(e.mood_score))
        .sum::<f64>()
        / entries.len() as f64;
    let energy =
        average_of(entries, |e| e.energy_level.map(f64::from)).unwrap_or(NEUTRAL_LEVEL);
    let stress =
        average_of(entries, |e| e.stress_level.map(f64::from)).unwrap_or(NEUTRAL_LEVEL);

    let score = round1(
        mood * MOOD_WEIGHT + energy * ENERGY_WEIGHT + (10.0 - stress) * STRESS_WEIGHT,
    );

    WellnessScore {
        score,
        level: level_for(score),
        components: WellnessComponents {
            mood: round1(mood),
            energy: round1(energy),
            stress: round1(stress),
        },
    }
}
