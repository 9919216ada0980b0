//! Distribution layer
//!
//! Histogram of mood scores over four fixed bands that partition the valid
//! 1-10 domain: 1-3, 4-5, 6-7, 8-10.

use crate::types::{BandStats, DistributionResult, MoodBand, MoodEntry};

fn band_for(score: u8) -> MoodBand {
    // Bands partition 1-10; scores outside the domain are the ingestion
    // layer's problem and land in the nearest outer band here
    match score {
        0..=3 => MoodBand::Low,
        4..=5 => MoodBand::Medium,
        6..=7 => MoodBand::Good,
        _ => MoodBand::High,
    }
}

fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
}

/// Histogram entries into the four mood bands
pub fn distribution(entries: &[MoodEntry]) -> DistributionResult {
    let mut counts = [0usize; 4];
    for entry in entries {
        counts[band_for(entry.mood_score) as usize] += 1;
    }

    let total = entries.len();
    let bands = [
        BandStats {
            band: MoodBand::Low,
            count: counts[0],
            percentage: percentage(counts[0], total),
        },
        BandStats {
            band: MoodBand::Medium,
            count: counts[1],
            percentage: percentage(counts[1], total),
        },
        BandStats {
            band: MoodBand::Good,
            count: counts[2],
            percentage: percentage(counts[2], total),
        },
        BandStats {
            band: MoodBand::High,
            count: counts[3],
            percentage: percentage(counts[3], total),
        },
    ];

    let positive_percentage = percentage(counts[2] + counts[3], total);

    // Highest count wins; on a tie the earlier band keeps it
    let most_common = if total == 0 {
        None
    } else {
        let mut best = MoodBand::Low;
        let mut best_count = counts[0];
        for band in MoodBand::ALL {
            if counts[band as usize] > best_count {
                best_count = counts[band as usize];
                best = band;
            }
        }
        Some(best)
    };

    DistributionResult {
        bands,
        positive_percentage,
        most_common,
    }
}
