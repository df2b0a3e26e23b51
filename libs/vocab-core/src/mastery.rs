//! Reporting heuristic over progress records.
//!
//! "Mastered" is a display measure for the stats screen only. Selection
//! weighting works from the raw streak and stays independent of this
//! threshold, so the two must not be conflated.

use serde::Serialize;

use crate::types::{Level, Noun, NounProgress, ProgressMap};

/// Consecutive correct answers at which a noun counts as mastered.
pub const MASTERY_STREAK: u32 = 2;

pub fn is_mastered(progress: &NounProgress) -> bool {
    progress.correct_streak >= MASTERY_STREAK
}

/// Per-level aggregate for the stats screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelMastery {
    pub level: Level,
    /// Catalog entries at this level.
    pub total: usize,
    /// Entries answered at least once.
    pub practiced: usize,
    pub mastered: usize,
    /// Share of practiced entries currently mastered, as a whole percent.
    pub mastered_percent: u32,
}

/// Aggregate mastery per level over the whole catalog.
pub fn level_mastery(catalog: &[Noun], progress: &ProgressMap) -> Vec<LevelMastery> {
    Level::ALL
        .iter()
        .map(|&level| {
            let mut total = 0;
            let mut practiced = 0;
            let mut mastered = 0;

            for noun in catalog.iter().filter(|noun| noun.level == level) {
                total += 1;
                if let Some(record) = progress.get(&noun.id) {
                    if record.total_attempts > 0 {
                        practiced += 1;
                    }
                    if is_mastered(record) {
                        mastered += 1;
                    }
                }
            }

            let mastered_percent = if practiced > 0 {
                ((mastered as f64 / practiced as f64) * 100.0).round() as u32
            } else {
                0
            };

            LevelMastery {
                level,
                total,
                practiced,
                mastered,
                mastered_percent,
            }
        })
        .collect()
}
