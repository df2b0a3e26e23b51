//! Weighted selection of the next noun to drill.
//!
//! Not spaced repetition: the weighting is a heuristic that surfaces unseen
//! and unmastered material more often, with a mild boost for nouns that have
//! not come up in over a day. Randomness comes from an injected generator so
//! draws are reproducible under a fixed seed.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::types::{AppSettings, Level, Noun, NounProgress, ProgressMap};

/// Weight of a noun that was never answered. Above the maximum seen-noun
/// weight of 1.0 so new material keeps surfacing, but never exclusive.
pub const UNSEEN_WEIGHT: f64 = 2.0;

/// Multiplier for nouns last seen more than [`STALE_AFTER_HOURS`] ago.
pub const STALE_BOOST: f64 = 1.5;

pub const STALE_AFTER_HOURS: i64 = 24;

/// Relative likelihood of drawing a noun with the given progress.
///
/// Seen nouns weigh the inverse of their streak plus one, so a streak of 0
/// gives 1.0 and a streak of 4 gives 0.2.
pub fn selection_weight(progress: Option<&NounProgress>, now: DateTime<Utc>) -> f64 {
    let Some(record) = progress else {
        return UNSEEN_WEIGHT;
    };

    let mut weight = 1.0 / (f64::from(record.correct_streak) + 1.0);

    let hours_since = (now.timestamp_millis() - record.last_seen_at) / (1000 * 60 * 60);
    if hours_since > STALE_AFTER_HOURS {
        weight *= STALE_BOOST;
    }
    weight
}

/// Pick the next noun from `catalog` by weighted random draw.
///
/// Candidates are the catalog entries whose level is currently selected;
/// an empty selection falls back to base-level entries, and a catalog
/// without base-level entries falls back to the whole catalog, so the draw
/// succeeds for every non-empty catalog. When the pool has more than one
/// member, `last_shown` is excluded to avoid an immediate repeat.
pub fn select_next<'a>(
    catalog: &'a [Noun],
    progress: &ProgressMap,
    settings: &AppSettings,
    last_shown: Option<&str>,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> Option<&'a Noun> {
    let mut candidates: Vec<&Noun> = catalog
        .iter()
        .filter(|noun| settings.selected_levels.contains(&noun.level))
        .collect();

    if candidates.is_empty() {
        candidates = catalog
            .iter()
            .filter(|noun| noun.level == Level::BASE)
            .collect();
    }
    if candidates.is_empty() {
        candidates = catalog.iter().collect();
    }

    let pool: Vec<&Noun> = match last_shown {
        Some(last) if candidates.len() > 1 => {
            candidates.into_iter().filter(|noun| noun.id != last).collect()
        }
        _ => candidates,
    };
    if pool.is_empty() {
        return None;
    }

    let weights: Vec<f64> = pool
        .iter()
        .map(|noun| selection_weight(progress.get(&noun.id), now))
        .collect();
    let total: f64 = weights.iter().sum();

    let mut roll = rng.gen_range(0.0..total);
    for (noun, weight) in pool.iter().zip(&weights) {
        roll -= weight;
        if roll <= 0.0 {
            return Some(noun);
        }
    }

    // Floating-point drift can leave the roll positive after the final
    // subtraction; the last pool entry wins deterministically.
    pool.last().copied()
}
