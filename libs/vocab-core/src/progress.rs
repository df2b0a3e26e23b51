//! Per-noun mastery records.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::types::{NounProgress, ProgressMap};

/// Store for per-noun progress records. The scheduler only reads them;
/// writes happen exclusively through [`record_answer`](Self::record_answer).
pub trait ProgressStore {
    /// Progress for one noun, or `None` if it was never answered.
    fn progress(&self, noun_id: &str) -> Option<NounProgress>;

    /// The whole persisted map. Missing or unreadable data yields an empty
    /// map rather than an error.
    fn progress_map(&self) -> ProgressMap;

    /// Apply one answer and persist the result: attempts go up by one, the
    /// streak grows on a correct answer and resets to zero otherwise, and
    /// the last-seen timestamp moves to `now`. Creates the record on the
    /// first answer for a noun.
    fn record_answer(
        &mut self,
        noun_id: &str,
        was_correct: bool,
        now: DateTime<Utc>,
    ) -> Result<NounProgress>;
}

/// State transition applied on every recorded answer.
///
/// `last_seen_at` never moves backwards, even if `now` precedes the stored
/// timestamp (clock adjustments).
pub(crate) fn apply_answer(
    existing: Option<NounProgress>,
    noun_id: &str,
    was_correct: bool,
    now: DateTime<Utc>,
) -> NounProgress {
    let prior = existing.unwrap_or_else(|| NounProgress::new(noun_id));
    NounProgress {
        total_attempts: prior.total_attempts + 1,
        correct_streak: if was_correct {
            prior.correct_streak + 1
        } else {
            0
        },
        last_seen_at: now.timestamp_millis().max(prior.last_seen_at),
        noun_id: prior.noun_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn first_answer_creates_record() {
        let record = apply_answer(None, "haus", true, at(1_000));
        assert_eq!(
            record,
            NounProgress {
                noun_id: "haus".to_string(),
                correct_streak: 1,
                total_attempts: 1,
                last_seen_at: 1_000,
            }
        );
    }

    #[test]
    fn correct_answer_extends_streak() {
        let prior = NounProgress {
            noun_id: "haus".to_string(),
            correct_streak: 4,
            total_attempts: 9,
            last_seen_at: 1_000,
        };
        let record = apply_answer(Some(prior), "haus", true, at(2_000));
        assert_eq!(record.correct_streak, 5);
        assert_eq!(record.total_attempts, 10);
    }

    #[test]
    fn wrong_answer_resets_streak_to_zero() {
        let prior = NounProgress {
            noun_id: "haus".to_string(),
            correct_streak: 7,
            total_attempts: 7,
            last_seen_at: 1_000,
        };
        let record = apply_answer(Some(prior), "haus", false, at(2_000));
        assert_eq!(record.correct_streak, 0);
        assert_eq!(record.total_attempts, 8);
    }

    #[test]
    fn attempts_increase_by_one_per_answer() {
        let mut record: Option<NounProgress> = None;
        for (i, correct) in [true, false, true, true, false].into_iter().enumerate() {
            let prior_attempts = record.as_ref().map_or(0, |r| r.total_attempts);
            let next = apply_answer(record.take(), "haus", correct, at(i as i64 * 1_000));
            assert_eq!(next.total_attempts, prior_attempts + 1);
            record = Some(next);
        }
    }

    #[test]
    fn last_seen_never_decreases() {
        let prior = NounProgress {
            noun_id: "haus".to_string(),
            correct_streak: 0,
            total_attempts: 1,
            last_seen_at: 5_000,
        };
        let record = apply_answer(Some(prior), "haus", true, at(3_000));
        assert_eq!(record.last_seen_at, 5_000);
    }
}
