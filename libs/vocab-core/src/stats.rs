//! Aggregate counters and the daily-streak state machine.

use chrono::NaiveDate;

use crate::error::Result;
use crate::types::UserStats;

/// Tracker for the per-installation stats record.
pub trait StatsTracker {
    /// Current stats. Missing, unreadable, or inconsistent data (more
    /// correct answers than answers) yields the zero record.
    fn stats(&self) -> UserStats;

    /// Record one answer on `today` and persist the result.
    fn record(&mut self, was_correct: bool, today: NaiveDate) -> Result<UserStats>;
}

/// Transition applied on every recorded answer.
///
/// The streak compares calendar dates, not elapsed time: several sessions on
/// the same day keep it unchanged, playing on consecutive days grows it, and
/// a single missed day (or a first-ever answer) restarts it at one.
pub(crate) fn apply_answer(stats: &UserStats, was_correct: bool, today: NaiveDate) -> UserStats {
    UserStats {
        total_answered: stats.total_answered + 1,
        total_correct: stats.total_correct + u32::from(was_correct),
        current_day_streak: next_day_streak(stats, today),
        last_play_date: today.format("%Y-%m-%d").to_string(),
    }
}

fn next_day_streak(stats: &UserStats, today: NaiveDate) -> u32 {
    match NaiveDate::parse_from_str(&stats.last_play_date, "%Y-%m-%d") {
        Ok(last) if last == today => stats.current_day_streak,
        Ok(last) if last.succ_opt() == Some(today) => stats.current_day_streak + 1,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn played(last: &str, streak: u32) -> UserStats {
        UserStats {
            total_answered: 10,
            total_correct: 6,
            current_day_streak: streak,
            last_play_date: last.to_string(),
        }
    }

    #[test]
    fn first_ever_answer_starts_streak_at_one() {
        let stats = apply_answer(&UserStats::default(), true, day(2024, 3, 5));
        assert_eq!(stats.current_day_streak, 1);
        assert_eq!(stats.last_play_date, "2024-03-05");
        assert_eq!(stats.total_answered, 1);
        assert_eq!(stats.total_correct, 1);
    }

    #[test]
    fn consecutive_day_increments_streak() {
        let stats = apply_answer(&played("2024-03-04", 3), false, day(2024, 3, 5));
        assert_eq!(stats.current_day_streak, 4);
    }

    #[test]
    fn gap_of_several_days_resets_streak() {
        let stats = apply_answer(&played("2024-03-02", 9), true, day(2024, 3, 5));
        assert_eq!(stats.current_day_streak, 1);
    }

    #[test]
    fn same_day_answers_leave_streak_unchanged() {
        let today = day(2024, 3, 5);
        let first = apply_answer(&played("2024-03-04", 3), true, today);
        let second = apply_answer(&first, false, today);
        assert_eq!(first.current_day_streak, 4);
        assert_eq!(second.current_day_streak, 4);
    }

    #[test]
    fn streak_survives_month_boundary() {
        let stats = apply_answer(&played("2024-02-29", 2), true, day(2024, 3, 1));
        assert_eq!(stats.current_day_streak, 3);
    }

    #[test]
    fn counters_track_correctness() {
        let mut stats = UserStats::default();
        for correct in [true, true, false, true, false] {
            stats = apply_answer(&stats, correct, day(2024, 3, 5));
            assert!(stats.total_correct <= stats.total_answered);
        }
        assert_eq!(stats.total_answered, 5);
        assert_eq!(stats.total_correct, 3);
    }

    #[test]
    fn unparseable_play_date_behaves_like_first_play() {
        let stats = apply_answer(&played("yesterday-ish", 6), true, day(2024, 3, 5));
        assert_eq!(stats.current_day_streak, 1);
    }
}
