//! Streak and level update applied when a focus countdown completes.

use chrono::{DateTime, NaiveDate, Utc};

use crate::leveling::level_for;
use crate::model::UserStats;
use crate::time::{day_key, days_between};

/// Streak after studying on `today`, given the last study day.
///
/// Same day keeps the streak, the next calendar day extends it, anything
/// else (a gap, or the very first session) starts over at 1.
pub fn next_streak(current: u32, last_study_date: Option<NaiveDate>, today: NaiveDate) -> u32 {
    match last_study_date {
        Some(last) if last == today => current,
        Some(last) if days_between(last, today) == 1 => current.saturating_add(1),
        _ => 1,
    }
}

/// Fold a completed focus session of `duration` minutes into `stats`.
///
/// The running totals only grow here; the reconciler rebuilds them from the
/// session log on the next start.
pub fn record_focus_completion(stats: &mut UserStats, duration: u32, now: DateTime<Utc>) {
    let today = day_key(now);

    stats.total_focus_minutes_today = stats.total_focus_minutes_today.saturating_add(duration);
    stats.total_focus_minutes_this_week =
        stats.total_focus_minutes_this_week.saturating_add(duration);
    stats.streak_days = next_streak(stats.streak_days, stats.last_study_date, today);
    stats.last_study_date = Some(today);
    stats.current_level = level_for(stats.total_focus_minutes_this_week);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leveling::Level;
    use chrono::{Duration, TimeZone};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_session_starts_streak() {
        assert_eq!(next_streak(0, None, day(2026, 10, 19)), 1);
    }

    #[test]
    fn same_day_keeps_streak() {
        assert_eq!(next_streak(4, Some(day(2026, 10, 19)), day(2026, 10, 19)), 4);
    }

    #[test]
    fn next_day_extends_streak() {
        assert_eq!(next_streak(4, Some(day(2026, 10, 18)), day(2026, 10, 19)), 5);
        // Across a month boundary.
        assert_eq!(next_streak(2, Some(day(2026, 9, 30)), day(2026, 10, 1)), 3);
    }

    #[test]
    fn gap_resets_streak() {
        assert_eq!(next_streak(9, Some(day(2026, 10, 16)), day(2026, 10, 19)), 1);
    }

    #[test]
    fn completion_updates_totals_streak_and_level() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
        let mut stats = UserStats {
            total_focus_minutes_today: 0,
            total_focus_minutes_this_week: 880,
            streak_days: 3,
            last_study_date: Some(day_key(now - Duration::days(1))),
            current_level: Level::Silver,
            xp: 7,
        };

        record_focus_completion(&mut stats, 25, now);

        assert_eq!(stats.total_focus_minutes_today, 25);
        assert_eq!(stats.total_focus_minutes_this_week, 905);
        assert_eq!(stats.streak_days, 4);
        assert_eq!(stats.last_study_date, Some(day(2026, 10, 19)));
        assert_eq!(stats.current_level, Level::Gold);
        assert_eq!(stats.xp, 7);
    }
}
