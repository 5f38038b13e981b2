//! Weekly leveling table.
//!
//! Levels are earned by focus minutes inside the trailing week. The table is
//! ascending; lookup takes the last threshold not exceeding the total.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Master,
}

/// `(level, minutes per week)` pairs, ascending.
pub const LEVEL_TABLE: [(Level, u32); 6] = [
    (Level::Bronze, 0),
    (Level::Silver, 480),
    (Level::Gold, 900),
    (Level::Platinum, 1500),
    (Level::Diamond, 2400),
    (Level::Master, 3600),
];

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Bronze => "Bronze",
            Level::Silver => "Silver",
            Level::Gold => "Gold",
            Level::Platinum => "Platinum",
            Level::Diamond => "Diamond",
            Level::Master => "Master",
        }
    }

    /// Weekly minutes needed to hold this level.
    pub fn threshold(&self) -> u32 {
        LEVEL_TABLE
            .iter()
            .find(|(level, _)| level == self)
            .map(|(_, minutes)| *minutes)
            .unwrap_or(0)
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::Bronze
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Level held with `minutes_this_week` of focus.
pub fn level_for(minutes_this_week: u32) -> Level {
    LEVEL_TABLE
        .iter()
        .take_while(|(_, threshold)| minutes_this_week >= *threshold)
        .last()
        .map(|(level, _)| *level)
        .unwrap_or_default()
}

/// Current level plus what it takes to reach the next one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelInfo {
    pub current: Level,
    pub next: Option<Level>,
    pub next_threshold: Option<u32>,
    /// 0.0 .. 100.0 progress from the current threshold toward the next.
    /// Always 100.0 at the top level.
    pub progress_pct: f64,
}

pub fn level_info(minutes_this_week: u32) -> LevelInfo {
    let current = level_for(minutes_this_week);
    let next = LEVEL_TABLE
        .iter()
        .find(|(_, threshold)| *threshold > minutes_this_week)
        .copied();

    let progress_pct = match next {
        Some((_, next_threshold)) => {
            let floor = current.threshold();
            let span = next_threshold.saturating_sub(floor).max(1) as f64;
            (minutes_this_week.saturating_sub(floor) as f64 / span * 100.0).min(100.0)
        }
        None => 100.0,
    };

    LevelInfo {
        current,
        next: next.map(|(level, _)| level),
        next_threshold: next.map(|(_, threshold)| threshold),
        progress_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn table_examples() {
        assert_eq!(level_for(0), Level::Bronze);
        assert_eq!(level_for(479), Level::Bronze);
        assert_eq!(level_for(480), Level::Silver);
        assert_eq!(level_for(900), Level::Gold);
        assert_eq!(level_for(2400), Level::Diamond);
        assert_eq!(level_for(10_000), Level::Master);
    }

    #[test]
    fn info_points_at_next_tier() {
        let info = level_info(690);
        assert_eq!(info.current, Level::Silver);
        assert_eq!(info.next, Some(Level::Gold));
        assert_eq!(info.next_threshold, Some(900));
        assert!((info.progress_pct - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn info_at_top_level_has_no_next() {
        let info = level_info(3600);
        assert_eq!(info.current, Level::Master);
        assert_eq!(info.next, None);
        assert_eq!(info.progress_pct, 100.0);
    }

    #[test]
    fn level_serializes_as_name() {
        assert_eq!(serde_json::to_string(&Level::Platinum).unwrap(), "\"Platinum\"");
    }

    proptest! {
        #[test]
        fn level_is_monotonic(a in 0u32..10_000, b in 0u32..10_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(level_for(lo) <= level_for(hi));
        }
    }
}
