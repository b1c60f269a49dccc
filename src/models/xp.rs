use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::goal::Dimension;

/// Experience points granted for completing a goal when the category medal
/// was already earned today.
pub const XP_GOAL_COMPLETED: u32 = 15;

/// Medals earned per day: `YYYY-MM-DD` day key to the dimensions that had a
/// goal completed that day.
pub type MedalLog = HashMap<String, Vec<Dimension>>;

/// Bonus granted the first time a category medal is earned on a given day.
pub const XP_DAILY_MEDAL: u32 = 50;

/// Level progression state. The cost of each level grows by half, floored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpState {
    pub level: u32,
    pub current_xp: u32,
    pub xp_to_next_level: u32,
}

impl Default for XpState {
    fn default() -> Self {
        Self { level: 1, current_xp: 0, xp_to_next_level: 200 }
    }
}

impl XpState {
    /// Add XP and resolve any level-ups. Returns the number of levels gained.
    pub fn add(&mut self, amount: u32) -> u32 {
        self.current_xp += amount;
        let mut gained = 0;
        while self.current_xp >= self.xp_to_next_level {
            self.current_xp -= self.xp_to_next_level;
            self.level += 1;
            self.xp_to_next_level = (self.xp_to_next_level as f64 * 1.5).floor() as u32;
            gained += 1;
        }
        gained
    }

    /// Progress toward the next level, 0 to 100.
    pub fn percent(&self) -> u8 {
        if self.xp_to_next_level == 0 {
            return 100;
        }
        (((self.current_xp as f64 / self.xp_to_next_level as f64) * 100.0).min(100.0)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = XpState::default();
        assert_eq!(state.level, 1);
        assert_eq!(state.current_xp, 0);
        assert_eq!(state.xp_to_next_level, 200);
    }

    #[test]
    fn test_level_up_grows_cost_by_half() {
        let mut state = XpState::default();
        assert_eq!(state.add(200), 1);
        assert_eq!(state.level, 2);
        assert_eq!(state.current_xp, 0);
        assert_eq!(state.xp_to_next_level, 300);
    }

    #[test]
    fn test_overflow_carries_into_next_level() {
        let mut state = XpState::default();
        assert_eq!(state.add(250), 1);
        assert_eq!(state.current_xp, 50);
        assert_eq!(state.xp_to_next_level, 300);
    }

    #[test]
    fn test_multi_level_jump() {
        let mut state = XpState::default();
        // 200 + 300 = 500 spent, 10 left over
        assert_eq!(state.add(510), 2);
        assert_eq!(state.level, 3);
        assert_eq!(state.current_xp, 10);
        assert_eq!(state.xp_to_next_level, 450);
    }

    #[test]
    fn test_percent() {
        let mut state = XpState::default();
        state.add(50);
        assert_eq!(state.percent(), 25);
    }
}
