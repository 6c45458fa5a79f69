use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, AsRefStr, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GoalKind {
    #[default]
    Habit,
    Milestone,
    Project,
}

/// A long-running goal tracked as `current` steps out of `target`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub kind: GoalKind,
    #[serde(default)]
    pub current: u32,
    pub target: u32,
}

impl Goal {
    /// Completion percentage, clamped to 0–100.
    ///
    /// Always derived from `current` and `target`, never stored. A target
    /// of zero reports 0 rather than dividing.
    pub fn progress(&self) -> u8 {
        if self.target == 0 {
            return 0;
        }
        let pct = (self.current as u64 * 100) / self.target as u64;
        pct.min(100) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mk_goal(current: u32, target: u32) -> Goal {
        Goal {
            id: 1,
            title: "Read more".to_string(),
            kind: GoalKind::Habit,
            current,
            target,
        }
    }

    #[test]
    fn progress_is_derived_and_clamped() {
        assert_eq!(mk_goal(0, 10).progress(), 0);
        assert_eq!(mk_goal(3, 10).progress(), 30);
        assert_eq!(mk_goal(10, 10).progress(), 100);
        assert_eq!(mk_goal(25, 10).progress(), 100);
    }

    #[test]
    fn zero_target_reports_zero() {
        assert_eq!(mk_goal(5, 0).progress(), 0);
    }
}
