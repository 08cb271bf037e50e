//! Search configuration.

use serde::{Deserialize, Serialize};

/// Group restriction on pairings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupRule {
    /// Groups are ignored.
    #[default]
    Any,
    /// Only teams of different groups meet.
    InterOnly,
    /// Only teams of the same group meet.
    IntraOnly,
}

/// Placement of the synthesized sibling-vs-sibling week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SisterWeek {
    /// Before the searched weeks.
    First,
    /// After the searched weeks.
    #[default]
    Last,
    /// Natural orientation first, reversed orientation last.
    Both,
    /// Omitted.
    None,
}

impl SisterWeek {
    /// Whether any sister week is produced.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, SisterWeek::None)
    }
}

/// Termination policy of the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverMode {
    /// Stop at the first complete schedule.
    #[default]
    FirstSolution,
    /// Keep searching for schedules with strictly fewer history duplicates.
    BestScore,
}

/// Solver options.
///
/// # Example
///
/// ```
/// use u_robin::solver::{SisterWeek, SolverConfig};
///
/// let config = SolverConfig::default()
///     .with_seed(7)
///     .with_repeat_visitors(true)
///     .with_sister_week(SisterWeek::First);
/// assert!(!config.randomize);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Shuffle candidates before trying them.
    pub randomize: bool,
    /// Random seed; drawn once per solver when absent.
    pub seed: Option<u64>,
    /// Let a venue host the same opponent more than once.
    pub allow_repeat_visitors: bool,
    /// Group restriction.
    pub group_rule: GroupRule,
    /// Maximum number of history duplicates; `None` is unbounded.
    pub duplicate_threshold: Option<usize>,
    /// Sister week placement.
    pub sister_week: SisterWeek,
    /// Termination policy.
    pub mode: SolverMode,
}

impl SolverConfig {
    pub fn with_randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_repeat_visitors(mut self, allow: bool) -> Self {
        self.allow_repeat_visitors = allow;
        self
    }

    pub fn with_group_rule(mut self, rule: GroupRule) -> Self {
        self.group_rule = rule;
        self
    }

    pub fn with_duplicate_threshold(mut self, threshold: usize) -> Self {
        self.duplicate_threshold = Some(threshold);
        self
    }

    pub fn with_sister_week(mut self, placement: SisterWeek) -> Self {
        self.sister_week = placement;
        self
    }

    pub fn with_mode(mut self, mode: SolverMode) -> Self {
        self.mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SolverConfig::default();
        assert_eq!(c.sister_week, SisterWeek::Last);
        assert_eq!(c.mode, SolverMode::FirstSolution);
        assert_eq!(c.group_rule, GroupRule::Any);
        assert_eq!(c.duplicate_threshold, None);
        assert!(!SisterWeek::None.is_enabled());
        assert!(SisterWeek::Both.is_enabled());
    }

    #[test]
    fn test_deserialize_partial() {
        let c: SolverConfig =
            serde_json::from_str(r#"{"sister_week":"both","group_rule":"inter_only"}"#).unwrap();
        assert_eq!(c.sister_week, SisterWeek::Both);
        assert_eq!(c.group_rule, GroupRule::InterOnly);
        assert!(!c.allow_repeat_visitors);
    }
}
