//! Goal progress state (rendering-agnostic)
//!
//! Holds the clamped fill fraction and display strings for one goal so the
//! renderer only lays things out.

use super::format::format_number;
use crate::data::Goal;

#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub name: String,
    /// Fill fraction (0.0 to 1.0)
    pub fraction: f64,
    /// `current unit / target unit`
    pub value_label: String,
    /// `NN.N%`
    pub percent_label: String,
    pub achieved: bool,
}

/// Fill fraction capped at 1
///
/// A target of zero or less reads as complete once anything is achieved.
pub fn goal_fraction(current: f64, target: f64) -> f64 {
    if target <= 0.0 || !target.is_finite() {
        return if current > 0.0 { 1.0 } else { 0.0 };
    }
    let fraction = current / target;
    if fraction.is_nan() {
        return 0.0;
    }
    fraction.clamp(0.0, 1.0)
}

impl GoalProgress {
    pub fn from_goal(goal: &Goal) -> Self {
        let fraction = goal_fraction(goal.current, goal.target);
        Self {
            name: goal.name.clone(),
            fraction,
            value_label: format!(
                "{}{} / {}{}",
                format_number(goal.current),
                goal.unit,
                format_number(goal.target),
                goal.unit
            ),
            percent_label: format!("{:.1}%", fraction * 100.0),
            achieved: fraction >= 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_caps_at_one() {
        assert_eq!(goal_fraction(75.0, 100.0), 0.75);
        assert_eq!(goal_fraction(150.0, 100.0), 1.0);
        assert_eq!(goal_fraction(-5.0, 100.0), 0.0);
    }

    #[test]
    fn test_degenerate_targets() {
        assert_eq!(goal_fraction(3.0, 0.0), 1.0);
        assert_eq!(goal_fraction(0.0, 0.0), 0.0);
        assert_eq!(goal_fraction(1.0, -10.0), 1.0);
    }

    #[test]
    fn test_labels() {
        let progress = GoalProgress::from_goal(&Goal::new("User Growth", 1247.0, 2000.0, " users"));
        assert_eq!(progress.value_label, "1,247 users / 2,000 users");
        assert!(!progress.achieved);

        let progress = GoalProgress::from_goal(&Goal::new("Monthly Target", 75.0, 100.0, "%"));
        assert_eq!(progress.value_label, "75% / 100%");
        assert_eq!(progress.percent_label, "75.0%");
    }

    #[test]
    fn test_achieved_at_full() {
        let progress = GoalProgress::from_goal(&Goal::new("Sales", 100.0, 100.0, "%"));
        assert!(progress.achieved);
        assert_eq!(progress.percent_label, "100.0%");
    }
}
