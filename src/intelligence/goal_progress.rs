// ABOUTME: Read-time goal progress derivation; percentages are never persisted
// ABOUTME: Weight goals measure travel from baseline toward target via the latest metric
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr

use crate::models::{Goal, GoalType, HealthMetric};

/// Derived progress toward a goal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    /// Percent toward the target, clamped to 0..=100
    pub percent: f64,
}

/// Compute progress toward a goal at read time.
///
/// Weight goals compare the latest recorded weight against the span between
/// the stored baseline (`current_value`) and the target; with no recorded
/// weight they report zero. All other goal types report attainment of the
/// stored progress value against the target. Computing here instead of
/// persisting a percentage keeps cached progress from going stale.
#[must_use]
pub fn goal_progress(goal: &Goal, latest: Option<&HealthMetric>) -> GoalProgress {
    let percent = match goal.goal_type {
        GoalType::Weight => weight_percent(goal, latest),
        _ => {
            if goal.target_value == 0.0 {
                0.0
            } else {
                (goal.current_value / goal.target_value) * 100.0
            }
        }
    };

    GoalProgress {
        percent: percent.clamp(0.0, 100.0),
    }
}

fn weight_percent(goal: &Goal, latest: Option<&HealthMetric>) -> f64 {
    let Some(current_weight) = latest.and_then(|m| m.weight) else {
        return 0.0;
    };

    let start = goal.current_value;
    let target = goal.target_value;
    if (start - target).abs() < f64::EPSILON {
        return 100.0;
    }

    let total_change = (target - start).abs();
    let current_change = (start - current_weight).abs();
    (current_change / total_change) * 100.0
}
