// ABOUTME: Integration tests for read-time goal progress derivation
// ABOUTME: Covers the weight-goal baseline formula, clamping, and degenerate targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use chrono::Utc;
use common::{init_test_logging, metric};
use healthtrackr::intelligence::goal_progress;
use healthtrackr::models::{Goal, GoalStatus, GoalType};

fn goal(goal_type: GoalType, current_value: f64, target_value: f64) -> Goal {
    Goal {
        id: "goal-1".to_owned(),
        user_id: "test-user".to_owned(),
        goal_type,
        target_value,
        current_value,
        deadline: None,
        created_at: Utc::now(),
        status: GoalStatus::Active,
    }
}

#[test]
fn weight_goal_measures_travel_from_baseline() {
    init_test_logging();
    let mut latest = metric(0);
    latest.weight = Some(175.0);

    let goal = goal(GoalType::Weight, 180.0, 170.0);
    let progress = goal_progress(&goal, Some(&latest));
    assert!((progress.percent - 50.0).abs() < f64::EPSILON);
}

#[test]
fn weight_goal_without_a_recorded_weight_is_zero() {
    init_test_logging();
    let goal = goal(GoalType::Weight, 180.0, 170.0);
    assert!(goal_progress(&goal, Some(&metric(0))).percent.abs() < f64::EPSILON);
    assert!(goal_progress(&goal, None).percent.abs() < f64::EPSILON);
}

#[test]
fn weight_goal_already_at_target_is_complete() {
    init_test_logging();
    let mut latest = metric(0);
    latest.weight = Some(182.0);

    let goal = goal(GoalType::Weight, 170.0, 170.0);
    assert!((goal_progress(&goal, Some(&latest)).percent - 100.0).abs() < f64::EPSILON);
}

#[test]
fn weight_goal_overshoot_clamps_to_one_hundred() {
    init_test_logging();
    let mut latest = metric(0);
    latest.weight = Some(165.0);

    let goal = goal(GoalType::Weight, 180.0, 170.0);
    assert!((goal_progress(&goal, Some(&latest)).percent - 100.0).abs() < f64::EPSILON);
}

#[test]
fn other_goal_types_report_stored_attainment() {
    init_test_logging();
    let goal = goal(GoalType::Steps, 4000.0, 8000.0);
    let progress = goal_progress(&goal, None);
    assert!((progress.percent - 50.0).abs() < f64::EPSILON);
}

#[test]
fn zero_target_reports_zero_rather_than_dividing() {
    init_test_logging();
    let goal = goal(GoalType::Water, 40.0, 0.0);
    assert!(goal_progress(&goal, None).percent.abs() < f64::EPSILON);
}

#[test]
fn attainment_beyond_target_clamps() {
    init_test_logging();
    let goal = goal(GoalType::Sleep, 9.0, 8.0);
    assert!((goal_progress(&goal, None).percent - 100.0).abs() < f64::EPSILON);
}
