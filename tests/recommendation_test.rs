// ABOUTME: Integration tests for the rule-based recommendation engine
// ABOUTME: Covers the onboarding short-circuit, each lifestyle rule, and co-firing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use chrono::Utc;
use common::{init_test_logging, metric};
use healthtrackr::intelligence::generate_recommendations;
use healthtrackr::models::{Alert, AlertSeverity, HealthMetric, RecommendationPriority};

#[test]
fn empty_history_short_circuits_to_onboarding() {
    init_test_logging();
    let recs = generate_recommendations(&[], &[]);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].id, "rec-start");
    assert_eq!(recs[0].priority, RecommendationPriority::High);
}

#[test]
fn short_sleep_fires_high_priority_suggestion() {
    init_test_logging();
    let mut latest = metric(0);
    latest.sleep_hours = Some(6.5);

    let recs = generate_recommendations(&[latest], &[]);
    let sleep = recs.iter().find(|r| r.id == "rec-sleep").unwrap();
    assert_eq!(sleep.priority, RecommendationPriority::High);
    assert_eq!(sleep.category, "Sleep");
}

#[test]
fn sufficient_sleep_stays_quiet() {
    init_test_logging();
    let mut latest = metric(0);
    latest.sleep_hours = Some(7.5);

    let recs = generate_recommendations(&[latest], &[]);
    assert!(recs.iter().all(|r| r.id != "rec-sleep"));
}

#[test]
fn low_average_steps_suggest_more_activity() {
    init_test_logging();
    let history: Vec<HealthMetric> = (0..7)
        .map(|i| {
            let mut m = metric(i);
            m.steps = Some(5000.0);
            m
        })
        .collect();

    let recs = generate_recommendations(&history, &[]);
    let activity = recs.iter().find(|r| r.id == "rec-activity").unwrap();
    assert_eq!(activity.priority, RecommendationPriority::Medium);
}

#[test]
fn step_rule_averages_only_the_newest_week() {
    init_test_logging();
    // Newest week averages above the floor; a low older record must not
    // drag the rule into firing.
    let mut history: Vec<HealthMetric> = (0..7)
        .map(|i| {
            let mut m = metric(i);
            m.steps = Some(9000.0);
            m
        })
        .collect();
    let mut old = metric(10);
    old.steps = Some(100.0);
    history.push(old);

    let recs = generate_recommendations(&history, &[]);
    assert!(recs.iter().all(|r| r.id != "rec-activity"));
}

#[test]
fn weight_swing_beyond_limit_reports_magnitude() {
    init_test_logging();
    let mut history: Vec<HealthMetric> = (0..7).map(metric).collect();
    history[0].weight = Some(160.0);
    history[6].weight = Some(170.0);

    let recs = generate_recommendations(&history, &[]);
    let weight = recs.iter().find(|r| r.id == "rec-weight").unwrap();
    assert_eq!(weight.priority, RecommendationPriority::Medium);
    assert!(weight.description.contains("10.0 lb"));
}

#[test]
fn weight_swing_needs_a_full_week_of_history() {
    init_test_logging();
    let mut history: Vec<HealthMetric> = (0..6).map(metric).collect();
    history[0].weight = Some(160.0);
    history[5].weight = Some(170.0);

    let recs = generate_recommendations(&history, &[]);
    assert!(recs.iter().all(|r| r.id != "rec-weight"));
}

#[test]
fn small_weight_swing_stays_quiet() {
    init_test_logging();
    let mut history: Vec<HealthMetric> = (0..7).map(metric).collect();
    history[0].weight = Some(169.0);
    history[6].weight = Some(171.0);

    let recs = generate_recommendations(&history, &[]);
    assert!(recs.iter().all(|r| r.id != "rec-weight"));
}

#[test]
fn clean_bill_of_health_earns_the_affirmation() {
    init_test_logging();
    let mut latest = metric(0);
    latest.sleep_hours = Some(8.0);

    let recs = generate_recommendations(&[latest.clone()], &[]);
    assert!(recs.iter().any(|r| r.id == "rec-wellness"));

    let alert = Alert::new(
        "alert-hr",
        AlertSeverity::Warning,
        "Heart Rate",
        "m",
        Utc::now(),
    );
    let recs = generate_recommendations(&[latest], &[alert]);
    assert!(recs.iter().all(|r| r.id != "rec-wellness"));
}

#[test]
fn independent_rules_co_fire() {
    init_test_logging();
    let mut history: Vec<HealthMetric> = (0..7)
        .map(|i| {
            let mut m = metric(i);
            m.steps = Some(4000.0);
            m
        })
        .collect();
    history[0].sleep_hours = Some(6.0);
    history[0].weight = Some(158.0);
    history[6].weight = Some(170.0);

    let recs = generate_recommendations(&history, &[]);
    let ids: Vec<&str> = recs.iter().map(|r| r.id.as_str()).collect();
    assert!(ids.contains(&"rec-sleep"));
    assert!(ids.contains(&"rec-activity"));
    assert!(ids.contains(&"rec-weight"));
    assert!(ids.contains(&"rec-wellness"));
}
