// ABOUTME: Integration tests for the mock wearable feeds and payload summaries
// ABOUTME: Uses paused tokio time so the artificial fetch delay costs nothing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use chrono::{Duration, Utc};
use common::{init_test_logging, new_metric};
use healthtrackr::models::MetricSource;
use healthtrackr::providers::{
    fetch_sample_data, summarize_wearable_data, WearableProvider,
};

#[tokio::test(start_paused = true)]
async fn each_provider_returns_a_tagged_seven_day_payload() {
    init_test_logging();
    for (provider, source) in [
        (WearableProvider::GoogleFit, MetricSource::GoogleFit),
        (WearableProvider::Fitbit, MetricSource::Fitbit),
        (WearableProvider::AppleHealth, MetricSource::AppleHealth),
    ] {
        let payload = fetch_sample_data(provider).await;
        assert_eq!(payload.len(), 7);
        assert!(payload.iter().all(|m| m.source == Some(source)));
        assert!(payload.iter().all(|m| m.steps.is_some() && m.sleep_hours.is_some()));
    }
}

#[tokio::test(start_paused = true)]
async fn payload_dates_are_pinned_to_the_last_week() {
    init_test_logging();
    let payload = fetch_sample_data(WearableProvider::GoogleFit).await;
    let now = Utc::now();

    let newest = payload.last().unwrap();
    assert!(now - newest.recorded_at < Duration::hours(1));
    let oldest = payload.first().unwrap();
    assert!(now - oldest.recorded_at >= Duration::days(6));
    assert!(now - oldest.recorded_at < Duration::days(7));
}

#[tokio::test(start_paused = true)]
async fn fetches_are_deterministic() {
    init_test_logging();
    let first = fetch_sample_data(WearableProvider::Fitbit).await;
    let second = fetch_sample_data(WearableProvider::Fitbit).await;

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.steps, b.steps);
        assert_eq!(a.weight, b.weight);
        assert_eq!(a.notes, b.notes);
    }
}

#[tokio::test(start_paused = true)]
async fn summary_totals_and_rounded_averages() {
    init_test_logging();
    let payload = fetch_sample_data(WearableProvider::GoogleFit).await;
    let summary = summarize_wearable_data(&payload);

    assert!((summary.total_steps - 73358.0).abs() < f64::EPSILON);
    assert!((summary.avg_sleep - 7.1).abs() < f64::EPSILON);
    assert!((summary.avg_weight - 168.8).abs() < f64::EPSILON);
}

#[test]
fn summary_of_empty_payload_is_all_zeroes() {
    init_test_logging();
    let summary = summarize_wearable_data(&[]);
    assert!(summary.total_steps.abs() < f64::EPSILON);
    assert!(summary.avg_sleep.abs() < f64::EPSILON);
    assert!(summary.avg_weight.abs() < f64::EPSILON);
}

#[test]
fn missing_readings_count_as_zero_in_averages() {
    init_test_logging();
    let mut with_sleep = new_metric(0);
    with_sleep.sleep_hours = Some(8.0);
    let without_sleep = new_metric(1);

    let summary = summarize_wearable_data(&[with_sleep, without_sleep]);
    assert!((summary.avg_sleep - 4.0).abs() < f64::EPSILON);
}
