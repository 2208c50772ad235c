// ABOUTME: Integration tests for the synthetic backfill and empty-store seeding
// ABOUTME: Seeds a real local backend and re-reads the result through the trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{init_test_logging, new_metric};
use healthtrackr::models::MetricSource;
use healthtrackr::sample_data::seed_if_empty;
use healthtrackr::storage::{LocalBackend, StorageBackend};
use tempfile::TempDir;

#[tokio::test]
async fn seeding_an_empty_store_writes_the_full_backfill() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let store = LocalBackend::new(dir.path());

    let seeded = seed_if_empty(&store, "demo-user").await.unwrap();
    assert_eq!(seeded, 30);

    let metrics = store.get_metrics("demo-user").await.unwrap();
    assert_eq!(metrics.len(), 30);
    assert!(metrics.windows(2).all(|w| w[0].recorded_at >= w[1].recorded_at));
    assert!(metrics.iter().all(|m| m.source == Some(MetricSource::Manual)));
    assert!(metrics.iter().all(|m| m.systolic.is_some() && m.steps.is_some()));
}

#[tokio::test]
async fn seeding_is_skipped_when_metrics_exist() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let store = LocalBackend::new(dir.path());
    store.save_metric("demo-user", &new_metric(0)).await.unwrap();

    let seeded = seed_if_empty(&store, "demo-user").await.unwrap();
    assert_eq!(seeded, 0);
    assert_eq!(store.get_metrics("demo-user").await.unwrap().len(), 1);
}

#[tokio::test]
async fn seeding_is_scoped_per_user() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let store = LocalBackend::new(dir.path());
    store.save_metric("alice", &new_metric(0)).await.unwrap();

    let seeded = seed_if_empty(&store, "bob").await.unwrap();
    assert_eq!(seeded, 30);
    assert_eq!(store.get_metrics("alice").await.unwrap().len(), 1);
    assert_eq!(store.get_metrics("bob").await.unwrap().len(), 30);
}
