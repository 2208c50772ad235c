// ABOUTME: Integration tests for the remote-to-local fallback decorator
// ABOUTME: Uses stub remote backends to drive permission denials and hard failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use async_trait::async_trait;
use common::{init_test_logging, new_metric};
use healthtrackr::errors::{StorageError, StorageResult};
use healthtrackr::models::{
    Goal, GoalPatch, GoalStatus, GoalType, HealthMetric, NewGoal, NewMetric, UserProfile,
};
use healthtrackr::storage::{FallbackStore, LocalBackend, StorageBackend};
use tempfile::TempDir;

/// Stub remote backend that refuses every operation the same way
struct StubRemote {
    error: fn() -> StorageError,
}

impl StubRemote {
    fn permission_denied() -> Self {
        Self {
            error: || StorageError::PermissionDenied {
                backend: "remote",
                context: "Missing or insufficient permissions.".to_owned(),
            },
        }
    }

    fn server_error() -> Self {
        Self {
            error: || StorageError::Remote {
                context: "stub operation",
                status: 500,
                message: "internal error".to_owned(),
            },
        }
    }
}

#[async_trait]
impl StorageBackend for StubRemote {
    fn backend_name(&self) -> &'static str {
        "remote"
    }

    async fn save_metric(&self, _: &str, _: &NewMetric) -> StorageResult<HealthMetric> {
        Err((self.error)())
    }

    async fn get_metrics(&self, _: &str) -> StorageResult<Vec<HealthMetric>> {
        Err((self.error)())
    }

    async fn delete_metric(&self, _: &str, _: &str) -> StorageResult<()> {
        Err((self.error)())
    }

    async fn save_profile(&self, _: &str, _: &UserProfile) -> StorageResult<()> {
        Err((self.error)())
    }

    async fn get_profile(&self, _: &str) -> StorageResult<Option<UserProfile>> {
        Err((self.error)())
    }

    async fn save_goal(&self, _: &str, _: &NewGoal) -> StorageResult<Goal> {
        Err((self.error)())
    }

    async fn get_goals(&self, _: &str) -> StorageResult<Vec<Goal>> {
        Err((self.error)())
    }

    async fn update_goal(&self, _: &str, _: &str, _: &GoalPatch) -> StorageResult<()> {
        Err((self.error)())
    }

    async fn delete_goal(&self, _: &str, _: &str) -> StorageResult<()> {
        Err((self.error)())
    }
}

fn denied_store(dir: &TempDir) -> FallbackStore<StubRemote, LocalBackend> {
    FallbackStore::new(
        StubRemote::permission_denied(),
        LocalBackend::new(dir.path()),
    )
}

#[tokio::test]
async fn permission_denial_falls_back_to_local_writes() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let store = denied_store(&dir);

    let mut payload = new_metric(0);
    payload.heart_rate = Some(64.0);
    let saved = store.save_metric("alice", &payload).await.unwrap();
    assert!(saved.id.starts_with("local-"));

    // The write is durable through the local backend alone.
    let direct = LocalBackend::new(dir.path());
    let metrics = direct.get_metrics("alice").await.unwrap();
    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics[0].heart_rate, Some(64.0));
}

#[tokio::test]
async fn permission_denial_falls_back_on_reads_too() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let direct = LocalBackend::new(dir.path());
    direct.save_metric("alice", &new_metric(0)).await.unwrap();

    let store = denied_store(&dir);
    assert_eq!(store.get_metrics("alice").await.unwrap().len(), 1);
    assert!(store.get_profile("alice").await.unwrap().is_none());
    assert!(store.get_goals("alice").await.unwrap().is_empty());
}

#[tokio::test]
async fn goal_operations_fall_back_as_a_unit() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let store = denied_store(&dir);

    let saved = store
        .save_goal(
            "alice",
            &NewGoal {
                goal_type: GoalType::Sleep,
                target_value: 8.0,
                current_value: 6.5,
                deadline: None,
                status: GoalStatus::Active,
            },
        )
        .await
        .unwrap();

    store
        .update_goal(
            "alice",
            &saved.id,
            &GoalPatch {
                current_value: Some(7.0),
                ..GoalPatch::default()
            },
        )
        .await
        .unwrap();

    let goals = store.get_goals("alice").await.unwrap();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].current_value, 7.0);
}

#[tokio::test]
async fn other_remote_errors_propagate_unchanged() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let store = FallbackStore::new(StubRemote::server_error(), LocalBackend::new(dir.path()));

    let err = store.save_metric("alice", &new_metric(0)).await.unwrap_err();
    match err {
        StorageError::Remote { status, .. } => assert_eq!(status, 500),
        other => panic!("expected remote error, got {other:?}"),
    }

    // Nothing must have reached the local backend.
    let direct = LocalBackend::new(dir.path());
    assert!(direct.get_metrics("alice").await.unwrap().is_empty());
}
