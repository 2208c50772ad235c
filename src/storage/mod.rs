// ABOUTME: Storage abstraction layer with remote and local backend implementations
// ABOUTME: Backend selection is transparent to callers via the fallback decorator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr

//! Dual-backend persistence for metrics, profiles, and goals.
//!
//! Every entity is scoped by an opaque user id supplied by an external
//! identity provider. [`FallbackStore`] wraps a remote backend and a local
//! backend and switches to the local one only when the remote call fails
//! with a classified permission denial; the two backends are never
//! reconciled or synced afterward.

use async_trait::async_trait;

use crate::errors::StorageResult;
use crate::models::{Goal, GoalPatch, HealthMetric, NewGoal, NewMetric, UserProfile};

pub mod fallback;
pub mod local;
pub mod remote;

pub use fallback::FallbackStore;
pub use local::LocalBackend;
pub use remote::RemoteBackend;

/// Core storage abstraction trait.
///
/// All backends implement this trait so the application layer can treat
/// remote, local, and decorated stores uniformly. Deletes and patches are
/// last-writer-wins with no optimistic-concurrency check; no operation
/// defines its own retry, cancellation, or timeout.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Short backend name used in logs
    fn backend_name(&self) -> &'static str;

    /// Persist a metric for the user and return the stored record with its
    /// backend-assigned id
    async fn save_metric(&self, user_id: &str, metric: &NewMetric) -> StorageResult<HealthMetric>;

    /// All metrics for the user, descending by observation timestamp
    async fn get_metrics(&self, user_id: &str) -> StorageResult<Vec<HealthMetric>>;

    /// Delete one metric by id; deleting a missing id is a no-op
    async fn delete_metric(&self, user_id: &str, id: &str) -> StorageResult<()>;

    /// Merge-write the user's singleton profile document
    async fn save_profile(&self, user_id: &str, profile: &UserProfile) -> StorageResult<()>;

    /// The user's profile, if one has been stored
    async fn get_profile(&self, user_id: &str) -> StorageResult<Option<UserProfile>>;

    /// Persist a goal for the user and return the stored record
    async fn save_goal(&self, user_id: &str, goal: &NewGoal) -> StorageResult<Goal>;

    /// All goals for the user
    async fn get_goals(&self, user_id: &str) -> StorageResult<Vec<Goal>>;

    /// Apply a partial-field patch to one goal; patching a missing id is a
    /// no-op
    async fn update_goal(&self, user_id: &str, id: &str, patch: &GoalPatch) -> StorageResult<()>;

    /// Delete one goal by id; deleting a missing id is a no-op
    async fn delete_goal(&self, user_id: &str, id: &str) -> StorageResult<()>;
}
