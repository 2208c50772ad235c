// ABOUTME: Decorator that retries a single operation against a fallback backend
// ABOUTME: Only the classified permission-denied error triggers the switch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr

use async_trait::async_trait;
use tracing::warn;

use super::StorageBackend;
use crate::errors::StorageResult;
use crate::models::{Goal, GoalPatch, HealthMetric, NewGoal, NewMetric, UserProfile};

/// Tries every operation against the primary backend first and serves the
/// same single operation from the fallback backend when the primary fails
/// with a permission denial.
///
/// This is a silent backend switch, not a cache: nothing is written back to
/// the primary and the two backends are never reconciled. Any error other
/// than a permission denial propagates unchanged.
pub struct FallbackStore<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackStore<P, F> {
    /// Wrap a primary and a fallback backend
    pub const fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

macro_rules! with_fallback {
    ($self:ident, $op:ident ( $($arg:expr),* )) => {
        match $self.primary.$op($($arg),*).await {
            Err(err) if err.is_permission_denied() => {
                warn!(
                    primary = $self.primary.backend_name(),
                    fallback = $self.fallback.backend_name(),
                    operation = stringify!($op),
                    error = %err,
                    "primary backend denied permission, serving operation from fallback"
                );
                $self.fallback.$op($($arg),*).await
            }
            result => result,
        }
    };
}

#[async_trait]
impl<P, F> StorageBackend for FallbackStore<P, F>
where
    P: StorageBackend,
    F: StorageBackend,
{
    fn backend_name(&self) -> &'static str {
        "fallback"
    }

    async fn save_metric(&self, user_id: &str, metric: &NewMetric) -> StorageResult<HealthMetric> {
        with_fallback!(self, save_metric(user_id, metric))
    }

    async fn get_metrics(&self, user_id: &str) -> StorageResult<Vec<HealthMetric>> {
        with_fallback!(self, get_metrics(user_id))
    }

    async fn delete_metric(&self, user_id: &str, id: &str) -> StorageResult<()> {
        with_fallback!(self, delete_metric(user_id, id))
    }

    async fn save_profile(&self, user_id: &str, profile: &UserProfile) -> StorageResult<()> {
        with_fallback!(self, save_profile(user_id, profile))
    }

    async fn get_profile(&self, user_id: &str) -> StorageResult<Option<UserProfile>> {
        with_fallback!(self, get_profile(user_id))
    }

    async fn save_goal(&self, user_id: &str, goal: &NewGoal) -> StorageResult<Goal> {
        with_fallback!(self, save_goal(user_id, goal))
    }

    async fn get_goals(&self, user_id: &str) -> StorageResult<Vec<Goal>> {
        with_fallback!(self, get_goals(user_id))
    }

    async fn update_goal(&self, user_id: &str, id: &str, patch: &GoalPatch) -> StorageResult<()> {
        with_fallback!(self, update_goal(user_id, id, patch))
    }

    async fn delete_goal(&self, user_id: &str, id: &str) -> StorageResult<()> {
        with_fallback!(self, delete_goal(user_id, id))
    }
}
