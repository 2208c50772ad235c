// ABOUTME: Local-persistence backend storing flat JSON arrays under fixed keys
// ABOUTME: Malformed or missing content reads as empty; timestamps are ISO-8601 strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use super::StorageBackend;
use crate::constants::storage_keys;
use crate::errors::{StorageError, StorageResult};
use crate::models::{
    Goal, GoalPatch, GoalStatus, GoalType, HealthMetric, MetricSource, NewGoal, NewMetric,
    UserProfile,
};

/// File-backed fallback store.
///
/// Layout mirrors a browser local-storage namespace: one flat array of all
/// users' metrics, one shared goals array filtered by embedded user id, and
/// one profile document per user keyed by the profile key plus a user-id
/// suffix. Timestamps are serialized as RFC 3339 strings. Writes are
/// last-writer-wins with no locking.
pub struct LocalBackend {
    dir: PathBuf,
}

impl LocalBackend {
    /// Backend rooted at the given storage directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn metrics_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", storage_keys::METRICS))
    }

    fn profile_path(&self, user_id: &str) -> PathBuf {
        self.dir
            .join(format!("{}_{user_id}.json", storage_keys::PROFILE))
    }

    fn goals_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", storage_keys::GOALS))
    }

    /// Read a JSON array of loosely-shaped entries. Missing files, unreadable
    /// files, and content that is not a JSON array all read as empty.
    async fn read_entries(path: &Path) -> Vec<Value> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "local storage file not readable, treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_slice::<Vec<Value>>(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "local storage content malformed, treating as empty");
                Vec::new()
            }
        }
    }

    async fn write_json<T: Serialize>(path: &Path, value: &T) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StorageError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
        let bytes = serde_json::to_vec(value).map_err(|source| StorageError::Serialization {
            context: "local storage write",
            source,
        })?;
        tokio::fs::write(path, bytes)
            .await
            .map_err(|source| StorageError::Io {
                path: path.to_path_buf(),
                source,
            })
    }

    fn local_id(prefix: &str) -> String {
        format!("{prefix}-{}", Uuid::new_v4().simple())
    }
}

/// Parse one array entry, skipping entries that do not fit the record shape
fn decode_entry<T: DeserializeOwned>(value: &Value) -> Option<T> {
    serde_json::from_value(value.clone()).ok()
}

/// RFC 3339 parse that never fails; unparseable timestamps sort to the epoch
fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

#[derive(Debug, Serialize, Deserialize)]
struct LocalMetricRecord {
    id: String,
    user_id: String,
    recorded_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    systolic: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    diastolic: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    heart_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    blood_sugar: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sleep_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    steps: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    water_intake: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exercise_minutes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    calories: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mood: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<MetricSource>,
}

impl LocalMetricRecord {
    fn from_new(id: String, user_id: &str, metric: &NewMetric) -> Self {
        Self {
            id,
            user_id: user_id.to_owned(),
            recorded_at: metric.recorded_at.to_rfc3339(),
            systolic: metric.systolic,
            diastolic: metric.diastolic,
            heart_rate: metric.heart_rate,
            weight: metric.weight,
            blood_sugar: metric.blood_sugar,
            sleep_hours: metric.sleep_hours,
            steps: metric.steps,
            water_intake: metric.water_intake,
            exercise_minutes: metric.exercise_minutes,
            calories: metric.calories,
            mood: metric.mood,
            notes: metric.notes.clone(),
            source: metric.source,
        }
    }

    fn into_metric(self) -> HealthMetric {
        HealthMetric {
            id: self.id,
            user_id: self.user_id,
            recorded_at: parse_timestamp(&self.recorded_at),
            systolic: self.systolic,
            diastolic: self.diastolic,
            heart_rate: self.heart_rate,
            weight: self.weight,
            blood_sugar: self.blood_sugar,
            sleep_hours: self.sleep_hours,
            steps: self.steps,
            water_intake: self.water_intake,
            exercise_minutes: self.exercise_minutes,
            calories: self.calories,
            mood: self.mood,
            notes: self.notes,
            source: self.source,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct LocalGoalRecord {
    id: String,
    user_id: String,
    goal_type: GoalType,
    target_value: f64,
    current_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deadline: Option<String>,
    created_at: String,
    status: GoalStatus,
}

impl LocalGoalRecord {
    fn into_goal(self) -> Goal {
        Goal {
            id: self.id,
            user_id: self.user_id,
            goal_type: self.goal_type,
            target_value: self.target_value,
            current_value: self.current_value,
            deadline: self.deadline.as_deref().map(parse_timestamp),
            created_at: parse_timestamp(&self.created_at),
            status: self.status,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct LocalProfileRecord {
    user_id: String,
    #[serde(flatten)]
    profile: UserProfile,
}

#[async_trait]
impl StorageBackend for LocalBackend {
    fn backend_name(&self) -> &'static str {
        "local"
    }

    async fn save_metric(&self, user_id: &str, metric: &NewMetric) -> StorageResult<HealthMetric> {
        let path = self.metrics_path();
        let mut entries = Self::read_entries(&path).await;
        let record = LocalMetricRecord::from_new(Self::local_id("local"), user_id, metric);
        let stored = serde_json::to_value(&record).map_err(|source| StorageError::Serialization {
            context: "local metric record",
            source,
        })?;
        entries.push(stored);
        Self::write_json(&path, &entries).await?;
        Ok(record.into_metric())
    }

    async fn get_metrics(&self, user_id: &str) -> StorageResult<Vec<HealthMetric>> {
        let entries = Self::read_entries(&self.metrics_path()).await;
        let mut metrics: Vec<HealthMetric> = entries
            .iter()
            .filter_map(decode_entry::<LocalMetricRecord>)
            .filter(|record| record.user_id == user_id)
            .map(LocalMetricRecord::into_metric)
            .collect();
        metrics.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(metrics)
    }

    async fn delete_metric(&self, user_id: &str, id: &str) -> StorageResult<()> {
        let path = self.metrics_path();
        let entries = Self::read_entries(&path).await;
        let remaining: Vec<Value> = entries
            .into_iter()
            .filter(|entry| {
                decode_entry::<LocalMetricRecord>(entry)
                    .is_none_or(|record| !(record.user_id == user_id && record.id == id))
            })
            .collect();
        Self::write_json(&path, &remaining).await
    }

    async fn save_profile(&self, user_id: &str, profile: &UserProfile) -> StorageResult<()> {
        let path = self.profile_path(user_id);
        let mut merged = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<LocalProfileRecord>(&bytes)
                .map(|record| record.profile)
                .unwrap_or_default(),
            Err(_) => UserProfile::default(),
        };
        merged.merge(profile);
        let record = LocalProfileRecord {
            user_id: user_id.to_owned(),
            profile: merged,
        };
        Self::write_json(&path, &record).await
    }

    async fn get_profile(&self, user_id: &str) -> StorageResult<Option<UserProfile>> {
        let path = self.profile_path(user_id);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(_) => return Ok(None),
        };
        Ok(serde_json::from_slice::<LocalProfileRecord>(&bytes)
            .map(|record| record.profile)
            .ok())
    }

    async fn save_goal(&self, user_id: &str, goal: &NewGoal) -> StorageResult<Goal> {
        let path = self.goals_path();
        let mut entries = Self::read_entries(&path).await;
        let record = LocalGoalRecord {
            id: Self::local_id("local-goal"),
            user_id: user_id.to_owned(),
            goal_type: goal.goal_type,
            target_value: goal.target_value,
            current_value: goal.current_value,
            deadline: goal.deadline.map(|dt| dt.to_rfc3339()),
            created_at: Utc::now().to_rfc3339(),
            status: goal.status,
        };
        let stored = serde_json::to_value(&record).map_err(|source| StorageError::Serialization {
            context: "local goal record",
            source,
        })?;
        entries.push(stored);
        Self::write_json(&path, &entries).await?;
        Ok(record.into_goal())
    }

    async fn get_goals(&self, user_id: &str) -> StorageResult<Vec<Goal>> {
        let entries = Self::read_entries(&self.goals_path()).await;
        Ok(entries
            .iter()
            .filter_map(decode_entry::<LocalGoalRecord>)
            .filter(|record| record.user_id == user_id)
            .map(LocalGoalRecord::into_goal)
            .collect())
    }

    async fn update_goal(&self, user_id: &str, id: &str, patch: &GoalPatch) -> StorageResult<()> {
        let path = self.goals_path();
        let mut entries = Self::read_entries(&path).await;
        for entry in &mut entries {
            let Some(mut record) = decode_entry::<LocalGoalRecord>(entry) else {
                continue;
            };
            if !(record.user_id == user_id && record.id == id) {
                continue;
            }
            if let Some(target_value) = patch.target_value {
                record.target_value = target_value;
            }
            if let Some(current_value) = patch.current_value {
                record.current_value = current_value;
            }
            if let Some(deadline) = patch.deadline {
                record.deadline = Some(deadline.to_rfc3339());
            }
            if let Some(status) = patch.status {
                record.status = status;
            }
            *entry = serde_json::to_value(&record).map_err(|source| {
                StorageError::Serialization {
                    context: "local goal record",
                    source,
                }
            })?;
            break;
        }
        Self::write_json(&path, &entries).await
    }

    async fn delete_goal(&self, user_id: &str, id: &str) -> StorageResult<()> {
        let path = self.goals_path();
        let entries = Self::read_entries(&path).await;
        let remaining: Vec<Value> = entries
            .into_iter()
            .filter(|entry| {
                decode_entry::<LocalGoalRecord>(entry)
                    .is_none_or(|record| !(record.user_id == user_id && record.id == id))
            })
            .collect();
        Self::write_json(&path, &remaining).await
    }
}
