// ABOUTME: Remote document-store backend speaking JSON over HTTP per-user collections
// ABOUTME: Wire shapes strip unset fields on write and decode defensively on read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Response, StatusCode};
use tracing::debug;
use url::Url;

use super::StorageBackend;
use crate::errors::{StorageError, StorageResult};
use crate::models::{Goal, GoalPatch, HealthMetric, NewGoal, NewMetric, UserProfile};

/// Client for the remote document store.
///
/// The store keeps per-user hierarchical collections (`users/{id}/metrics`,
/// a singleton `users/{id}/profile` document, `users/{id}/goals`). Writes
/// must omit unset optional fields entirely; the store rejects documents
/// carrying undefined-like placeholders but accepts explicit `null`.
/// Timestamps travel as a structured `{seconds, nanos}` time point.
///
/// A permission denial (HTTP 403, or an error body carrying the
/// `PERMISSION_DENIED` code) maps to [`StorageError::PermissionDenied`];
/// every other failure maps to its own variant and propagates.
pub struct RemoteBackend {
    client: reqwest::Client,
    base: String,
    auth_token: Option<String>,
}

impl RemoteBackend {
    /// Client against the given service base URL, optionally sending a
    /// bearer token minted by the external identity provider
    #[must_use]
    pub fn new(base_url: &Url, auth_token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base_url.as_str().trim_end_matches('/').to_owned(),
            auth_token,
        }
    }

    fn collection_url(&self, user_id: &str, collection: &str) -> String {
        format!("{}/v1/users/{user_id}/{collection}", self.base)
    }

    fn document_url(&self, user_id: &str, collection: &str, id: &str) -> String {
        format!("{}/v1/users/{user_id}/{collection}/{id}", self.base)
    }

    fn profile_url(&self, user_id: &str) -> String {
        format!("{}/v1/users/{user_id}/profile", self.base)
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(
        &self,
        builder: reqwest::RequestBuilder,
        context: &'static str,
    ) -> StorageResult<Response> {
        let response = self
            .request(builder)
            .send()
            .await
            .map_err(|source| StorageError::Transport { context, source })?;
        ensure_success(response, context).await
    }
}

/// Classify a non-success response. Permission denial is detected from the
/// status code or from the error-code substring in the body, mirroring the
/// document store's two reporting styles.
async fn ensure_success(response: Response, context: &'static str) -> StorageResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    if status == StatusCode::FORBIDDEN
        || message.contains("PERMISSION_DENIED")
        || message.contains("Missing or insufficient permissions")
    {
        debug!(context, status = status.as_u16(), "remote backend denied permission");
        return Err(StorageError::PermissionDenied {
            backend: "remote",
            context: if message.is_empty() {
                format!("HTTP {status}")
            } else {
                message
            },
        });
    }
    Err(StorageError::Remote {
        context,
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl StorageBackend for RemoteBackend {
    fn backend_name(&self) -> &'static str {
        "remote"
    }

    async fn save_metric(&self, user_id: &str, metric: &NewMetric) -> StorageResult<HealthMetric> {
        let context = "metric save";
        let doc = wire::MetricDoc::from_new(user_id, metric);
        let response = self
            .send(
                self.client
                    .post(self.collection_url(user_id, "metrics"))
                    .json(&doc),
                context,
            )
            .await?;
        let created: wire::Created = response
            .json()
            .await
            .map_err(|source| StorageError::Transport { context, source })?;
        Ok(doc.into_metric(created.id))
    }

    async fn get_metrics(&self, user_id: &str) -> StorageResult<Vec<HealthMetric>> {
        let context = "metric list";
        let response = self
            .send(self.client.get(self.collection_url(user_id, "metrics")), context)
            .await?;
        let list: wire::DocumentList<wire::MetricDoc> = response
            .json()
            .await
            .map_err(|source| StorageError::Transport { context, source })?;
        let mut metrics: Vec<HealthMetric> = list
            .documents
            .into_iter()
            .map(|doc| doc.body.into_metric(doc.id))
            .collect();
        metrics.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(metrics)
    }

    async fn delete_metric(&self, user_id: &str, id: &str) -> StorageResult<()> {
        let context = "metric delete";
        let response = self
            .request(self.client.delete(self.document_url(user_id, "metrics", id)))
            .send()
            .await
            .map_err(|source| StorageError::Transport { context, source })?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }
        ensure_success(response, context).await.map(|_| ())
    }

    async fn save_profile(&self, user_id: &str, profile: &UserProfile) -> StorageResult<()> {
        let context = "profile save";
        // The store merges patched documents server-side; unset fields are
        // stripped so they never clobber stored values.
        let doc = wire::ProfileDoc::from_profile(user_id, profile);
        self.send(
            self.client.patch(self.profile_url(user_id)).json(&doc),
            context,
        )
        .await
        .map(|_| ())
    }

    async fn get_profile(&self, user_id: &str) -> StorageResult<Option<UserProfile>> {
        let context = "profile get";
        let response = self
            .request(self.client.get(self.profile_url(user_id)))
            .send()
            .await
            .map_err(|source| StorageError::Transport { context, source })?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = ensure_success(response, context).await?;
        let doc: wire::ProfileDoc = response
            .json()
            .await
            .map_err(|source| StorageError::Transport { context, source })?;
        Ok(Some(doc.into_profile()))
    }

    async fn save_goal(&self, user_id: &str, goal: &NewGoal) -> StorageResult<Goal> {
        let context = "goal save";
        let doc = wire::GoalDoc::from_new(user_id, goal, Utc::now());
        let response = self
            .send(
                self.client
                    .post(self.collection_url(user_id, "goals"))
                    .json(&doc),
                context,
            )
            .await?;
        let created: wire::Created = response
            .json()
            .await
            .map_err(|source| StorageError::Transport { context, source })?;
        doc.into_goal(created.id)
            .ok_or_else(|| StorageError::Remote {
                context,
                status: 200,
                message: "stored goal echo lost its type".to_owned(),
            })
    }

    async fn get_goals(&self, user_id: &str) -> StorageResult<Vec<Goal>> {
        let context = "goal list";
        let response = self
            .send(self.client.get(self.collection_url(user_id, "goals")), context)
            .await?;
        let list: wire::DocumentList<wire::GoalDoc> = response
            .json()
            .await
            .map_err(|source| StorageError::Transport { context, source })?;
        Ok(list
            .documents
            .into_iter()
            .filter_map(|doc| doc.body.into_goal(doc.id))
            .collect())
    }

    async fn update_goal(&self, user_id: &str, id: &str, patch: &GoalPatch) -> StorageResult<()> {
        let context = "goal update";
        let doc = wire::GoalPatchDoc::from_patch(patch);
        self.send(
            self.client
                .patch(self.document_url(user_id, "goals", id))
                .json(&doc),
            context,
        )
        .await
        .map(|_| ())
    }

    async fn delete_goal(&self, user_id: &str, id: &str) -> StorageResult<()> {
        let context = "goal delete";
        let response = self
            .request(self.client.delete(self.document_url(user_id, "goals", id)))
            .send()
            .await
            .map_err(|source| StorageError::Transport { context, source })?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }
        ensure_success(response, context).await.map(|_| ())
    }
}

/// Wire shapes for the remote document store.
///
/// Serialization strips unset fields (`skip_serializing_if`); the store
/// rejects undefined-like values but accepts `null`. Deserialization is
/// total and defensive: missing, `null`, and differently-typed values all
/// decode to `None` rather than failing the document.
pub(crate) mod wire {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer, Serialize};
    use serde_json::Value;

    use crate::models::{
        Gender, Goal, GoalPatch, GoalStatus, GoalType, HealthMetric, MetricSource, NewGoal,
        NewMetric, UserProfile,
    };

    /// Structured time point used by the remote store
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TimePoint {
        /// Seconds since the Unix epoch
        pub seconds: i64,
        /// Subsecond nanoseconds
        pub nanos: u32,
    }

    impl From<DateTime<Utc>> for TimePoint {
        fn from(dt: DateTime<Utc>) -> Self {
            Self {
                seconds: dt.timestamp(),
                nanos: dt.timestamp_subsec_nanos(),
            }
        }
    }

    impl TimePoint {
        /// Convert back to the canonical in-memory type; out-of-range
        /// values collapse to the epoch instead of failing the record
        pub fn to_datetime(self) -> DateTime<Utc> {
            Utc.timestamp_opt(self.seconds, self.nanos)
                .single()
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        }
    }

    /// Decode a value of any shape; anything that does not fit `T` reads
    /// as `None`
    fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(serde_json::from_value(value).ok())
    }

    /// Decode a numeric field, accepting numbers and numeric strings
    fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    /// Id assigned by the store on document creation
    #[derive(Debug, Deserialize)]
    pub struct Created {
        pub id: String,
    }

    /// One document with its store-assigned id
    #[derive(Debug, Deserialize)]
    pub struct Document<T> {
        pub id: String,
        #[serde(flatten)]
        pub body: T,
    }

    /// Collection listing
    #[derive(Debug, Deserialize)]
    pub struct DocumentList<T> {
        #[serde(default = "Vec::new")]
        pub documents: Vec<Document<T>>,
    }

    /// Metric document as stored remotely
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct MetricDoc {
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
        pub user_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
        pub recorded_at: Option<TimePoint>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_f64")]
        pub systolic: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_f64")]
        pub diastolic: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_f64")]
        pub heart_rate: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_f64")]
        pub weight: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_f64")]
        pub blood_sugar: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_f64")]
        pub sleep_hours: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_f64")]
        pub steps: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_f64")]
        pub water_intake: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_f64")]
        pub exercise_minutes: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_f64")]
        pub calories: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_f64")]
        pub mood: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
        pub notes: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
        pub source: Option<MetricSource>,
    }

    impl MetricDoc {
        pub fn from_new(user_id: &str, metric: &NewMetric) -> Self {
            Self {
                user_id: Some(user_id.to_owned()),
                recorded_at: Some(metric.recorded_at.into()),
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

        pub fn into_metric(self, id: String) -> HealthMetric {
            HealthMetric {
                id,
                user_id: self.user_id.unwrap_or_default(),
                recorded_at: self
                    .recorded_at
                    .map_or(DateTime::<Utc>::UNIX_EPOCH, TimePoint::to_datetime),
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

    /// Goal document as stored remotely
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct GoalDoc {
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
        pub user_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
        pub goal_type: Option<GoalType>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_f64")]
        pub target_value: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_f64")]
        pub current_value: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
        pub deadline: Option<TimePoint>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
        pub created_at: Option<TimePoint>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
        pub status: Option<GoalStatus>,
    }

    impl GoalDoc {
        pub fn from_new(user_id: &str, goal: &NewGoal, created_at: DateTime<Utc>) -> Self {
            Self {
                user_id: Some(user_id.to_owned()),
                goal_type: Some(goal.goal_type),
                target_value: Some(goal.target_value),
                current_value: Some(goal.current_value),
                deadline: goal.deadline.map(TimePoint::from),
                created_at: Some(created_at.into()),
                status: Some(goal.status),
            }
        }

        /// Documents that lost their goal type are unusable and are
        /// skipped on reads
        pub fn into_goal(self, id: String) -> Option<Goal> {
            Some(Goal {
                id,
                user_id: self.user_id.unwrap_or_default(),
                goal_type: self.goal_type?,
                target_value: self.target_value.unwrap_or(0.0),
                current_value: self.current_value.unwrap_or(0.0),
                deadline: self.deadline.map(TimePoint::to_datetime),
                created_at: self
                    .created_at
                    .map_or(DateTime::<Utc>::UNIX_EPOCH, TimePoint::to_datetime),
                status: self.status.unwrap_or(GoalStatus::Active),
            })
        }
    }

    /// Partial goal update; unset fields are stripped so the store leaves
    /// them untouched
    #[derive(Debug, Serialize)]
    pub struct GoalPatchDoc {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub target_value: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub current_value: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub deadline: Option<TimePoint>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub status: Option<GoalStatus>,
    }

    impl GoalPatchDoc {
        pub fn from_patch(patch: &GoalPatch) -> Self {
            Self {
                target_value: patch.target_value,
                current_value: patch.current_value,
                deadline: patch.deadline.map(TimePoint::from),
                status: patch.status,
            }
        }
    }

    /// Profile document as stored remotely
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ProfileDoc {
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
        pub user_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_f64")]
        pub height: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_f64")]
        pub current_weight: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_f64")]
        pub target_weight: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
        pub age: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
        pub gender: Option<Gender>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
        pub activity_level: Option<crate::models::ActivityLevel>,
        #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
        pub medical_conditions: Option<Vec<String>>,
    }

    impl ProfileDoc {
        pub fn from_profile(user_id: &str, profile: &UserProfile) -> Self {
            Self {
                user_id: Some(user_id.to_owned()),
                height: profile.height,
                current_weight: profile.current_weight,
                target_weight: profile.target_weight,
                age: profile.age,
                gender: profile.gender,
                activity_level: profile.activity_level,
                medical_conditions: profile.medical_conditions.clone(),
            }
        }

        pub fn into_profile(self) -> UserProfile {
            UserProfile {
                height: self.height,
                current_weight: self.current_weight,
                target_weight: self.target_weight,
                age: self.age,
                gender: self.gender,
                activity_level: self.activity_level,
                medical_conditions: self.medical_conditions,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::wire::{MetricDoc, TimePoint};
    use crate::models::{MetricSource, NewMetric};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn unset_fields_are_stripped_from_writes() {
        let recorded = Utc.with_ymd_and_hms(2025, 6, 1, 8, 30, 0).unwrap();
        let mut metric = NewMetric::at(recorded);
        metric.heart_rate = Some(72.0);
        let doc = MetricDoc::from_new("user-1", &metric);
        let value = serde_json::to_value(&doc).unwrap();
        let object = value.as_object().unwrap();

        assert!(object.contains_key("heart_rate"));
        assert!(object.contains_key("recorded_at"));
        // No null placeholders for readings that were never taken.
        assert!(!object.contains_key("systolic"));
        assert!(!object.contains_key("notes"));
    }

    #[test]
    fn reads_tolerate_null_missing_and_mistyped_fields() {
        let doc: MetricDoc = serde_json::from_value(json!({
            "user_id": "user-1",
            "recorded_at": { "seconds": 1_748_766_600, "nanos": 0 },
            "systolic": null,
            "heart_rate": "72.5",
            "weight": { "unexpected": "shape" },
            "steps": 10452
        }))
        .unwrap();
        let metric = doc.into_metric("doc-1".to_owned());

        assert_eq!(metric.systolic, None);
        assert_eq!(metric.heart_rate, Some(72.5));
        assert_eq!(metric.weight, None);
        assert_eq!(metric.steps, Some(10452.0));
        assert_eq!(metric.sleep_hours, None);
    }

    #[test]
    fn time_point_round_trips_to_the_second() {
        let recorded = Utc.with_ymd_and_hms(2025, 2, 14, 23, 59, 59).unwrap();
        let point = TimePoint::from(recorded);
        assert_eq!(point.to_datetime(), recorded);
    }

    #[test]
    fn save_echo_preserves_fields_and_source() {
        let recorded = Utc.with_ymd_and_hms(2025, 6, 1, 8, 30, 0).unwrap();
        let mut metric = NewMetric::at(recorded);
        metric.weight = Some(168.2);
        metric.source = Some(MetricSource::Fitbit);
        let stored = MetricDoc::from_new("user-1", &metric).into_metric("doc-9".to_owned());

        assert_eq!(stored.id, "doc-9");
        assert_eq!(stored.user_id, "user-1");
        assert_eq!(stored.recorded_at, recorded);
        assert_eq!(stored.weight, Some(168.2));
        assert_eq!(stored.source, Some(MetricSource::Fitbit));
        assert_eq!(stored.blood_sugar, None);
    }
}
