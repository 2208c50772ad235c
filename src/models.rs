// ABOUTME: Core domain models for health metrics, alerts, recommendations, goals, and profiles
// ABOUTME: All reading fields are independently optional; records carry any subset of them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Origin of a metric record: manual entry or one of the wearable providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricSource {
    /// Entered by the user through a form
    Manual,
    /// Imported from the Google Fit sample feed
    GoogleFit,
    /// Imported from the Fitbit sample feed
    Fitbit,
    /// Imported from the Apple Health sample feed
    AppleHealth,
}

impl MetricSource {
    /// Stable slug used in persisted records and CSV export
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::GoogleFit => "google-fit",
            Self::Fitbit => "fitbit",
            Self::AppleHealth => "apple-health",
        }
    }
}

/// One observation snapshot for a user at a point in time.
///
/// Every reading is independently optional; a record may carry any subset of
/// fields, including none. Records are created on submission or import and
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetric {
    /// Backend-assigned opaque identifier
    pub id: String,
    /// Owning user, supplied by the external identity provider
    pub user_id: String,
    /// When the observation was taken
    pub recorded_at: DateTime<Utc>,
    /// Systolic blood pressure (mmHg)
    pub systolic: Option<f64>,
    /// Diastolic blood pressure (mmHg)
    pub diastolic: Option<f64>,
    /// Resting heart rate (bpm)
    pub heart_rate: Option<f64>,
    /// Body weight (lbs)
    pub weight: Option<f64>,
    /// Blood sugar (mg/dL)
    pub blood_sugar: Option<f64>,
    /// Sleep duration (hours)
    pub sleep_hours: Option<f64>,
    /// Step count
    pub steps: Option<f64>,
    /// Water intake (oz)
    pub water_intake: Option<f64>,
    /// Exercise duration (minutes)
    pub exercise_minutes: Option<f64>,
    /// Calories consumed
    pub calories: Option<f64>,
    /// Self-reported mood score
    pub mood: Option<f64>,
    /// Free-text notes
    pub notes: Option<String>,
    /// Provenance tag
    pub source: Option<MetricSource>,
}

/// Metric payload submitted by callers; id and owner are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMetric {
    /// When the observation was taken
    pub recorded_at: DateTime<Utc>,
    /// Systolic blood pressure (mmHg)
    pub systolic: Option<f64>,
    /// Diastolic blood pressure (mmHg)
    pub diastolic: Option<f64>,
    /// Resting heart rate (bpm)
    pub heart_rate: Option<f64>,
    /// Body weight (lbs)
    pub weight: Option<f64>,
    /// Blood sugar (mg/dL)
    pub blood_sugar: Option<f64>,
    /// Sleep duration (hours)
    pub sleep_hours: Option<f64>,
    /// Step count
    pub steps: Option<f64>,
    /// Water intake (oz)
    pub water_intake: Option<f64>,
    /// Exercise duration (minutes)
    pub exercise_minutes: Option<f64>,
    /// Calories consumed
    pub calories: Option<f64>,
    /// Self-reported mood score
    pub mood: Option<f64>,
    /// Free-text notes
    pub notes: Option<String>,
    /// Provenance tag
    pub source: Option<MetricSource>,
}

impl NewMetric {
    /// Empty payload at the given observation time
    #[must_use]
    pub const fn at(recorded_at: DateTime<Utc>) -> Self {
        Self {
            recorded_at,
            systolic: None,
            diastolic: None,
            heart_rate: None,
            weight: None,
            blood_sugar: None,
            sleep_hours: None,
            steps: None,
            water_intake: None,
            exercise_minutes: None,
            calories: None,
            mood: None,
            notes: None,
            source: None,
        }
    }
}

/// Severity class of a detected anomaly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Reading outside the critical band; needs attention now
    Critical,
    /// Reading outside the normal band
    Warning,
    /// Informational notice (trend shifts)
    Info,
}

/// A detected anomaly. Created transiently on each evaluation pass and never
/// persisted; client-side dismissal does not suppress re-detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Unique identifier (category prefix plus random suffix)
    pub id: String,
    /// Severity class
    pub severity: AlertSeverity,
    /// Human-readable name of the metric concerned
    pub metric: String,
    /// Human-readable message
    pub message: String,
    /// Timestamp of the triggering observation, or detection time for trends
    pub recorded_at: DateTime<Utc>,
    /// Read/dismissed flag, managed client-side
    pub read: bool,
}

impl Alert {
    /// Build an alert with a collision-free id under the given category prefix
    #[must_use]
    pub fn new(
        prefix: &str,
        severity: AlertSeverity,
        metric: impl Into<String>,
        message: impl Into<String>,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: format!("{prefix}-{}", Uuid::new_v4().simple()),
            severity,
            metric: metric.into(),
            message: message.into(),
            recorded_at,
            read: false,
        }
    }
}

/// Priority of a suggested action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPriority {
    /// Act on this first
    High,
    /// Worth addressing soon
    Medium,
    /// Nice to have
    Low,
}

/// A rule-generated actionable suggestion. Regenerated transiently on each
/// evaluation pass and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Stable per-rule identifier
    pub id: String,
    /// Category label shown in the UI
    pub category: String,
    /// Short title
    pub title: String,
    /// Longer description
    pub description: String,
    /// Priority class
    pub priority: RecommendationPriority,
}

/// The metric a goal targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalType {
    /// Body weight target
    Weight,
    /// Daily step target
    Steps,
    /// Sleep duration target
    Sleep,
    /// Exercise minutes target
    Exercise,
    /// Water intake target
    Water,
    /// Systolic blood pressure target
    BloodPressure,
    /// Blood sugar target
    BloodSugar,
}

/// Goal lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    /// Being worked toward
    Active,
    /// Target reached
    Completed,
    /// No longer pursued
    Abandoned,
}

/// A user-defined target. Progress toward the target is derived at read time
/// (see [`crate::intelligence::goal_progress`]) and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Backend-assigned opaque identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// The metric this goal targets
    pub goal_type: GoalType,
    /// Target numeric value
    pub target_value: f64,
    /// Baseline or latest recorded progress value
    pub current_value: f64,
    /// Optional deadline
    pub deadline: Option<DateTime<Utc>>,
    /// Creation timestamp, assigned by the store
    pub created_at: DateTime<Utc>,
    /// Lifecycle state
    pub status: GoalStatus,
}

/// Goal payload submitted by callers; id, owner, and creation time are
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGoal {
    /// The metric this goal targets
    pub goal_type: GoalType,
    /// Target numeric value
    pub target_value: f64,
    /// Baseline value at goal creation
    pub current_value: f64,
    /// Optional deadline
    pub deadline: Option<DateTime<Utc>>,
    /// Initial lifecycle state
    pub status: GoalStatus,
}

/// Partial-field update for a goal; unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalPatch {
    /// New target value
    pub target_value: Option<f64>,
    /// New progress value
    pub current_value: Option<f64>,
    /// New deadline
    pub deadline: Option<DateTime<Utc>>,
    /// New lifecycle state
    pub status: Option<GoalStatus>,
}

/// Self-reported gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Habitual activity level used as a physiological baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

/// Physiological baseline for a user. One per user, created during
/// onboarding and updated via merge-write: unset fields never overwrite
/// previously stored values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Height (cm)
    pub height: Option<f64>,
    /// Current body weight (lbs)
    pub current_weight: Option<f64>,
    /// Target body weight (lbs)
    pub target_weight: Option<f64>,
    /// Age in years
    pub age: Option<u32>,
    /// Self-reported gender
    pub gender: Option<Gender>,
    /// Habitual activity level
    pub activity_level: Option<ActivityLevel>,
    /// Known medical conditions
    pub medical_conditions: Option<Vec<String>>,
}

impl UserProfile {
    /// Merge another profile into this one; fields set on `other` win.
    pub fn merge(&mut self, other: &Self) {
        if other.height.is_some() {
            self.height = other.height;
        }
        if other.current_weight.is_some() {
            self.current_weight = other.current_weight;
        }
        if other.target_weight.is_some() {
            self.target_weight = other.target_weight;
        }
        if other.age.is_some() {
            self.age = other.age;
        }
        if other.gender.is_some() {
            self.gender = other.gender;
        }
        if other.activity_level.is_some() {
            self.activity_level = other.activity_level;
        }
        if other.medical_conditions.is_some() {
            self.medical_conditions.clone_from(&other.medical_conditions);
        }
    }
}
