// ABOUTME: Analytics engine producing transient alerts, recommendations, and goal progress
// ABOUTME: Everything in here is a pure function of the metric history; nothing is cached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr

//! Anomaly detection and recommendation synthesis.
//!
//! Alerts and recommendations are derived entities: they are recomputed on
//! every evaluation pass so the output always reflects the latest metrics,
//! and they are never persisted.

pub mod anomaly;
pub mod goal_progress;
pub mod recommendations;

pub use anomaly::detect_anomalies;
pub use goal_progress::{goal_progress, GoalProgress};
pub use recommendations::generate_recommendations;

use crate::models::HealthMetric;

/// Mean of one reading across a window, ignoring records missing the field.
/// `None` when no record in the window carries the reading.
pub(crate) fn mean_of(
    metrics: &[HealthMetric],
    reading: impl Fn(&HealthMetric) -> Option<f64>,
) -> Option<f64> {
    let values: Vec<f64> = metrics.iter().filter_map(reading).collect();
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
