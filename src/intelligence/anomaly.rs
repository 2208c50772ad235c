// ABOUTME: Threshold and trend anomaly detection over the metric history
// ABOUTME: Pure function of a most-recent-first metric list; emits transient alerts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr

use tracing::trace;

use super::mean_of;
use crate::constants::reference_ranges::{BLOOD_SUGAR, DIASTOLIC, HEART_RATE, SYSTOLIC};
use crate::constants::trend;
use crate::models::{Alert, AlertSeverity, HealthMetric};

/// Scan the metric history for anomalies.
///
/// Threshold checks evaluate only the single most recent record against the
/// static reference ranges; trend detection compares the mean systolic
/// pressure of the newest seven records against the seven before them.
/// Expects `metrics` sorted most-recent-first, as the stores return it.
#[must_use]
pub fn detect_anomalies(metrics: &[HealthMetric]) -> Vec<Alert> {
    let mut alerts = Vec::new();

    let Some(latest) = metrics.first() else {
        return alerts;
    };

    check_blood_pressure(latest, &mut alerts);
    check_heart_rate(latest, &mut alerts);
    check_blood_sugar(latest, &mut alerts);
    check_blood_pressure_trend(metrics, &mut alerts);

    trace!(count = alerts.len(), "anomaly evaluation pass complete");
    alerts
}

/// Blood pressure needs both readings. The three branches are mutually
/// exclusive, so one evaluation pass produces at most one BP alert.
fn check_blood_pressure(latest: &HealthMetric, alerts: &mut Vec<Alert>) {
    let (Some(systolic), Some(diastolic)) = (latest.systolic, latest.diastolic) else {
        return;
    };

    if systolic > SYSTOLIC.critical_max || diastolic > DIASTOLIC.critical_max {
        alerts.push(Alert::new(
            "alert-bp",
            AlertSeverity::Critical,
            "Blood Pressure",
            format!(
                "Critical: Blood pressure {systolic:.0}/{diastolic:.0} mmHg is dangerously high. Seek medical attention."
            ),
            latest.recorded_at,
        ));
    } else if systolic > SYSTOLIC.max || diastolic > DIASTOLIC.max {
        alerts.push(Alert::new(
            "alert-bp",
            AlertSeverity::Warning,
            "Blood Pressure",
            format!(
                "Warning: Blood pressure {systolic:.0}/{diastolic:.0} mmHg is elevated. Consider consulting your doctor."
            ),
            latest.recorded_at,
        ));
    } else if systolic < SYSTOLIC.critical_min || diastolic < DIASTOLIC.critical_min {
        alerts.push(Alert::new(
            "alert-bp-low",
            AlertSeverity::Critical,
            "Blood Pressure",
            format!(
                "Critical: Blood pressure {systolic:.0}/{diastolic:.0} mmHg is dangerously low. Seek medical attention."
            ),
            latest.recorded_at,
        ));
    }
}

fn check_heart_rate(latest: &HealthMetric, alerts: &mut Vec<Alert>) {
    let Some(hr) = latest.heart_rate else {
        return;
    };

    if hr > HEART_RATE.critical_max || hr < HEART_RATE.critical_min {
        alerts.push(Alert::new(
            "alert-hr",
            AlertSeverity::Critical,
            "Heart Rate",
            format!("Critical: Heart rate {hr:.0} bpm is outside safe range. Seek medical attention."),
            latest.recorded_at,
        ));
    } else if hr > HEART_RATE.max || hr < HEART_RATE.min {
        alerts.push(Alert::new(
            "alert-hr",
            AlertSeverity::Warning,
            "Heart Rate",
            format!("Warning: Heart rate {hr:.0} bpm is unusual. Monitor closely."),
            latest.recorded_at,
        ));
    }
}

fn check_blood_sugar(latest: &HealthMetric, alerts: &mut Vec<Alert>) {
    let Some(bs) = latest.blood_sugar else {
        return;
    };

    if bs > BLOOD_SUGAR.critical_max || bs < BLOOD_SUGAR.critical_min {
        alerts.push(Alert::new(
            "alert-bs",
            AlertSeverity::Critical,
            "Blood Sugar",
            format!("Critical: Blood sugar {bs:.0} mg/dL is at dangerous levels. Take immediate action."),
            latest.recorded_at,
        ));
    } else if bs > BLOOD_SUGAR.max {
        alerts.push(Alert::new(
            "alert-bs",
            AlertSeverity::Warning,
            "Blood Sugar",
            format!("Warning: Blood sugar {bs:.0} mg/dL is elevated. Check your diet and medication."),
            latest.recorded_at,
        ));
    } else if bs < BLOOD_SUGAR.min {
        alerts.push(Alert::new(
            "alert-bs",
            AlertSeverity::Warning,
            "Blood Sugar",
            format!("Warning: Blood sugar {bs:.0} mg/dL is low. Consider eating something."),
            latest.recorded_at,
        ));
    }
}

/// Compare the newest window's mean systolic pressure against the window
/// before it. Records missing the reading are ignored; a window with no
/// usable values suppresses the check entirely.
fn check_blood_pressure_trend(metrics: &[HealthMetric], alerts: &mut Vec<Alert>) {
    if metrics.len() <= trend::WINDOW {
        return;
    }

    let recent = &metrics[..trend::WINDOW];
    let previous = &metrics[trend::WINDOW..metrics.len().min(trend::WINDOW * 2)];

    let recent_avg = mean_of(recent, |m| m.systolic);
    let previous_avg = mean_of(previous, |m| m.systolic);

    if let (Some(recent_avg), Some(previous_avg)) = (recent_avg, previous_avg) {
        if (recent_avg - previous_avg).abs() > trend::SYSTOLIC_SHIFT_THRESHOLD {
            // Trend alerts are stamped with detection time, not an
            // observation time.
            alerts.push(Alert::new(
                "alert-trend-bp",
                AlertSeverity::Info,
                "Blood Pressure Trend",
                "Notice: Significant change in blood pressure trend detected over the past week.",
                chrono::Utc::now(),
            ));
        }
    }
}
