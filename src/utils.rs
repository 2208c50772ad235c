// ABOUTME: Small display helpers for metric values
// ABOUTME: Missing readings render as N/A rather than zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr

/// Format a metric reading for display: `N/A` for missing or non-finite
/// values, no decimals for whole numbers, one decimal otherwise.
#[must_use]
pub fn format_metric_number(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            if v.fract() == 0.0 {
                format!("{v:.0}")
            } else {
                format!("{v:.1}")
            }
        }
        _ => "N/A".to_owned(),
    }
}
