// ABOUTME: Fixed 14-column CSV serialization for wearable payloads
// ABOUTME: Values containing commas, quotes, or newlines are quoted with doubled quotes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr

use crate::models::NewMetric;

const HEADERS: [&str; 14] = [
    "Date",
    "Source",
    "Steps",
    "Sleep (hrs)",
    "Weight (lbs)",
    "Heart Rate (bpm)",
    "Systolic",
    "Diastolic",
    "Blood Sugar",
    "Exercise (mins)",
    "Calories",
    "Water Intake (oz)",
    "Mood",
    "Notes",
];

/// Serialize a wearable payload to CSV.
///
/// Column set and order are fixed; unset fields serialize as empty cells.
/// Dates are RFC 3339.
#[must_use]
pub fn wearable_metrics_to_csv(metrics: &[NewMetric]) -> String {
    let mut lines = Vec::with_capacity(metrics.len() + 1);
    lines.push(HEADERS.join(","));

    for metric in metrics {
        let cells: [String; 14] = [
            escape_field(&metric.recorded_at.to_rfc3339()),
            escape_field(metric.source.map(|s| s.as_str()).unwrap_or_default()),
            number_field(metric.steps),
            number_field(metric.sleep_hours),
            number_field(metric.weight),
            number_field(metric.heart_rate),
            number_field(metric.systolic),
            number_field(metric.diastolic),
            number_field(metric.blood_sugar),
            number_field(metric.exercise_minutes),
            number_field(metric.calories),
            number_field(metric.water_intake),
            number_field(metric.mood),
            escape_field(metric.notes.as_deref().unwrap_or_default()),
        ];
        lines.push(cells.join(","));
    }

    lines.join("\n")
}

fn number_field(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Quote a field per the standard CSV grammar when it contains a comma,
/// quote, or newline; internal quotes are doubled.
fn escape_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn plain_values_are_not_quoted() {
        assert_eq!(escape_field("Morning run"), "Morning run");
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        assert_eq!(
            escape_field("a \"quoted\", note"),
            "\"a \"\"quoted\"\", note\""
        );
    }

    #[test]
    fn header_row_has_fourteen_columns() {
        let csv = wearable_metrics_to_csv(&[]);
        assert_eq!(csv.split(',').count(), 14);
    }

    #[test]
    fn unset_fields_serialize_as_empty_cells() {
        let metric = crate::models::NewMetric::at(Utc::now());
        let csv = wearable_metrics_to_csv(&[metric]);
        let row = csv.lines().nth(1).unwrap_or_default();
        // Date is set; the 12 reading cells and notes are empty.
        assert!(row.ends_with(",,,,,,,,,,,,"));
    }
}
