// ABOUTME: Shared test helpers for building metric histories and quiet logging
// ABOUTME: Provides record builders used across the integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr
#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::sync::Once;

use chrono::{Duration, Utc};
use healthtrackr::models::{HealthMetric, NewMetric};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_test_writer()
            .init();
    });
}

/// A stored metric with no readings, observed `days_ago` days back
pub fn metric(days_ago: i64) -> HealthMetric {
    HealthMetric {
        id: Uuid::new_v4().to_string(),
        user_id: "test-user".to_owned(),
        recorded_at: Utc::now() - Duration::days(days_ago),
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

/// An unsaved metric payload with no readings, observed `days_ago` days back
pub fn new_metric(days_ago: i64) -> NewMetric {
    NewMetric::at(Utc::now() - Duration::days(days_ago))
}
