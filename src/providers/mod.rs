// ABOUTME: Mock wearable-provider integration layer with fixed sample feeds
// ABOUTME: Fetches return hand-authored 7-day payloads after a short artificial delay
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr

//! Wearable-provider sample feeds and CSV export.
//!
//! There is no real device integration: each provider exposes a fixed
//! seven-day payload with plausible hand-authored values and provenance
//! tags, returned after an artificial latency to mimic a network fetch.

use std::time::Duration;

use crate::constants::sample_data::FETCH_DELAY_MS;
use crate::models::NewMetric;

pub mod csv;
mod samples;

pub use csv::wearable_metrics_to_csv;

/// The three mock wearable providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WearableProvider {
    /// Google Fit sample feed
    GoogleFit,
    /// Fitbit sample feed
    Fitbit,
    /// Apple Health sample feed
    AppleHealth,
}

impl WearableProvider {
    /// Stable slug matching the provenance tag on imported records
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::GoogleFit => "google-fit",
            Self::Fitbit => "fitbit",
            Self::AppleHealth => "apple-health",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GoogleFit => "Google Fit",
            Self::Fitbit => "Fitbit",
            Self::AppleHealth => "Apple Health",
        }
    }
}

/// Fetch the provider's fixed seven-day payload.
///
/// Dates are pinned relative to now so the newest entry is always today.
/// The artificial delay mimics network latency; this path has no
/// randomness and cannot fail.
pub async fn fetch_sample_data(provider: WearableProvider) -> Vec<NewMetric> {
    tokio::time::sleep(Duration::from_millis(FETCH_DELAY_MS)).await;
    samples::payload(provider, chrono::Utc::now())
}

/// Aggregate view over one wearable payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WearableSummary {
    /// Sum of step counts across the payload
    pub total_steps: f64,
    /// Mean sleep hours, counting missing entries as zero
    pub avg_sleep: f64,
    /// Mean weight, counting missing entries as zero
    pub avg_weight: f64,
}

/// Summarize a wearable payload. Averages divide by the full payload
/// length with missing readings contributing zero, matching the dashboard
/// summary cards. Empty input summarizes to all zeroes.
#[must_use]
pub fn summarize_wearable_data(metrics: &[NewMetric]) -> WearableSummary {
    if metrics.is_empty() {
        return WearableSummary {
            total_steps: 0.0,
            avg_sleep: 0.0,
            avg_weight: 0.0,
        };
    }

    let len = metrics.len() as f64;
    let total_steps: f64 = metrics.iter().filter_map(|m| m.steps).sum();
    let avg_sleep = metrics.iter().filter_map(|m| m.sleep_hours).sum::<f64>() / len;
    let avg_weight = metrics.iter().filter_map(|m| m.weight).sum::<f64>() / len;

    WearableSummary {
        total_steps,
        avg_sleep: round_tenth(avg_sleep),
        avg_weight: round_tenth(avg_weight),
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
