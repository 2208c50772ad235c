// ABOUTME: Synthetic 30-day metric backfill for demo and bootstrap purposes
// ABOUTME: Base values plus bounded variance plus a small trend; seeds only empty stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::constants::sample_data::{BACKFILL_DAYS, SPIKE_AFTER_DAYS, SPIKE_MMHG};
use crate::errors::StorageResult;
use crate::models::{MetricSource, NewMetric};
use crate::storage::StorageBackend;

/// Generate a daily metric series counting back from now.
///
/// Each reading is a base value plus bounded random variance plus a small
/// linear trend term (weight drifts down across the window). Records older
/// than the spike cutoff get an elevated systolic pressure so the trend
/// detector always has something to find in demo data.
#[must_use]
pub fn generate_sample_metrics(days: u32) -> Vec<NewMetric> {
    generate_sample_metrics_with(days, &mut StdRng::from_entropy())
}

/// Deterministic variant for tests; pass a seeded generator
pub fn generate_sample_metrics_with(days: u32, rng: &mut impl Rng) -> Vec<NewMetric> {
    let now = Utc::now();
    (0..days)
        .map(|i| {
            let variance = (rng.gen::<f64>() - 0.5) * 10.0;
            let trend = f64::from(i) * 0.1;
            let spike = if i > SPIKE_AFTER_DAYS { SPIKE_MMHG } else { 0.0 };

            let mut metric = NewMetric::at(now - Duration::days(i64::from(i)));
            metric.systolic = Some((118.0 + variance + spike).round());
            metric.diastolic = Some((78.0 + variance * 0.5).round());
            metric.heart_rate = Some((72.0 + variance).round());
            metric.weight = Some((170.0 - trend + variance * 0.3).round());
            metric.blood_sugar = Some((95.0 + variance * 1.5).round());
            metric.sleep_hours = Some((7.5 + (rng.gen::<f64>() - 0.5) * 2.0).clamp(4.0, 10.0));
            metric.steps = Some((8500.0 + variance * 100.0).round());
            metric.source = Some(MetricSource::Manual);
            if i % 5 == 0 {
                metric.notes = Some("Feeling good today".to_owned());
            }
            metric
        })
        .collect()
}

/// Seed the 30-day backfill through the store, but only when the user has
/// no metrics yet. Returns the number of records written.
pub async fn seed_if_empty<S>(store: &S, user_id: &str) -> StorageResult<usize>
where
    S: StorageBackend + ?Sized,
{
    let existing = store.get_metrics(user_id).await?;
    if !existing.is_empty() {
        info!(user_id, count = existing.len(), "sample data already exists, skipping generation");
        return Ok(0);
    }

    info!(user_id, days = BACKFILL_DAYS, "generating sample data");
    let metrics = generate_sample_metrics(BACKFILL_DAYS);
    for metric in &metrics {
        store.save_metric(user_id, metric).await?;
    }
    info!(user_id, count = metrics.len(), "sample data generation complete");
    Ok(metrics.len())
}
