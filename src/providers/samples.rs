// ABOUTME: Hand-authored seven-day sample payloads for the three mock providers
// ABOUTME: Values are fixed and plausible; only the dates move with the clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr

use chrono::{DateTime, Duration, Utc};

use super::WearableProvider;
use crate::models::{MetricSource, NewMetric};

struct SampleDay {
    days_ago: i64,
    steps: f64,
    sleep: f64,
    weight: f64,
    heart_rate: f64,
    systolic: f64,
    diastolic: f64,
    exercise: f64,
    calories: f64,
    notes: Option<&'static str>,
}

const fn day(
    days_ago: i64,
    steps: f64,
    sleep: f64,
    weight: f64,
    heart_rate: f64,
    systolic: f64,
    diastolic: f64,
    exercise: f64,
    calories: f64,
    notes: Option<&'static str>,
) -> SampleDay {
    SampleDay {
        days_ago,
        steps,
        sleep,
        weight,
        heart_rate,
        systolic,
        diastolic,
        exercise,
        calories,
        notes,
    }
}

const GOOGLE_FIT: [SampleDay; 7] = [
    day(6, 10452.0, 7.1, 169.3, 68.0, 118.0, 76.0, 45.0, 2150.0, Some("Morning run with interval training.")),
    day(5, 9820.0, 6.8, 169.1, 70.0, 120.0, 78.0, 35.0, 2050.0, Some("Strength training and yoga cooldown.")),
    day(4, 12340.0, 7.6, 168.8, 65.0, 117.0, 75.0, 50.0, 2250.0, Some("Cycling commute and evening walk.")),
    day(3, 8734.0, 6.2, 168.9, 71.0, 121.0, 79.0, 25.0, 1980.0, None),
    day(2, 11012.0, 7.8, 168.6, 66.0, 116.0, 74.0, 40.0, 2105.0, Some("Long hike day with hills.")),
    day(1, 9520.0, 6.9, 168.5, 69.0, 119.0, 77.0, 30.0, 2020.0, None),
    day(0, 11480.0, 7.4, 168.2, 67.0, 118.0, 76.0, 55.0, 2200.0, Some("Tempo run with stretching routine.")),
];

const FITBIT: [SampleDay; 7] = [
    day(6, 12780.0, 7.4, 172.1, 64.0, 116.0, 73.0, 60.0, 2350.0, Some("Morning HIIT session and lunchtime walk.")),
    day(5, 11892.0, 6.5, 172.0, 66.0, 118.0, 74.0, 35.0, 2210.0, Some("Office day with evening spin class.")),
    day(4, 14234.0, 7.9, 171.6, 63.0, 115.0, 72.0, 70.0, 2450.0, Some("Long trail run with elevation gains.")),
    day(3, 10112.0, 6.1, 171.8, 67.0, 119.0, 75.0, 25.0, 2080.0, None),
    day(2, 13405.0, 7.2, 171.2, 65.0, 117.0, 73.0, 55.0, 2285.0, Some("Rowing workout and yoga recovery.")),
    day(1, 9634.0, 6.8, 171.0, 68.0, 120.0, 76.0, 30.0, 2140.0, None),
    day(0, 13988.0, 7.6, 170.9, 62.0, 114.0, 71.0, 65.0, 2380.0, Some("Brick workout ahead of triathlon prep.")),
];

const APPLE_HEALTH: [SampleDay; 7] = [
    day(6, 9804.0, 7.9, 158.4, 59.0, 112.0, 70.0, 40.0, 1980.0, Some("Guided meditation and light jog.")),
    day(5, 10221.0, 8.1, 158.3, 58.0, 111.0, 69.0, 50.0, 2055.0, Some("Pilates session and evening walk.")),
    day(4, 11560.0, 7.4, 158.2, 60.0, 113.0, 70.0, 60.0, 2120.0, Some("Pool laps with interval sprints.")),
    day(3, 8720.0, 6.7, 158.4, 62.0, 115.0, 72.0, 30.0, 1885.0, None),
    day(2, 12210.0, 7.6, 158.0, 57.0, 110.0, 68.0, 55.0, 2075.0, Some("Outdoor cycling with friends.")),
    day(1, 9350.0, 7.2, 157.9, 61.0, 112.0, 69.0, 35.0, 1940.0, None),
    day(0, 12840.0, 7.8, 157.7, 58.0, 111.0, 68.0, 65.0, 2090.0, Some("Strength training and mindfulness cooldown.")),
];

const fn source_for(provider: WearableProvider) -> MetricSource {
    match provider {
        WearableProvider::GoogleFit => MetricSource::GoogleFit,
        WearableProvider::Fitbit => MetricSource::Fitbit,
        WearableProvider::AppleHealth => MetricSource::AppleHealth,
    }
}

/// Materialize the provider's payload with dates pinned relative to `now`
pub(super) fn payload(provider: WearableProvider, now: DateTime<Utc>) -> Vec<NewMetric> {
    let days: &[SampleDay] = match provider {
        WearableProvider::GoogleFit => &GOOGLE_FIT,
        WearableProvider::Fitbit => &FITBIT,
        WearableProvider::AppleHealth => &APPLE_HEALTH,
    };
    let source = source_for(provider);

    days.iter()
        .map(|sample| {
            let mut metric = NewMetric::at(now - Duration::days(sample.days_ago));
            metric.steps = Some(sample.steps);
            metric.sleep_hours = Some(sample.sleep);
            metric.weight = Some(sample.weight);
            metric.heart_rate = Some(sample.heart_rate);
            metric.systolic = Some(sample.systolic);
            metric.diastolic = Some(sample.diastolic);
            metric.exercise_minutes = Some(sample.exercise);
            metric.calories = Some(sample.calories);
            metric.notes = sample.notes.map(str::to_owned);
            metric.source = Some(source);
            metric
        })
        .collect()
}
