// ABOUTME: Static reference ranges, trend thresholds, and storage keys
// ABOUTME: Ranges are illustrative constants, not clinically validated values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr

/// Static physiological reference ranges used for threshold comparison.
///
/// Each metric carries a normal band and a wider critical band. Readings
/// outside the normal band produce warnings; readings outside the critical
/// band produce critical alerts.
pub mod reference_ranges {
    /// A (min, max, critical-min, critical-max) band for one metric type
    #[derive(Debug, Clone, Copy)]
    pub struct ReferenceRange {
        /// Lower bound of the normal band
        pub min: f64,
        /// Upper bound of the normal band
        pub max: f64,
        /// Lower bound of the critical band
        pub critical_min: f64,
        /// Upper bound of the critical band
        pub critical_max: f64,
    }

    /// Systolic blood pressure (mmHg)
    pub const SYSTOLIC: ReferenceRange = ReferenceRange {
        min: 90.0,
        max: 120.0,
        critical_min: 70.0,
        critical_max: 180.0,
    };

    /// Diastolic blood pressure (mmHg)
    pub const DIASTOLIC: ReferenceRange = ReferenceRange {
        min: 60.0,
        max: 80.0,
        critical_min: 40.0,
        critical_max: 120.0,
    };

    /// Resting heart rate (bpm)
    pub const HEART_RATE: ReferenceRange = ReferenceRange {
        min: 60.0,
        max: 100.0,
        critical_min: 40.0,
        critical_max: 140.0,
    };

    /// Blood sugar (mg/dL)
    pub const BLOOD_SUGAR: ReferenceRange = ReferenceRange {
        min: 70.0,
        max: 140.0,
        critical_min: 50.0,
        critical_max: 200.0,
    };
}

/// Rolling-window trend detection thresholds
pub mod trend {
    /// Number of most-recent records in each comparison window
    pub const WINDOW: usize = 7;

    /// Absolute mean-systolic difference between adjacent windows that
    /// counts as a significant trend shift (mmHg)
    pub const SYSTOLIC_SHIFT_THRESHOLD: f64 = 15.0;
}

/// Thresholds for the lifestyle recommendation rules
pub mod lifestyle {
    /// Sleep durations below this trigger the sleep rule (hours)
    pub const MIN_SLEEP_HOURS: f64 = 7.0;

    /// Mean daily steps below this trigger the activity rule
    pub const DAILY_STEP_FLOOR: f64 = 8000.0;

    /// Absolute weight change over the recent window that triggers the
    /// weight-monitoring rule (lbs)
    pub const WEIGHT_SWING_LIMIT: f64 = 5.0;
}

/// Fixed string keys naming the local-persistence files
pub mod storage_keys {
    /// Flat array of all users' metric records
    pub const METRICS: &str = "healthtrackr_metrics";

    /// Per-user profile document; suffixed with the user id
    pub const PROFILE: &str = "healthtrackr_profile";

    /// Shared goals array, filtered by embedded user id
    pub const GOALS: &str = "healthtrackr_goals";
}

/// Synthetic sample-data generation parameters
pub mod sample_data {
    /// Days of metric backfill generated for an empty store
    pub const BACKFILL_DAYS: u32 = 30;

    /// Records older than this many days get the systolic spike that the
    /// trend detector is guaranteed to find in demo data
    pub const SPIKE_AFTER_DAYS: u32 = 20;

    /// Size of the injected systolic spike (mmHg)
    pub const SPIKE_MMHG: f64 = 15.0;

    /// Artificial latency for the mock wearable fetch
    pub const FETCH_DELAY_MS: u64 = 600;
}
