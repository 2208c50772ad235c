// ABOUTME: Personal health-metrics engine with dual-backend persistence and analytics
// ABOUTME: Library root wiring models, storage, intelligence, and provider mocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr

#![deny(unsafe_code)]

//! # HealthTrackr
//!
//! Engine for a personal health-metrics dashboard: users log vitals, the
//! anomaly detector scans them against static reference ranges and rolling
//! trend windows, and the recommendation engine turns metrics and alerts
//! into prioritized suggestions.
//!
//! Persistence is per-user in a remote document store with a transparent
//! local-storage fallback: a remote call that fails with a classified
//! permission denial is retried, for that single operation only, against
//! the local backend. See [`storage`] for the contract.
//!
//! ## Modules
//!
//! - **models**: canonical record types (`HealthMetric`, `Goal`, `Alert`, ...)
//! - **storage**: `StorageBackend` trait, remote and local backends, fallback decorator
//! - **intelligence**: anomaly detection, recommendation rules, goal progress
//! - **providers**: mock wearable feeds and CSV export
//! - **sample_data**: 30-day synthetic backfill for empty stores

/// Environment-driven configuration and store construction
pub mod config;

/// Static reference ranges, thresholds, and storage keys
pub mod constants;

/// Typed storage error hierarchy
pub mod errors;

/// Anomaly detection, recommendation rules, and goal progress
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Core domain models
pub mod models;

/// Mock wearable-provider feeds and CSV export
pub mod providers;

/// Synthetic demo-data generation
pub mod sample_data;

/// Dual-backend persistence layer
pub mod storage;

/// Display formatting helpers
pub mod utils;
