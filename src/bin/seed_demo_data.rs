// ABOUTME: Demo data seeder for local HealthTrackr stores
// ABOUTME: Backfills synthetic metrics then runs a full analytics pass over the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr

//! Demo data seeder.
//!
//! Populates a local store with a synthetic metric backfill (only when the
//! user has no metrics yet), optionally imports the mock wearable feeds,
//! and then runs the anomaly detector and recommendation engine over the
//! stored history.
//!
//! Usage:
//! ```bash
//! # Seed the default demo user
//! cargo run --bin seed-demo-data
//!
//! # Seed a specific user and import the wearable sample feeds
//! cargo run --bin seed-demo-data -- --user-id alice --wearables
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use healthtrackr::config::AppConfig;
use healthtrackr::intelligence::{detect_anomalies, generate_recommendations};
use healthtrackr::providers::{self, WearableProvider};
use healthtrackr::sample_data::seed_if_empty;
use healthtrackr::storage::{LocalBackend, StorageBackend};
use healthtrackr::utils::format_metric_number;
use healthtrackr::{logging, models::HealthMetric};

#[derive(Parser)]
#[command(
    name = "seed-demo-data",
    about = "HealthTrackr demo data seeder",
    long_about = "Populate a local store with synthetic health metrics for dashboard testing"
)]
struct SeedArgs {
    /// User to seed data for
    #[arg(long, default_value = "demo-user")]
    user_id: String,

    /// Storage directory override
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Also import the three wearable-provider sample feeds
    #[arg(long)]
    wearables: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let mut log_config = logging::LoggingConfig::from_env();
    if args.verbose {
        log_config.level = "debug".into();
    }
    logging::init(&log_config)?;

    let store = match &args.data_dir {
        Some(dir) => LocalBackend::new(dir),
        None => AppConfig::from_env()?.local_backend(),
    };

    let seeded = seed_if_empty(&store, &args.user_id).await?;
    info!(seeded, user_id = %args.user_id, "backfill finished");

    if args.wearables {
        import_wearables(&store, &args.user_id).await?;
    }

    let metrics = store.get_metrics(&args.user_id).await?;
    let alerts = detect_anomalies(&metrics);
    let recommendations = generate_recommendations(&metrics, &alerts);

    report_latest(metrics.first());
    for alert in &alerts {
        info!(severity = ?alert.severity, metric = %alert.metric, "{}", alert.message);
    }
    for rec in &recommendations {
        info!(priority = ?rec.priority, category = %rec.category, "{}: {}", rec.title, rec.description);
    }
    info!(
        metrics = metrics.len(),
        alerts = alerts.len(),
        recommendations = recommendations.len(),
        "analytics pass complete"
    );

    Ok(())
}

async fn import_wearables(store: &LocalBackend, user_id: &str) -> Result<()> {
    for provider in [
        WearableProvider::GoogleFit,
        WearableProvider::Fitbit,
        WearableProvider::AppleHealth,
    ] {
        let payload = providers::fetch_sample_data(provider).await;
        let summary = providers::summarize_wearable_data(&payload);
        for metric in &payload {
            store.save_metric(user_id, metric).await?;
        }
        info!(
            provider = provider.label(),
            records = payload.len(),
            total_steps = summary.total_steps,
            avg_sleep = summary.avg_sleep,
            "imported wearable sample feed"
        );
    }
    Ok(())
}

fn report_latest(latest: Option<&HealthMetric>) {
    let Some(latest) = latest else {
        return;
    };
    info!(
        recorded_at = %latest.recorded_at,
        systolic = %format_metric_number(latest.systolic),
        diastolic = %format_metric_number(latest.diastolic),
        heart_rate = %format_metric_number(latest.heart_rate),
        weight = %format_metric_number(latest.weight),
        steps = %format_metric_number(latest.steps),
        "latest stored metric"
    );
}
