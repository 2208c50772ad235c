// ABOUTME: Rule-based recommendation synthesis from metrics and detected alerts
// ABOUTME: Rules fire independently; only the empty-history rule short-circuits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr

use super::mean_of;
use crate::constants::lifestyle;
use crate::constants::trend::WINDOW;
use crate::models::{Alert, HealthMetric, Recommendation, RecommendationPriority};

/// Generate prioritized suggestions from the metric history and the alerts
/// produced by the current detection pass.
///
/// With no metrics at all, the single onboarding recommendation is returned
/// and every other rule is skipped. Otherwise the rules evaluate
/// independently and may all co-fire.
#[must_use]
pub fn generate_recommendations(
    metrics: &[HealthMetric],
    alerts: &[Alert],
) -> Vec<Recommendation> {
    let Some(latest) = metrics.first() else {
        return vec![Recommendation {
            id: "rec-start".to_owned(),
            category: "Getting Started".to_owned(),
            title: "Start Tracking Your Health".to_owned(),
            description: "Begin by logging your daily health metrics to get personalized insights and recommendations.".to_owned(),
            priority: RecommendationPriority::High,
        }];
    };

    let mut recommendations = Vec::new();
    let recent = &metrics[..metrics.len().min(WINDOW)];

    if let Some(sleep) = latest.sleep_hours {
        if sleep < lifestyle::MIN_SLEEP_HOURS {
            recommendations.push(Recommendation {
                id: "rec-sleep".to_owned(),
                category: "Sleep".to_owned(),
                title: "Improve Sleep Duration".to_owned(),
                description: "You're getting less than 7 hours of sleep. Aim for 7-9 hours for optimal health.".to_owned(),
                priority: RecommendationPriority::High,
            });
        }
    }

    if let Some(avg_steps) = mean_of(recent, |m| m.steps) {
        if avg_steps < lifestyle::DAILY_STEP_FLOOR {
            recommendations.push(Recommendation {
                id: "rec-activity".to_owned(),
                category: "Activity".to_owned(),
                title: "Increase Daily Steps".to_owned(),
                description: "Try to reach 10,000 steps per day for better cardiovascular health.".to_owned(),
                priority: RecommendationPriority::Medium,
            });
        }
    }

    if metrics.len() >= WINDOW {
        let weights: Vec<f64> = recent.iter().filter_map(|m| m.weight).collect();
        if weights.len() >= 2 {
            // Newest minus oldest weight sample within the window.
            let swing = weights[0] - weights[weights.len() - 1];
            if swing.abs() > lifestyle::WEIGHT_SWING_LIMIT {
                recommendations.push(Recommendation {
                    id: "rec-weight".to_owned(),
                    category: "Weight".to_owned(),
                    title: "Monitor Weight Changes".to_owned(),
                    description: format!(
                        "You've experienced a {:.1} lb change this week. Consult a healthcare provider if concerned.",
                        swing.abs()
                    ),
                    priority: RecommendationPriority::Medium,
                });
            }
        }
    }

    if alerts.is_empty() {
        recommendations.push(Recommendation {
            id: "rec-wellness".to_owned(),
            category: "Wellness".to_owned(),
            title: "Keep Up the Good Work!".to_owned(),
            description: "Your health metrics look great. Continue your healthy habits.".to_owned(),
            priority: RecommendationPriority::Low,
        });
    }

    recommendations
}
