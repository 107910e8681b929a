//! Summary metrics over a feature collection.

use serde::Serialize;

use crate::entity::{ActivityItem, Feature, FeaturePriority, FeatureStatus};
use crate::workspace::Workspace;

/// Activity entries included in [`DashboardMetrics`].
pub const RECENT_ACTIVITY_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityDistribution {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityDistribution {
    pub fn from_features(features: &[Feature]) -> Self {
        features.iter().fold(Self::default(), |mut dist, f| {
            match f.priority {
                FeaturePriority::High => dist.high += 1,
                FeaturePriority::Medium => dist.medium += 1,
                FeaturePriority::Low => dist.low += 1,
            }
            dist
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardMetrics<'a> {
    pub total_features: usize,
    pub in_progress: usize,
    pub avg_sentiment: f64,
    pub priority_distribution: PriorityDistribution,
    pub recent_activity: Vec<&'a ActivityItem>,
}

impl<'a> DashboardMetrics<'a> {
    pub fn compute(workspace: &'a Workspace) -> Self {
        let features = workspace.features();
        Self {
            total_features: features.len(),
            in_progress: features
                .iter()
                .filter(|f| f.status == FeatureStatus::InProgress)
                .count(),
            avg_sentiment: average_sentiment(features),
            priority_distribution: PriorityDistribution::from_features(features),
            recent_activity: workspace.recent_activity(RECENT_ACTIVITY_LIMIT),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSummary<'a> {
    pub total_usage: u64,
    pub total_feedback: usize,
    /// Features with any recorded usage.
    pub active_features: usize,
    pub avg_sentiment: f64,
    pub top_by_usage: Vec<&'a Feature>,
    pub top_by_sentiment: Vec<&'a Feature>,
}

impl<'a> AnalyticsSummary<'a> {
    /// Summarize `features`, listing up to `top` entries per leaderboard.
    pub fn compute(features: &'a [Feature], top: usize) -> Self {
        let mut by_usage: Vec<&Feature> = features.iter().collect();
        by_usage.sort_by(|a, b| b.usage_count.cmp(&a.usage_count));
        by_usage.truncate(top);

        let mut by_sentiment: Vec<&Feature> = features.iter().collect();
        by_sentiment.sort_by(|a, b| b.sentiment_score.total_cmp(&a.sentiment_score));
        by_sentiment.truncate(top);

        Self {
            total_usage: features.iter().map(|f| f.usage_count).sum(),
            total_feedback: features.iter().map(|f| f.feedback_count).sum(),
            active_features: features.iter().filter(|f| f.usage_count > 0).count(),
            avg_sentiment: average_sentiment(features),
            top_by_usage: by_usage,
            top_by_sentiment: by_sentiment,
        }
    }
}

/// Mean feature sentiment, 0.0 for an empty collection.
pub fn average_sentiment(features: &[Feature]) -> f64 {
    if features.is_empty() {
        return 0.0;
    }
    features.iter().map(|f| f.sentiment_score).sum::<f64>() / features.len() as f64
}
