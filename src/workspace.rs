//! In-memory feature and feedback collections.
//!
//! The scoring core never mutates anything. `Workspace` is the caller that
//! owns the data: it keeps `feedback_count` and the rolling sentiment of
//! each feature in step with its feedback, and cascades deletes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entity::{
    clamp_rating, ActivityItem, ActivityKind, Feature, FeatureUpdate, Feedback, NewFeature,
    UsageDataPoint,
};
use crate::error::{PulseError, Result};
use crate::sentiment::{mean_sentiment, SentimentScorer};

/// Serialized form of a workspace, as read from a JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub features: Vec<Feature>,
    pub feedback: Vec<Feedback>,
    pub usage: Vec<UsageDataPoint>,
    pub activity: Vec<ActivityItem>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let dataset: Dataset = serde_json::from_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            features = dataset.features.len(),
            feedback = dataset.feedback.len(),
            usage = dataset.usage.len(),
            activity = dataset.activity.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Workspace {
    features: Vec<Feature>,
    feedback: Vec<Feedback>,
    usage: Vec<UsageDataPoint>,
    activity: Vec<ActivityItem>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a workspace from a dataset, repairing derived fields.
    ///
    /// Feedback pointing at unknown features is dropped. Each feature's
    /// `feedback_count` is recounted, and its sentiment recomputed when it
    /// has any feedback. Activity is kept in timestamp order.
    pub fn from_dataset(dataset: Dataset) -> Self {
        let Dataset {
            features,
            feedback,
            usage,
            mut activity,
        } = dataset;
        activity.sort_by_key(|item| item.timestamp);

        let (feedback, orphans): (Vec<Feedback>, Vec<Feedback>) = feedback
            .into_iter()
            .partition(|fb| features.iter().any(|f| f.id == fb.feature_id));
        if !orphans.is_empty() {
            tracing::warn!(count = orphans.len(), "dropping feedback for unknown features");
        }

        let mut workspace = Self {
            features,
            feedback,
            usage,
            activity,
        };
        for index in 0..workspace.features.len() {
            workspace.reconcile(index, false);
        }
        workspace
    }

    pub fn into_dataset(self) -> Dataset {
        Dataset {
            features: self.features,
            feedback: self.feedback,
            usage: self.usage,
            activity: self.activity,
        }
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    pub fn usage(&self) -> &[UsageDataPoint] {
        &self.usage
    }

    pub fn feature(&self, id: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.id == id)
    }

    pub fn add_feature(&mut self, input: NewFeature) -> &Feature {
        let mut feature = Feature::new(input.title, input.impact, input.effort);
        feature.description = input.description;
        feature.tags = input.tags;
        feature.status = input.status.unwrap_or_default();
        feature.priority = input.priority.unwrap_or_default();

        tracing::debug!(id = %feature.id, title = %feature.title, "added feature");
        self.log(
            ActivityKind::FeatureAdded,
            format!("Created new feature: {}", feature.title),
            Some(feature.id.clone()),
        );

        self.features.push(feature);
        &self.features[self.features.len() - 1]
    }

    pub fn update_feature(&mut self, id: &str, update: FeatureUpdate) -> Result<&Feature> {
        let index = self.index_of(id)?;
        let mut events = Vec::new();

        let feature = &mut self.features[index];
        if let Some(title) = update.title {
            feature.title = title;
        }
        if let Some(description) = update.description {
            feature.description = description;
        }
        if let Some(tags) = update.tags {
            feature.tags = tags;
        }
        if let Some(status) = update.status {
            if status != feature.status {
                events.push((
                    ActivityKind::StatusChanged,
                    format!("Moved {} to {}", feature.title, status),
                ));
            }
            feature.status = status;
        }
        if let Some(priority) = update.priority {
            if priority != feature.priority {
                events.push((
                    ActivityKind::PriorityChanged,
                    format!("Changed priority of {} to {}", feature.title, priority),
                ));
            }
            feature.priority = priority;
        }
        if let Some(impact) = update.impact {
            feature.impact = clamp_rating(impact);
        }
        if let Some(effort) = update.effort {
            feature.effort = clamp_rating(effort);
        }
        if let Some(usage_count) = update.usage_count {
            feature.usage_count = usage_count;
        }
        feature.touch();

        for (kind, description) in events {
            self.log(kind, description, Some(id.to_string()));
        }
        Ok(&self.features[index])
    }

    /// Remove a feature together with all of its feedback.
    pub fn delete_feature(&mut self, id: &str) -> Result<Feature> {
        let index = self.index_of(id)?;
        let feature = self.features.remove(index);
        let before = self.feedback.len();
        self.feedback.retain(|fb| fb.feature_id != id);
        tracing::debug!(
            id,
            feedback_removed = before - self.feedback.len(),
            "deleted feature"
        );
        Ok(feature)
    }

    /// Tag `text` with `scorer`, store it, and refresh the feature's aggregate.
    pub fn add_feedback(
        &mut self,
        scorer: &SentimentScorer,
        feature_id: &str,
        text: &str,
        author: Option<String>,
    ) -> Result<Feedback> {
        let index = self.index_of(feature_id)?;
        let analysis = scorer.analyze(text);
        let feedback = Feedback::new(feature_id.to_string(), text.to_string(), author, &analysis);

        self.feedback.push(feedback.clone());
        self.reconcile(index, true);

        tracing::debug!(
            feature_id,
            sentiment = %analysis.label,
            score = analysis.score,
            "added feedback"
        );
        self.log(
            ActivityKind::FeedbackAdded,
            format!("Added feedback with {} sentiment", analysis.label),
            Some(feature_id.to_string()),
        );
        Ok(feedback)
    }

    pub fn feature_feedback(&self, feature_id: &str) -> Vec<&Feedback> {
        self.feedback
            .iter()
            .filter(|fb| fb.feature_id == feature_id)
            .collect()
    }

    pub fn feature_usage(&self, feature_id: &str) -> Vec<&UsageDataPoint> {
        crate::entity::series_for(&self.usage, feature_id)
    }

    pub fn add_usage(&mut self, point: UsageDataPoint) {
        self.usage.push(point);
    }

    /// Most recent activity first.
    pub fn recent_activity(&self, limit: usize) -> Vec<&ActivityItem> {
        self.activity.iter().rev().take(limit).collect()
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.features
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| PulseError::FeatureNotFound(id.to_string()))
    }

    /// Recount feedback for the feature at `index` and refresh its sentiment.
    fn reconcile(&mut self, index: usize, touch: bool) {
        let feature_id = self.features[index].id.clone();
        let items: Vec<&Feedback> = self
            .feedback
            .iter()
            .filter(|fb| fb.feature_id == feature_id)
            .collect();
        let count = items.len();
        let mean = mean_sentiment(items);

        let feature = &mut self.features[index];
        feature.feedback_count = count;
        if count > 0 {
            feature.sentiment_score = mean;
        }
        if touch {
            feature.touch();
        }
    }

    fn log(&mut self, kind: ActivityKind, description: String, feature_id: Option<String>) {
        self.activity
            .push(ActivityItem::new(kind, description, feature_id));
    }
}
