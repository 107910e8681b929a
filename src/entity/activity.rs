use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::new_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    FeatureAdded,
    FeedbackAdded,
    StatusChanged,
    PriorityChanged,
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityKind::FeatureAdded => write!(f, "feature_added"),
            ActivityKind::FeedbackAdded => write!(f, "feedback_added"),
            ActivityKind::StatusChanged => write!(f, "status_changed"),
            ActivityKind::PriorityChanged => write!(f, "priority_changed"),
        }
    }
}

/// An entry in the workspace activity feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: String,
    pub kind: ActivityKind,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_id: Option<String>,
}

impl ActivityItem {
    pub fn new(kind: ActivityKind, description: String, feature_id: Option<String>) -> Self {
        Self {
            id: new_id(),
            kind,
            description,
            timestamp: Utc::now(),
            feature_id,
        }
    }
}
