// src/entity/feature.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::new_id;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FeatureStatus {
    #[default]
    Backlog,
    #[serde(alias = "in progress", alias = "in-progress")]
    InProgress,
    Completed,
}

impl std::fmt::Display for FeatureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureStatus::Backlog => write!(f, "backlog"),
            FeatureStatus::InProgress => write!(f, "in_progress"),
            FeatureStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for FeatureStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "backlog" => Ok(FeatureStatus::Backlog),
            "in_progress" | "inprogress" => Ok(FeatureStatus::InProgress),
            "completed" | "done" => Ok(FeatureStatus::Completed),
            _ => Err(format!("Invalid feature status: {}", s)),
        }
    }
}

/// Advisory priority label set by a user. Independent of the computed score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeaturePriority {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for FeaturePriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeaturePriority::Low => write!(f, "low"),
            FeaturePriority::Medium => write!(f, "medium"),
            FeaturePriority::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for FeaturePriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(FeaturePriority::Low),
            "medium" => Ok(FeaturePriority::Medium),
            "high" => Ok(FeaturePriority::High),
            _ => Err(format!("Invalid feature priority: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: FeatureStatus,
    #[serde(default)]
    pub priority: FeaturePriority,
    /// Business value estimate, 1-10.
    #[serde(deserialize_with = "deserialize_rating")]
    pub impact: u8,
    /// Implementation cost estimate, 1-10.
    #[serde(deserialize_with = "deserialize_rating")]
    pub effort: u8,
    #[serde(default)]
    pub usage_count: u64,
    /// Mean sentiment of the feature's feedback, in [-1, 1].
    #[serde(default)]
    pub sentiment_score: f64,
    #[serde(default)]
    pub feedback_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Feature {
    pub fn new(title: String, impact: u8, effort: u8) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            title,
            description: String::new(),
            tags: Vec::new(),
            status: FeatureStatus::default(),
            priority: FeaturePriority::default(),
            impact: clamp_rating(impact),
            effort: clamp_rating(effort),
            usage_count: 0,
            sentiment_score: 0.0,
            feedback_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Clamp an impact or effort rating into the 1-10 scale.
pub fn clamp_rating(value: u8) -> u8 {
    value.clamp(MIN_RATING, MAX_RATING)
}

/// Read any JSON number as a rating: rounded, then clamped into 1-10.
fn deserialize_rating<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if raw.is_nan() {
        return Ok(MIN_RATING);
    }
    let rating = raw
        .round()
        .clamp(f64::from(MIN_RATING), f64::from(MAX_RATING));
    Ok(rating as u8)
}

/// Input for creating a feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFeature {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: Option<FeatureStatus>,
    #[serde(default)]
    pub priority: Option<FeaturePriority>,
    #[serde(deserialize_with = "deserialize_rating")]
    pub impact: u8,
    #[serde(deserialize_with = "deserialize_rating")]
    pub effort: u8,
}

/// Partial update for a feature. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<FeatureStatus>,
    pub priority: Option<FeaturePriority>,
    pub impact: Option<u8>,
    pub effort: Option<u8>,
    pub usage_count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_feature_zeroes_signals() {
        let feature = Feature::new("Dark mode".to_string(), 7, 3);
        assert_eq!(feature.usage_count, 0);
        assert_eq!(feature.sentiment_score, 0.0);
        assert_eq!(feature.feedback_count, 0);
        assert_eq!(feature.created_at, feature.updated_at);
        assert_eq!(feature.status, FeatureStatus::Backlog);
    }

    #[test]
    fn test_new_feature_clamps_ratings() {
        let feature = Feature::new("Out of range".to_string(), 15, 0);
        assert_eq!(feature.impact, 10);
        assert_eq!(feature.effort, 1);
    }

    #[test]
    fn test_out_of_range_ratings_deserialize_clamped() {
        let json = r#"[
            {"id":"a","title":"A","impact":300,"effort":-2,
             "created_at":"2025-01-01T00:00:00Z","updated_at":"2025-01-01T00:00:00Z"},
            {"id":"b","title":"B","impact":7.5,"effort":0.2,
             "created_at":"2025-01-01T00:00:00Z","updated_at":"2025-01-01T00:00:00Z"}
        ]"#;
        let features: Vec<Feature> = serde_json::from_str(json).unwrap();
        assert_eq!((features[0].impact, features[0].effort), (10, 1));
        assert_eq!((features[1].impact, features[1].effort), (8, 1));
    }

    #[test]
    fn test_rating_rejects_non_numbers() {
        let json = r#"{"title":"A","impact":"high","effort":3}"#;
        assert!(serde_json::from_str::<NewFeature>(json).is_err());
    }

    #[test]
    fn test_status_parsing_accepts_spellings() {
        for s in ["in progress", "in-progress", "in_progress", "In Progress"] {
            assert_eq!(s.parse::<FeatureStatus>().unwrap(), FeatureStatus::InProgress);
        }
        assert!("shipped".parse::<FeatureStatus>().is_err());
    }

    #[test]
    fn test_status_deserializes_spaced_spelling() {
        let status: FeatureStatus = serde_json::from_str("\"in progress\"").unwrap();
        assert_eq!(status, FeatureStatus::InProgress);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"in_progress\"");
    }

    #[test]
    fn test_priority_roundtrip_display() {
        for p in [FeaturePriority::Low, FeaturePriority::Medium, FeaturePriority::High] {
            assert_eq!(p.to_string().parse::<FeaturePriority>().unwrap(), p);
        }
    }
}
