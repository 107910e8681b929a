use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::new_id;
use crate::sentiment::{SentimentAnalysis, SentimentLabel};

/// One piece of user feedback about a single feature.
///
/// The sentiment fields are computed once when the feedback is created and
/// never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub feature_id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub sentiment: SentimentLabel,
    pub sentiment_score: f64,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    pub fn new(
        feature_id: String,
        text: String,
        author: Option<String>,
        analysis: &SentimentAnalysis,
    ) -> Self {
        Self {
            id: new_id(),
            feature_id,
            text,
            author,
            sentiment: analysis.label,
            sentiment_score: analysis.score,
            created_at: Utc::now(),
        }
    }
}
