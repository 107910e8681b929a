//! Feedback sentiment scoring and multi-factor feature prioritization.
//!
//! Two independent, pure components make up the core:
//!
//! - [`sentiment::SentimentScorer`] turns free text into a score in [-1, 1]
//!   and a positive/negative/neutral label.
//! - [`prioritize::PrioritizationEngine`] combines six normalized signals
//!   into a ranked, explained priority per feature.
//!
//! [`workspace::Workspace`] is an in-memory owner of features and feedback
//! that wires the two together.
//!
//! ```
//! use chrono::Utc;
//! use featurepulse::entity::Feature;
//! use featurepulse::prioritize::{quick_wins, PrioritizationEngine};
//! use featurepulse::sentiment::analyze_sentiment;
//!
//! let mut feature = Feature::new("Saved searches".to_string(), 8, 3);
//! feature.sentiment_score = analyze_sentiment("really useful, love it").score;
//!
//! let features = vec![feature];
//! let ranked = PrioritizationEngine::default().prioritize(&features, &[], Utc::now());
//! assert_eq!(quick_wins(&ranked).len(), 1);
//! ```

pub mod analytics;
pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod prioritize;
pub mod quadrant;
pub mod sentiment;
pub mod workspace;

pub use config::PulseConfig;
pub use error::{PulseError, Result};
pub use prioritize::{
    calculate_prioritization_score, prioritize_features, PrioritizationEngine,
    PrioritizationScore, PrioritizationWeights,
};
pub use sentiment::{analyze_sentiment, SentimentScorer};
pub use workspace::Workspace;
