//! Multi-factor feature prioritization.
//!
//! Six signals are normalized independently onto [0, 1] (see [`signals`]),
//! combined as a weighted sum, tiered into a [`Recommendation`] and
//! explained with a list of [`Reason`]s. Scoring is pure: the reference time
//! is passed in rather than read from the clock, and the same inputs always
//! produce the same ranking.

mod reasoning;
pub mod signals;
mod weights;

pub use reasoning::{explain, Reason, ReasonRule, Severity};
pub use weights::PrioritizationWeights;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{series_for, Feature, UsageDataPoint};

/// Minimum total score for a high recommendation.
pub const HIGH_PRIORITY_THRESHOLD: f64 = 0.7;

/// Minimum total score for a medium recommendation.
pub const MEDIUM_PRIORITY_THRESHOLD: f64 = 0.4;

/// Normalized impact and effort cut-off for the quick-win and major-project buckets.
pub const BUCKET_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    High,
    Medium,
    Low,
}

impl Recommendation {
    pub fn from_total(total_score: f64) -> Self {
        if total_score >= HIGH_PRIORITY_THRESHOLD {
            Recommendation::High
        } else if total_score >= MEDIUM_PRIORITY_THRESHOLD {
            Recommendation::Medium
        } else {
            Recommendation::Low
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recommendation::High => write!(f, "high"),
            Recommendation::Medium => write!(f, "medium"),
            Recommendation::Low => write!(f, "low"),
        }
    }
}

/// The six normalized signals, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub impact_score: f64,
    pub effort_score: f64,
    pub sentiment_score: f64,
    pub usage_score: f64,
    pub trend_score: f64,
    pub urgency_score: f64,
}

impl ScoreBreakdown {
    /// Weighted sum of the signals. Not clamped.
    pub fn weighted_total(&self, weights: &PrioritizationWeights) -> f64 {
        self.impact_score * weights.impact
            + self.effort_score * weights.effort
            + self.sentiment_score * weights.sentiment
            + self.usage_score * weights.usage
            + self.trend_score * weights.trend
            + self.urgency_score * weights.urgency
    }
}

/// Computed priority for one feature. Built fresh on every query.
#[derive(Debug, Clone, Serialize)]
pub struct PrioritizationScore<'a> {
    pub feature: &'a Feature,
    pub total_score: f64,
    pub breakdown: ScoreBreakdown,
    pub recommendation: Recommendation,
    pub reasoning: Vec<Reason>,
}

impl PrioritizationScore<'_> {
    pub fn is_quick_win(&self) -> bool {
        self.breakdown.impact_score >= BUCKET_THRESHOLD
            && self.breakdown.effort_score >= BUCKET_THRESHOLD
    }

    pub fn is_major_project(&self) -> bool {
        self.breakdown.impact_score >= BUCKET_THRESHOLD
            && self.breakdown.effort_score < BUCKET_THRESHOLD
    }
}

#[derive(Debug, Clone, Default)]
pub struct PrioritizationEngine {
    weights: PrioritizationWeights,
}

impl PrioritizationEngine {
    pub fn new(weights: PrioritizationWeights) -> Self {
        if !weights.is_normalized() {
            tracing::debug!(
                total = weights.total(),
                "prioritization weights do not sum to 1; scores may leave [0, 1]"
            );
        }
        Self { weights }
    }

    pub fn weights(&self) -> &PrioritizationWeights {
        &self.weights
    }

    /// Normalize every signal for `feature` as of `now`.
    ///
    /// `usage` may contain samples for any number of features; only the
    /// feature's own points are used for the trend.
    pub fn breakdown(
        &self,
        feature: &Feature,
        usage: &[UsageDataPoint],
        now: DateTime<Utc>,
    ) -> ScoreBreakdown {
        let counts: Vec<u64> = series_for(usage, &feature.id)
            .into_iter()
            .map(|point| point.count)
            .collect();

        ScoreBreakdown {
            impact_score: signals::impact_score(feature.impact),
            effort_score: signals::effort_score(feature.effort),
            sentiment_score: signals::sentiment_score(feature.sentiment_score),
            usage_score: signals::usage_score(feature.usage_count),
            trend_score: signals::trend_score(&counts),
            urgency_score: signals::urgency_score(
                feature.impact,
                feature.effort,
                feature.created_at,
                now,
            ),
        }
    }

    pub fn score<'a>(
        &self,
        feature: &'a Feature,
        usage: &[UsageDataPoint],
        now: DateTime<Utc>,
    ) -> PrioritizationScore<'a> {
        let breakdown = self.breakdown(feature, usage, now);
        let total_score = breakdown.weighted_total(&self.weights);

        PrioritizationScore {
            feature,
            total_score,
            breakdown,
            recommendation: Recommendation::from_total(total_score),
            reasoning: explain(feature, &breakdown),
        }
    }

    /// Score every feature and rank by total score, highest first.
    ///
    /// Equal scores keep their input order.
    pub fn prioritize<'a>(
        &self,
        features: &'a [Feature],
        usage: &[UsageDataPoint],
        now: DateTime<Utc>,
    ) -> Vec<PrioritizationScore<'a>> {
        let mut scores: Vec<PrioritizationScore<'a>> = features
            .iter()
            .map(|feature| self.score(feature, usage, now))
            .collect();
        // sort_by is stable
        scores.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));

        tracing::debug!(
            features = features.len(),
            usage_points = usage.len(),
            "ranked features"
        );
        scores
    }
}

/// Score a single feature with the given weights.
pub fn calculate_prioritization_score<'a>(
    feature: &'a Feature,
    usage: &[UsageDataPoint],
    weights: &PrioritizationWeights,
    now: DateTime<Utc>,
) -> PrioritizationScore<'a> {
    PrioritizationEngine::new(*weights).score(feature, usage, now)
}

/// Score and rank features with the given weights.
pub fn prioritize_features<'a>(
    features: &'a [Feature],
    usage: &[UsageDataPoint],
    weights: &PrioritizationWeights,
    now: DateTime<Utc>,
) -> Vec<PrioritizationScore<'a>> {
    PrioritizationEngine::new(*weights).prioritize(features, usage, now)
}

/// High impact, low effort. Keeps the ranking order.
pub fn quick_wins<'s, 'a>(
    scores: &'s [PrioritizationScore<'a>],
) -> Vec<&'s PrioritizationScore<'a>> {
    scores.iter().filter(|score| score.is_quick_win()).collect()
}

/// High impact, high effort. Keeps the ranking order.
pub fn major_projects<'s, 'a>(
    scores: &'s [PrioritizationScore<'a>],
) -> Vec<&'s PrioritizationScore<'a>> {
    scores.iter().filter(|score| score.is_major_project()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn feature(id: &str, impact: u8, effort: u8) -> Feature {
        let mut feature = Feature::new(id.to_string(), impact, effort);
        feature.id = id.to_string();
        feature
    }

    fn aged(mut feature: Feature, now: DateTime<Utc>, days: i64) -> Feature {
        feature.created_at = now - Duration::days(days);
        feature.updated_at = feature.created_at;
        feature
    }

    #[test]
    fn test_quick_win_scenario() {
        let now = Utc::now();
        let mut f = aged(feature("search", 9, 3), now, 90);
        f.sentiment_score = 0.8;
        f.usage_count = 150;

        let score = PrioritizationEngine::default().score(&f, &[], now);

        assert_eq!(score.breakdown.impact_score, 0.9);
        assert_eq!(score.breakdown.effort_score, 0.8);
        assert_eq!(score.breakdown.usage_score, 1.0);
        assert_eq!(score.breakdown.trend_score, 0.5);
        assert_eq!(score.breakdown.urgency_score, 1.0);
        assert!(score.total_score >= 0.7);
        assert!((score.total_score - 0.865).abs() < 1e-9);
        assert_eq!(score.recommendation, Recommendation::High);
        assert!(score
            .reasoning
            .iter()
            .any(|r| r.rule == ReasonRule::QuickWin));
        assert!(score.is_quick_win());
    }

    #[test]
    fn test_recommendation_tiers() {
        assert_eq!(Recommendation::from_total(0.7), Recommendation::High);
        assert_eq!(Recommendation::from_total(0.69), Recommendation::Medium);
        assert_eq!(Recommendation::from_total(0.4), Recommendation::Medium);
        assert_eq!(Recommendation::from_total(0.39), Recommendation::Low);
        assert_eq!(Recommendation::from_total(1.4), Recommendation::High);
    }

    #[test]
    fn test_weights_are_not_renormalized() {
        let now = Utc::now();
        let f = aged(feature("a", 10, 1), now, 120);
        let weights = PrioritizationWeights {
            impact: 1.0,
            effort: 1.0,
            sentiment: 0.0,
            usage: 0.0,
            trend: 0.0,
            urgency: 0.0,
        };
        let score = calculate_prioritization_score(&f, &[], &weights, now);
        assert_eq!(score.total_score, 2.0);
    }

    #[test]
    fn test_zero_weights_score_zero() {
        let now = Utc::now();
        let f = feature("a", 10, 1);
        let weights = PrioritizationWeights {
            impact: 0.0,
            effort: 0.0,
            sentiment: 0.0,
            usage: 0.0,
            trend: 0.0,
            urgency: 0.0,
        };
        let score = calculate_prioritization_score(&f, &[], &weights, now);
        assert_eq!(score.total_score, 0.0);
        assert_eq!(score.recommendation, Recommendation::Low);
    }

    #[test]
    fn test_prioritize_sorts_descending() {
        let now = Utc::now();
        let features = vec![
            aged(feature("low", 2, 9), now, 1),
            aged(feature("high", 9, 2), now, 90),
            aged(feature("mid", 6, 5), now, 30),
        ];
        let ranked = PrioritizationEngine::default().prioritize(&features, &[], now);
        let ids: Vec<&str> = ranked.iter().map(|s| s.feature.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "mid", "low"]);
        assert!(ranked
            .windows(2)
            .all(|pair| pair[0].total_score >= pair[1].total_score));
    }

    #[test]
    fn test_prioritize_ties_keep_input_order() {
        let now = Utc::now();
        let features: Vec<Feature> = ["c", "a", "b", "d"]
            .iter()
            .map(|id| aged(feature(id, 5, 5), now, 10))
            .collect();
        let ranked = prioritize_features(&features, &[], &PrioritizationWeights::default(), now);
        let ids: Vec<&str> = ranked.iter().map(|s| s.feature.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn test_prioritize_empty() {
        let ranked = PrioritizationEngine::default().prioritize(&[], &[], Utc::now());
        assert!(ranked.is_empty());
        assert!(quick_wins(&ranked).is_empty());
        assert!(major_projects(&ranked).is_empty());
    }

    #[test]
    fn test_trend_uses_own_series_in_date_order() {
        let now = Utc::now();
        let f = feature("growing", 5, 5);
        let day = |d: u32| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
        // Supplied out of order and interleaved with another feature.
        let usage = vec![
            UsageDataPoint::new("growing", day(6), 20),
            UsageDataPoint::new("other", day(1), 500),
            UsageDataPoint::new("growing", day(1), 10),
            UsageDataPoint::new("growing", day(5), 20),
            UsageDataPoint::new("growing", day(2), 10),
            UsageDataPoint::new("other", day(2), 0),
            UsageDataPoint::new("growing", day(4), 20),
            UsageDataPoint::new("growing", day(3), 10),
        ];
        let score = PrioritizationEngine::default().score(&f, &usage, now);
        assert_eq!(score.breakdown.trend_score, 1.0);
        assert!(score
            .reasoning
            .iter()
            .any(|r| r.rule == ReasonRule::GrowingTrend));
    }

    #[test]
    fn test_buckets_are_disjoint_subsets() {
        let now = Utc::now();
        let features = vec![
            feature("quick", 8, 2),
            feature("major", 9, 8),
            feature("fill", 3, 2),
            feature("edge", 6, 5),
            feature("questionable", 2, 9),
        ];
        let ranked = PrioritizationEngine::default().prioritize(&features, &[], now);
        let wins = quick_wins(&ranked);
        let majors = major_projects(&ranked);

        let win_ids: Vec<&str> = wins.iter().map(|s| s.feature.id.as_str()).collect();
        let major_ids: Vec<&str> = majors.iter().map(|s| s.feature.id.as_str()).collect();

        assert!(win_ids.contains(&"quick"));
        assert!(win_ids.contains(&"edge"));
        assert_eq!(major_ids, vec!["major"]);
        assert!(win_ids.iter().all(|id| !major_ids.contains(id)));
        for s in &wins {
            assert!(s.breakdown.impact_score >= 0.6 && s.breakdown.effort_score >= 0.6);
        }
    }

    #[test]
    fn test_malformed_feature_is_clamped() {
        let now = Utc::now();
        let mut f = feature("bad", 5, 5);
        f.impact = 15;
        f.effort = 0;
        f.sentiment_score = 7.0;
        let score = PrioritizationEngine::default().score(&f, &[], now);
        let b = score.breakdown;
        for v in [
            b.impact_score,
            b.effort_score,
            b.sentiment_score,
            b.usage_score,
            b.trend_score,
            b.urgency_score,
        ] {
            assert!((0.0..=1.0).contains(&v));
        }
        assert!(score.total_score <= 1.0 + 1e-9);
    }

    #[test]
    fn test_score_serializes_feature_and_breakdown() {
        let now = Utc::now();
        let f = feature("json", 7, 3);
        let score = PrioritizationEngine::default().score(&f, &[], now);
        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(json["feature"]["id"], "json");
        assert_eq!(json["breakdown"]["impact_score"], 0.7);
        assert!(json["reasoning"].is_array());
    }
}
