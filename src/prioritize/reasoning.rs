//! Structured explanations for a priority score.
//!
//! Each [`Reason`] names the rule that fired, how it should be read, and the
//! raw input value worth showing. `Display` gives a plain-text rendering;
//! anything fancier is up to the presentation layer.

use serde::{Deserialize, Serialize};

use super::ScoreBreakdown;
use crate::entity::Feature;

pub const HIGH_IMPACT: f64 = 0.8;
pub const LOW_IMPACT: f64 = 0.3;
pub const LOW_EFFORT: f64 = 0.8;
pub const HIGH_EFFORT: f64 = 0.3;
pub const POSITIVE_SENTIMENT: f64 = 0.7;
pub const NEGATIVE_SENTIMENT: f64 = 0.3;
pub const HIGH_USAGE: f64 = 0.7;
pub const LOW_USAGE: f64 = 0.2;
pub const GROWING_TREND: f64 = 0.7;
pub const DECLINING_TREND: f64 = 0.3;
pub const HIGH_URGENCY: f64 = 0.7;
pub const COMBINATION: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonRule {
    HighImpact,
    LowImpact,
    LowEffort,
    HighEffort,
    PositiveSentiment,
    NegativeSentiment,
    HighUsage,
    LowUsage,
    GrowingTrend,
    DecliningTrend,
    HighUrgency,
    QuickWin,
    UserFavorite,
}

impl ReasonRule {
    pub fn severity(&self) -> Severity {
        match self {
            ReasonRule::HighImpact
            | ReasonRule::LowEffort
            | ReasonRule::PositiveSentiment
            | ReasonRule::HighUsage
            | ReasonRule::GrowingTrend => Severity::Strength,
            ReasonRule::LowImpact
            | ReasonRule::HighEffort
            | ReasonRule::NegativeSentiment
            | ReasonRule::LowUsage
            | ReasonRule::DecliningTrend => Severity::Concern,
            ReasonRule::HighUrgency | ReasonRule::QuickWin | ReasonRule::UserFavorite => {
                Severity::Insight
            }
        }
    }
}

impl std::fmt::Display for ReasonRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ReasonRule::HighImpact => "high_impact",
            ReasonRule::LowImpact => "low_impact",
            ReasonRule::LowEffort => "low_effort",
            ReasonRule::HighEffort => "high_effort",
            ReasonRule::PositiveSentiment => "positive_sentiment",
            ReasonRule::NegativeSentiment => "negative_sentiment",
            ReasonRule::HighUsage => "high_usage",
            ReasonRule::LowUsage => "low_usage",
            ReasonRule::GrowingTrend => "growing_trend",
            ReasonRule::DecliningTrend => "declining_trend",
            ReasonRule::HighUrgency => "high_urgency",
            ReasonRule::QuickWin => "quick_win",
            ReasonRule::UserFavorite => "user_favorite",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Argues for doing the feature.
    Strength,
    /// Argues against it.
    Concern,
    /// Derived from several signals, or from timing.
    Insight,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reason {
    pub rule: ReasonRule,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl Reason {
    fn new(rule: ReasonRule, value: Option<f64>) -> Self {
        Self {
            rule,
            severity: rule.severity(),
            value,
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let v = self.value.unwrap_or_default();
        match self.rule {
            ReasonRule::HighImpact => {
                write!(f, "High business impact ({:.0}/10) - significant value potential", v)
            }
            ReasonRule::LowImpact => {
                write!(f, "Low business impact ({:.0}/10) - limited value potential", v)
            }
            ReasonRule::LowEffort => {
                write!(f, "Low development effort ({:.0}/10) - quick to implement", v)
            }
            ReasonRule::HighEffort => {
                write!(f, "High development effort ({:.0}/10) - resource intensive", v)
            }
            ReasonRule::PositiveSentiment => {
                write!(f, "Positive user sentiment ({:.1}) - users want this", v)
            }
            ReasonRule::NegativeSentiment => {
                write!(f, "Negative user sentiment ({:.1}) - users are unhappy", v)
            }
            ReasonRule::HighUsage => write!(f, "High usage ({:.0}) - actively used feature", v),
            ReasonRule::LowUsage => write!(f, "Low usage ({:.0}) - underutilized feature", v),
            ReasonRule::GrowingTrend => write!(f, "Growing usage trend - gaining momentum"),
            ReasonRule::DecliningTrend => write!(f, "Declining usage trend - losing interest"),
            ReasonRule::HighUrgency => write!(f, "High urgency - has been waiting for attention"),
            ReasonRule::QuickWin => write!(f, "Quick win - high impact, low effort"),
            ReasonRule::UserFavorite => {
                write!(f, "User favorite - high usage and positive sentiment")
            }
        }
    }
}

/// Evaluate every rule in a fixed order and collect the ones that fire.
pub fn explain(feature: &Feature, scores: &ScoreBreakdown) -> Vec<Reason> {
    let mut reasons = Vec::new();
    let impact = Some(f64::from(feature.impact));
    let effort = Some(f64::from(feature.effort));
    let sentiment = Some(feature.sentiment_score);
    let usage = Some(feature.usage_count as f64);

    if scores.impact_score >= HIGH_IMPACT {
        reasons.push(Reason::new(ReasonRule::HighImpact, impact));
    } else if scores.impact_score <= LOW_IMPACT {
        reasons.push(Reason::new(ReasonRule::LowImpact, impact));
    }

    if scores.effort_score >= LOW_EFFORT {
        reasons.push(Reason::new(ReasonRule::LowEffort, effort));
    } else if scores.effort_score <= HIGH_EFFORT {
        reasons.push(Reason::new(ReasonRule::HighEffort, effort));
    }

    if scores.sentiment_score >= POSITIVE_SENTIMENT {
        reasons.push(Reason::new(ReasonRule::PositiveSentiment, sentiment));
    } else if scores.sentiment_score <= NEGATIVE_SENTIMENT {
        reasons.push(Reason::new(ReasonRule::NegativeSentiment, sentiment));
    }

    if scores.usage_score >= HIGH_USAGE {
        reasons.push(Reason::new(ReasonRule::HighUsage, usage));
    } else if scores.usage_score <= LOW_USAGE {
        reasons.push(Reason::new(ReasonRule::LowUsage, usage));
    }

    if scores.trend_score >= GROWING_TREND {
        reasons.push(Reason::new(ReasonRule::GrowingTrend, None));
    } else if scores.trend_score <= DECLINING_TREND {
        reasons.push(Reason::new(ReasonRule::DecliningTrend, None));
    }

    if scores.urgency_score >= HIGH_URGENCY {
        reasons.push(Reason::new(ReasonRule::HighUrgency, None));
    }

    if scores.impact_score >= COMBINATION && scores.effort_score >= COMBINATION {
        reasons.push(Reason::new(ReasonRule::QuickWin, None));
    }

    if scores.sentiment_score >= COMBINATION && scores.usage_score >= COMBINATION {
        reasons.push(Reason::new(ReasonRule::UserFavorite, None));
    }

    reasons
}
