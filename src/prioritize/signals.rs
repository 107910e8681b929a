//! Per-signal normalization. Every function returns a value in [0, 1].
//!
//! Out-of-range inputs are clamped here so one malformed feature cannot
//! skew a whole ranking.

use chrono::{DateTime, Utc};

use crate::entity::clamp_rating;

/// Usage counts are measured against at least this many uses.
pub const USAGE_BASELINE: f64 = 100.0;

/// Trend returned when there is not enough history to compare.
pub const NEUTRAL_TREND: f64 = 0.5;

/// Points in each of the recent and older trend windows.
pub const TREND_WINDOW: usize = 3;

/// Age at which time-based urgency saturates.
pub const URGENCY_HORIZON_DAYS: f64 = 60.0;

/// Flat urgency boost for high-impact, low-effort features.
pub const QUICK_WIN_URGENCY_BOOST: f64 = 0.3;

const MS_PER_DAY: f64 = 86_400_000.0;

pub fn impact_score(impact: u8) -> f64 {
    f64::from(clamp_rating(impact)) / 10.0
}

/// Inverted: effort 1 scores 1.0, effort 10 scores 0.1.
pub fn effort_score(effort: u8) -> f64 {
    (11.0 - f64::from(clamp_rating(effort))) / 10.0
}

/// Rescale a [-1, 1] sentiment onto [0, 1].
pub fn sentiment_score(sentiment: f64) -> f64 {
    let sentiment = if sentiment.is_nan() {
        0.0
    } else {
        sentiment.clamp(-1.0, 1.0)
    };
    ((sentiment + 1.0) / 2.0).max(0.0)
}

/// Linear up to [`USAGE_BASELINE`] uses, saturating at 1.0 from there on.
pub fn usage_score(usage_count: u64) -> f64 {
    let count = usage_count as f64;
    (count / count.max(USAGE_BASELINE)).min(1.0)
}

/// Growth of the mean of the last three samples over the three before them.
///
/// `counts` must be ordered by date. 0% growth maps to 0.5, +100% or more to
/// 1.0, a total collapse to 0.0.
pub fn trend_score(counts: &[u64]) -> f64 {
    if counts.len() < 2 {
        return NEUTRAL_TREND;
    }

    let recent_start = counts.len().saturating_sub(TREND_WINDOW);
    let older_start = counts.len().saturating_sub(2 * TREND_WINDOW);
    let recent = &counts[recent_start..];
    let older = &counts[older_start..recent_start];

    if older.is_empty() {
        return NEUTRAL_TREND;
    }

    let recent_avg = mean(recent);
    let older_avg = mean(older);

    if older_avg == 0.0 {
        return if recent_avg > 0.0 { 1.0 } else { 0.0 };
    }

    let growth_rate = (recent_avg - older_avg) / older_avg;
    ((growth_rate + 1.0) / 2.0).clamp(0.0, 1.0)
}

/// Time-decay urgency: older features grow more urgent, faster when high impact.
pub fn urgency_score(
    impact: u8,
    effort: u8,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> f64 {
    let impact = clamp_rating(impact);
    let effort = clamp_rating(effort);

    let days_since_created = (now - created_at).num_milliseconds() as f64 / MS_PER_DAY;

    let multiplier = if impact >= 8 {
        1.5
    } else if impact >= 6 {
        1.2
    } else {
        1.0
    };

    // May exceed 1 here; only the final value is clamped.
    let time_urgency = (days_since_created / URGENCY_HORIZON_DAYS).min(1.0) * multiplier;

    if impact >= 7 && effort <= 4 {
        (time_urgency + QUICK_WIN_URGENCY_BOOST).clamp(0.0, 1.0)
    } else {
        time_urgency.clamp(0.0, 1.0)
    }
}

fn mean(values: &[u64]) -> f64 {
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_impact_score_is_linear() {
        for impact in 1..=10u8 {
            assert_eq!(impact_score(impact), f64::from(impact) / 10.0);
        }
    }

    #[test]
    fn test_effort_score_is_inverted() {
        for effort in 1..=10u8 {
            assert_eq!(effort_score(effort), (11.0 - f64::from(effort)) / 10.0);
        }
        assert_eq!(effort_score(1), 1.0);
        assert_eq!(effort_score(10), 0.1);
    }

    #[test]
    fn test_ratings_out_of_range_are_clamped() {
        assert_eq!(impact_score(15), 1.0);
        assert_eq!(impact_score(0), 0.1);
        assert_eq!(effort_score(0), 1.0);
        assert_eq!(effort_score(200), 0.1);
    }

    #[test]
    fn test_sentiment_score() {
        assert_eq!(sentiment_score(-1.0), 0.0);
        assert_eq!(sentiment_score(0.0), 0.5);
        assert_eq!(sentiment_score(1.0), 1.0);
        assert_eq!(sentiment_score(-3.0), 0.0);
        assert_eq!(sentiment_score(4.0), 1.0);
        assert_eq!(sentiment_score(f64::NAN), 0.5);
    }

    #[test]
    fn test_usage_score_saturates_at_baseline() {
        assert_eq!(usage_score(0), 0.0);
        assert_eq!(usage_score(50), 0.5);
        assert_eq!(usage_score(100), 1.0);
        assert_eq!(usage_score(101), 1.0);
        assert_eq!(usage_score(10_000), 1.0);
    }

    #[test]
    fn test_trend_insufficient_history_is_neutral() {
        assert_eq!(trend_score(&[]), 0.5);
        assert_eq!(trend_score(&[10]), 0.5);
        assert_eq!(trend_score(&[10, 20]), 0.5);
        assert_eq!(trend_score(&[10, 20, 30]), 0.5);
    }

    #[test]
    fn test_trend_from_zero() {
        assert_eq!(trend_score(&[0, 0, 0, 5, 5, 5]), 1.0);
        assert_eq!(trend_score(&[0, 0, 0, 0, 0, 0]), 0.0);
    }

    #[test]
    fn test_trend_growth_mapping() {
        assert_eq!(trend_score(&[10, 10, 10, 10, 10, 10]), 0.5);
        assert_eq!(trend_score(&[10, 10, 10, 20, 20, 20]), 1.0);
        assert_eq!(trend_score(&[10, 10, 10, 40, 40, 40]), 1.0);
        assert_eq!(trend_score(&[10, 10, 10, 0, 0, 0]), 0.0);
        assert_eq!(trend_score(&[20, 20, 20, 15, 15, 15]), 0.375);
    }

    #[test]
    fn test_trend_uses_only_last_six_points() {
        // The leading 1000 falls outside both windows.
        assert_eq!(trend_score(&[1000, 10, 10, 10, 20, 20, 20]), 1.0);
    }

    #[test]
    fn test_trend_with_short_older_window() {
        // Four points: one older sample against the last three.
        assert_eq!(trend_score(&[10, 15, 15, 15]), 0.75);
    }

    #[test]
    fn test_urgency_grows_with_age() {
        let now = Utc::now();
        let young = urgency_score(5, 8, now - Duration::days(15), now);
        let old = urgency_score(5, 8, now - Duration::days(45), now);
        assert!((young - 0.25).abs() < 1e-9);
        assert!((old - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_urgency_clamps_high_impact_multiplier() {
        let now = Utc::now();
        let score = urgency_score(9, 9, now - Duration::days(3650), now);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_urgency_multiplier_tiers() {
        let now = Utc::now();
        let created = now - Duration::days(30);
        assert!((urgency_score(5, 9, created, now) - 0.5).abs() < 1e-9);
        assert!((urgency_score(6, 9, created, now) - 0.6).abs() < 1e-9);
        assert!((urgency_score(8, 9, created, now) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_urgency_quick_win_boost() {
        let now = Utc::now();
        assert!((urgency_score(7, 4, now, now) - 0.3).abs() < 1e-9);
        assert_eq!(urgency_score(7, 5, now, now), 0.0);
        assert_eq!(urgency_score(6, 4, now, now), 0.0);
    }

    #[test]
    fn test_urgency_future_creation_clamps_to_zero() {
        let now = Utc::now();
        assert_eq!(urgency_score(5, 5, now + Duration::days(10), now), 0.0);
    }
}
