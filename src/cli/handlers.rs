use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;

use crate::analytics::{AnalyticsSummary, DashboardMetrics};
use crate::config::PulseConfig;
use crate::error::{PulseError, Result};
use crate::prioritize::{major_projects, quick_wins, PrioritizationScore};
use crate::quadrant::group_by_quadrant;
use crate::workspace::{Dataset, Workspace};

use super::commands::RankArgs;

/// Which slice of the ranking to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankView {
    All,
    QuickWins,
    MajorProjects,
}

impl RankView {
    fn heading(&self) -> &'static str {
        match self {
            RankView::All => "Ranked features",
            RankView::QuickWins => "Quick wins",
            RankView::MajorProjects => "Major projects",
        }
    }
}

/// First seven characters of an id, for compact listings.
fn short_id(id: &str) -> String {
    id.chars().take(7).collect()
}

fn load_workspace(path: &Path) -> Result<Workspace> {
    Ok(Workspace::from_dataset(Dataset::load(path)?))
}

/// Parse an RFC 3339 timestamp or a YYYY-MM-DD date (midnight UTC).
pub fn parse_reference_time(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(datetime) = date.and_hms_opt(0, 0, 0) {
            return Ok(DateTime::from_naive_utc_and_offset(datetime, Utc));
        }
    }

    Err(PulseError::InvalidValue(format!(
        "'{}' is not an RFC 3339 timestamp or YYYY-MM-DD date",
        s
    )))
}

pub fn handle_analyze(config: &PulseConfig, text: String, json: bool) -> Result<()> {
    let analysis = config.scorer().analyze(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!(
            "{} ({:.2}, {} sentiment word{})",
            analysis.label,
            analysis.score,
            analysis.matched_words,
            if analysis.matched_words == 1 { "" } else { "s" }
        );
    }

    Ok(())
}

pub fn handle_rank(config: &PulseConfig, args: RankArgs, view: RankView) -> Result<()> {
    let config = config.clone().with_weight_overrides(&args.weights)?;
    let now = match args.now.as_deref() {
        Some(s) => parse_reference_time(s)?,
        None => Utc::now(),
    };

    let workspace = load_workspace(&args.data)?;
    let ranked = config
        .engine()
        .prioritize(workspace.features(), workspace.usage(), now);

    let mut selected: Vec<&PrioritizationScore> = match view {
        RankView::All => ranked.iter().collect(),
        RankView::QuickWins => quick_wins(&ranked),
        RankView::MajorProjects => major_projects(&ranked),
    };
    if let Some(limit) = args.limit {
        selected.truncate(limit);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    if selected.is_empty() {
        println!("No features found.");
        return Ok(());
    }

    println!("{} ({}):\n", view.heading(), selected.len());
    for (rank, score) in selected.iter().enumerate() {
        println!(
            "  {:>2}. {:.3} [{}] {} ({})",
            rank + 1,
            score.total_score,
            score.recommendation,
            score.feature.title,
            short_id(&score.feature.id)
        );
        let b = &score.breakdown;
        println!(
            "      impact {:.2} | effort {:.2} | sentiment {:.2} | usage {:.2} | trend {:.2} | urgency {:.2}",
            b.impact_score, b.effort_score, b.sentiment_score, b.usage_score, b.trend_score, b.urgency_score
        );
        for reason in score.reasoning.iter().take(config.reasons_shown) {
            println!("      - {}", reason);
        }
    }

    Ok(())
}

pub fn handle_quadrants(data: &Path, json: bool) -> Result<()> {
    let workspace = load_workspace(data)?;
    let groups = group_by_quadrant(workspace.features());

    if json {
        let mut value = serde_json::Map::new();
        for (quadrant, features) in &groups {
            value.insert(quadrant.to_string(), serde_json::to_value(features)?);
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    for (quadrant, features) in groups {
        println!(
            "{} - {} ({})",
            quadrant.title(),
            quadrant.description(),
            features.len()
        );
        for f in features {
            println!(
                "  ({}) [{}|{}] {} impact:{} effort:{}",
                short_id(&f.id),
                f.status,
                f.priority,
                f.title,
                f.impact,
                f.effort
            );
        }
        println!();
    }

    Ok(())
}

pub fn handle_metrics(data: &Path, top: usize, json: bool) -> Result<()> {
    let workspace = load_workspace(data)?;
    let dashboard = DashboardMetrics::compute(&workspace);
    let analytics = AnalyticsSummary::compute(workspace.features(), top);

    if json {
        let value = json!({
            "dashboard": dashboard,
            "analytics": analytics,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let dist = dashboard.priority_distribution;
    println!("Features:        {}", dashboard.total_features);
    println!("In progress:     {}", dashboard.in_progress);
    println!("Avg sentiment:   {:.2}", dashboard.avg_sentiment);
    println!(
        "Priority labels: high {} | medium {} | low {}",
        dist.high, dist.medium, dist.low
    );
    println!("Total usage:     {}", analytics.total_usage);
    println!("Total feedback:  {}", analytics.total_feedback);
    println!(
        "Active features: {}/{}",
        analytics.active_features, dashboard.total_features
    );

    if !analytics.top_by_usage.is_empty() {
        println!("\nMost used:");
        for f in &analytics.top_by_usage {
            println!("  {:>6}  {}", f.usage_count, f.title);
        }
        println!("\nBest sentiment:");
        for f in &analytics.top_by_sentiment {
            println!("  {:>6.2}  {}", f.sentiment_score, f.title);
        }
    }

    if !dashboard.recent_activity.is_empty() {
        println!("\nRecent activity:");
        for item in &dashboard.recent_activity {
            println!(
                "  {}  {}",
                item.timestamp.format("%Y-%m-%d %H:%M"),
                item.description
            );
        }
    }

    Ok(())
}

pub fn handle_feedback(
    config: &PulseConfig,
    data: &Path,
    feature_id: String,
    text: String,
    author: Option<String>,
    json: bool,
) -> Result<()> {
    let mut workspace = load_workspace(data)?;
    let feedback = workspace.add_feedback(&config.scorer(), &feature_id, &text, author)?;
    let feature = workspace
        .feature(&feature_id)
        .ok_or_else(|| PulseError::FeatureNotFound(feature_id.clone()))?;

    if json {
        let value = json!({
            "feedback": feedback,
            "feature": feature,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!(
            "Tagged feedback as {} ({:.2})",
            feedback.sentiment, feedback.sentiment_score
        );
        println!(
            "{} ({}) now has {} feedback, sentiment {:.2}",
            feature.title,
            short_id(&feature.id),
            feature.feedback_count,
            feature.sentiment_score
        );
    }

    Ok(())
}
