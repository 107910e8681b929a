use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "featurepulse")]
#[command(version, about = "Feedback sentiment scoring and feature prioritization")]
#[command(propagate_version = true)]
pub struct Cli {
    /// YAML config file (defaults to ./featurepulse.yaml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score the sentiment of a piece of feedback text
    Analyze {
        /// Feedback text
        text: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rank all features by composite priority score
    Rank(RankArgs),

    /// List high-impact, low-effort features in ranked order
    QuickWins(RankArgs),

    /// List high-impact, high-effort features in ranked order
    MajorProjects(RankArgs),

    /// Group features into the impact/effort matrix
    Quadrants {
        /// Dataset JSON file
        #[arg(long, short = 'd', value_name = "FILE")]
        data: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show dashboard metrics and usage/sentiment leaderboards
    Metrics {
        /// Dataset JSON file
        #[arg(long, short = 'd', value_name = "FILE")]
        data: PathBuf,

        /// Entries per leaderboard
        #[arg(long, default_value = "5")]
        top: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Tag new feedback and show the feature's updated sentiment (not saved)
    Feedback {
        /// Dataset JSON file
        #[arg(long, short = 'd', value_name = "FILE")]
        data: PathBuf,

        /// Feature ID the feedback is about
        #[arg(long, short = 'f')]
        feature: String,

        /// Feedback text
        text: String,

        /// Feedback author
        #[arg(long)]
        author: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    /// Dataset JSON file with features, feedback and usage
    #[arg(long, short = 'd', value_name = "FILE")]
    pub data: PathBuf,

    /// Override a weight as key=value, e.g. impact=0.3 (can be specified multiple times)
    #[arg(long = "weight", short = 'w', value_name = "KEY=VALUE")]
    pub weights: Vec<String>,

    /// Reference time for urgency, RFC 3339 or YYYY-MM-DD (defaults to now)
    #[arg(long)]
    pub now: Option<String>,

    /// Show at most this many features
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
