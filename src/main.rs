use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use featurepulse::cli::{
    handle_analyze, handle_feedback, handle_metrics, handle_quadrants, handle_rank, Cli, Commands,
    RankView,
};
use featurepulse::{PulseConfig, PulseError};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "featurepulse=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(PulseError::from)
        .and_then(|cwd| PulseConfig::resolve(cli.config.as_deref(), &cwd))
        .and_then(|config| match cli.command {
            Commands::Analyze { text, json } => handle_analyze(&config, text, json),
            Commands::Rank(args) => handle_rank(&config, args, RankView::All),
            Commands::QuickWins(args) => handle_rank(&config, args, RankView::QuickWins),
            Commands::MajorProjects(args) => handle_rank(&config, args, RankView::MajorProjects),
            Commands::Quadrants { data, json } => handle_quadrants(&data, json),
            Commands::Metrics { data, top, json } => handle_metrics(&data, top, json),
            Commands::Feedback {
                data,
                feature,
                text,
                author,
                json,
            } => handle_feedback(&config, &data, feature, text, author, json),
        });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
