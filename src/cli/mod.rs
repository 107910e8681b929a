mod commands;
mod handlers;

pub use commands::{Cli, Commands, RankArgs};
pub use handlers::{
    handle_analyze, handle_feedback, handle_metrics, handle_quadrants, handle_rank,
    parse_reference_time, RankView,
};
