use std::path::PathBuf;

use clap::Parser;
use draughts::RuleConfig;
use draughts_cli::{Recorder, Session};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Plays draughts with a front end that sends JSON requests on stdin,
/// one per line. Responses go to stdout, logs to stderr.
#[derive(Parser)]
struct Args {
    /// Path to a JSON file with rule settings
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Record each game's requests and responses as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = match &args.rules {
        Some(path) => RuleConfig::load(path)?,
        None => RuleConfig::default(),
    };
    info!(first_turn = %config.first_turn, "Starting session");

    let recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let mut session = Session::new(config, recorder);
    session.run(std::io::stdin().lock(), std::io::stdout().lock())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
