mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise warn, or debug with --verbose
    let default_filter = if args.verbose {
        "hud_cli=debug,hud_core=debug"
    } else {
        "hud_cli=warn,hud_core=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli_utils::load_config(&args.config)?;

    match args.command {
        Command::Replay {
            feed,
            snapshot,
            format,
        } => commands::replay::run(&config, &feed, &snapshot, format),
        Command::Show { snapshot, format } => commands::show::run(&config, &snapshot, format),
        Command::Summary { snapshot, json } => commands::summary::run(&snapshot, json),
        Command::Prune {
            snapshot,
            retention_days,
        } => commands::prune::run(&config, &snapshot, retention_days),
        Command::Reset { snapshot } => commands::reset::run(&snapshot),
        Command::Classify { line } => commands::classify::run(&line),
    }
}
