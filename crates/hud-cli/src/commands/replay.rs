//! Replay command: feed a log file through the stats engine.

use anyhow::Result;
use hud_core::{EngineConfig, StatsEngine, format_console_table};
use tracing::info;

use crate::cli::FeedFormat;
use crate::cli_utils;

pub fn run(config: &EngineConfig, feed: &str, snapshot_path: &str, format: FeedFormat) -> Result<()> {
    let mut engine = StatsEngine::new(config.clone());

    // Restore even an empty snapshot: it may still carry the feed cursor.
    let stored = cli_utils::load_snapshot(snapshot_path)?;
    let restored = engine.restore(&stored)?;
    if restored > 0 {
        eprintln!("Restored {} players from {}", restored, snapshot_path);
    }

    let lines = cli_utils::read_feed(feed, format)?;
    let report = engine.ingest_batch(&lines);
    info!(
        "Ingested {} lines ({} replayed, {} ignored)",
        report.lines, report.replayed, report.ignored
    );
    eprintln!(
        "Processed {} lines, {} hands committed",
        report.lines, report.commits
    );

    let mut snapshot = engine.snapshot();
    print!("{}", format_console_table(&snapshot));

    if config.auto_save {
        cli_utils::save_snapshot(&mut snapshot, snapshot_path)?;
        eprintln!("Saved to: {}", snapshot_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_replaying_same_feed_twice_counts_once() {
        let temp = TempDir::new().unwrap();
        let feed = temp.path().join("feed.tsv");
        let snapshot = temp.path().join("stats.json");
        std::fs::write(
            &feed,
            "1\tstarting hand\n2\t\"Alice\"@p1 raises to 6\n3\tending hand\n",
        )
        .unwrap();
        let feed = feed.to_str().unwrap();
        let snapshot = snapshot.to_str().unwrap();

        let config = EngineConfig::default();
        run(&config, feed, snapshot, FeedFormat::Seq).unwrap();
        run(&config, feed, snapshot, FeedFormat::Seq).unwrap();

        let stored = cli_utils::load_snapshot(snapshot).unwrap();
        assert_eq!(stored.cursor, Some(3));
        assert_eq!(stored.get("p1").unwrap().stats.hands_played, 1);
    }
}
