//! Prune command: drop players inactive beyond the retention window.

use anyhow::Result;
use chrono::Utc;
use hud_core::EngineConfig;
use hud_core::config::retention;

use crate::cli_utils;

pub fn run(config: &EngineConfig, snapshot_path: &str, retention_days: Option<u32>) -> Result<()> {
    let mut snapshot = cli_utils::load_snapshot(snapshot_path)?;

    let window = match retention_days {
        Some(days) => retention::window(days),
        None => config.retention_window(),
    };
    let removed = snapshot.prune_inactive(Utc::now(), window);

    if removed > 0 {
        cli_utils::save_snapshot(&mut snapshot, snapshot_path)?;
    }
    eprintln!(
        "Removed {} inactive players, {} remain",
        removed,
        snapshot.len()
    );

    Ok(())
}
