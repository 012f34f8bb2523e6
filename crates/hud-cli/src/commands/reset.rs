use anyhow::Result;
use hud_core::Snapshot;

use crate::cli_utils;

/// Clear all statistics by writing an empty snapshot
pub fn run(snapshot_path: &str) -> Result<()> {
    let mut snapshot = Snapshot::new();
    cli_utils::save_snapshot(&mut snapshot, snapshot_path)?;
    eprintln!("All statistics cleared: {}", snapshot_path);
    Ok(())
}
