use anyhow::Result;
use hud_core::summarize;

use crate::cli_utils;

pub fn run(snapshot_path: &str, json: bool) -> Result<()> {
    let snapshot = cli_utils::load_snapshot(snapshot_path)?;
    let summary = summarize(&snapshot);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Players tracked: {}", summary.players_tracked);
        println!("Total hands:     {}", summary.total_hands);
    }

    Ok(())
}
