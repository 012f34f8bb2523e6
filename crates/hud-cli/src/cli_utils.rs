//! Common CLI utility functions shared across commands.

use std::fs;
use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use hud_core::{EngineConfig, FeedLine, Snapshot};
use tracing::debug;

use crate::cli::FeedFormat;

/// Load the engine config, falling back to defaults when the file is absent.
pub fn load_config(path: &str) -> Result<EngineConfig> {
    if !Path::new(path).exists() {
        debug!("No config at {}, using defaults", path);
        return Ok(EngineConfig::default());
    }
    EngineConfig::load(path)
        .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path, e))
}

/// Load a snapshot file. A missing file is an empty snapshot; an unreadable
/// or invalid one is an error so it is never silently overwritten.
pub fn load_snapshot(path: &str) -> Result<Snapshot> {
    if !Path::new(path).exists() {
        debug!("No snapshot at {}, starting empty", path);
        return Ok(Snapshot::new());
    }
    Snapshot::load(path).map_err(|e| anyhow::anyhow!("Failed to load snapshot {}: {}", path, e))
}

/// Stamp and write a snapshot
pub fn save_snapshot(snapshot: &mut Snapshot, path: &str) -> Result<()> {
    snapshot.saved_at = Some(Utc::now());
    snapshot.save(path)?;
    Ok(())
}

pub fn read_feed(path: &str, format: FeedFormat) -> Result<Vec<FeedLine>> {
    let content = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read feed {}: {}", path, e))?;
    parse_feed(&content, format)
}

/// Split feed content into lines; in `Seq` format each line is
/// `<seq>\t<text>`.
pub fn parse_feed(content: &str, format: FeedFormat) -> Result<Vec<FeedLine>> {
    let mut lines = Vec::new();
    for (index, raw) in content.lines().enumerate() {
        match format {
            FeedFormat::Plain => lines.push(FeedLine::new(raw)),
            FeedFormat::Seq => {
                if raw.trim().is_empty() {
                    continue;
                }
                let Some((seq, text)) = raw.split_once('\t') else {
                    anyhow::bail!("Line {}: missing tab after sequence token", index + 1);
                };
                let seq: u64 = seq.trim().parse().map_err(|e| {
                    anyhow::anyhow!("Line {}: invalid sequence token {:?}: {}", index + 1, seq, e)
                })?;
                lines.push(FeedLine::with_seq(seq, text));
            }
        }
    }
    Ok(lines)
}
