//! Show command for rendering stored statistics.

use anyhow::Result;
use hud_core::{
    EngineConfig, format_console_table, format_hud, generate_snapshot_json, generate_snapshot_tsv,
};

use crate::cli::OutputFormat;
use crate::cli_utils;

pub fn run(config: &EngineConfig, snapshot_path: &str, format: OutputFormat) -> Result<()> {
    let snapshot = cli_utils::load_snapshot(snapshot_path)?;

    let content = match format {
        OutputFormat::Table => format_console_table(&snapshot),
        OutputFormat::Tsv => generate_snapshot_tsv(&snapshot),
        OutputFormat::Json => generate_snapshot_json(&snapshot)?,
        OutputFormat::Hud => format_hud(&snapshot, config.show_hand_count),
    };
    println!("{}", content.trim_end());

    Ok(())
}
