//! Full snapshot export (TSV, JSON, console table)

use serde::Serialize;

use super::hud::{format_percent, round_percent};
use super::sorted_players;
use crate::config::display::NO_DATA_TEXT;
use crate::error::Result;
use crate::ledger::Snapshot;

/// Player row for JSON export
#[derive(Debug, Serialize)]
pub struct PlayerRowJson {
    pub id: String,
    pub display_name: String,
    pub hands_played: u32,
    pub vpip_hands: u32,
    pub pfr_hands: u32,
    /// `None` until the player has played a hand
    pub vpip: Option<f64>,
    pub pfr: Option<f64>,
}

/// Export data for JSON export
#[derive(Debug, Serialize)]
pub struct ExportDataJson {
    pub players: Vec<PlayerRowJson>,
}

const TSV_HEADER: [&str; 7] = [
    "Player ID",
    "Name",
    "Hands",
    "VPIP Hands",
    "PFR Hands",
    "VPIP %",
    "PFR %",
];

pub fn format_snapshot_tsv_header() -> String {
    TSV_HEADER.join("\t")
}

/// Generate TSV content; percentage cells are empty for players without hands
pub fn generate_snapshot_tsv(snapshot: &Snapshot) -> String {
    let mut lines = vec![format_snapshot_tsv_header()];

    for (id, player) in sorted_players(snapshot) {
        let (vpip, pfr) = if player.stats.has_data() {
            (
                format!("{:.1}", player.vpip_pct),
                format!("{:.1}", player.pfr_pct),
            )
        } else {
            (String::new(), String::new())
        };
        lines.push(
            [
                id.to_string(),
                player.display_name.replace('\t', " "),
                player.stats.hands_played.to_string(),
                player.stats.vpip_hands.to_string(),
                player.stats.pfr_hands.to_string(),
                vpip,
                pfr,
            ]
            .join("\t"),
        );
    }

    lines.join("\n")
}

pub fn generate_snapshot_json(snapshot: &Snapshot) -> Result<String> {
    let players = sorted_players(snapshot)
        .into_iter()
        .map(|(id, player)| {
            let has_data = player.stats.has_data();
            PlayerRowJson {
                id: id.to_string(),
                display_name: player.display_name.clone(),
                hands_played: player.stats.hands_played,
                vpip_hands: player.stats.vpip_hands,
                pfr_hands: player.stats.pfr_hands,
                vpip: has_data.then(|| round_percent(player.vpip_pct)),
                pfr: has_data.then(|| round_percent(player.pfr_pct)),
            }
        })
        .collect();

    Ok(serde_json::to_string_pretty(&ExportDataJson { players })?)
}

/// Format the snapshot as an aligned console table
pub fn format_console_table(snapshot: &Snapshot) -> String {
    let rows: Vec<[String; 4]> = sorted_players(snapshot)
        .into_iter()
        .map(|(_, player)| {
            let (vpip, pfr) = if player.stats.has_data() {
                (
                    format_percent(player.vpip_pct),
                    format_percent(player.pfr_pct),
                )
            } else {
                ("-".to_string(), "-".to_string())
            };
            [
                player.display_name.clone(),
                player.stats.hands_played.to_string(),
                vpip,
                pfr,
            ]
        })
        .collect();

    let headers = ["Player", "Hands", "VPIP", "PFR"];
    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = format!(
        "{:<w0$}  {:>w1$}  {:>w2$}  {:>w3$}\n",
        headers[0],
        headers[1],
        headers[2],
        headers[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3]
    );
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 6));
    out.push('\n');

    if rows.is_empty() {
        out.push_str(NO_DATA_TEXT);
        out.push('\n');
    }
    for row in rows {
        out.push_str(&format!(
            "{:<w0$}  {:>w1$}  {:>w2$}  {:>w3$}\n",
            row[0],
            row[1],
            row[2],
            row[3],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3]
        ));
    }
    out
}
