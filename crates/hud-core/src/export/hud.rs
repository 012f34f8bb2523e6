use crate::config::display::{NO_DATA_TEXT, PERCENT_DECIMALS};
use crate::ledger::{PlayerSnapshot, Snapshot};

use super::sorted_players;

/// Format a percentage for display, e.g. `23.5%`
pub fn format_percent(value: f64) -> String {
    format!("{:.*}%", PERCENT_DECIMALS, value)
}

/// Round to the displayed precision
pub fn round_percent(value: f64) -> f64 {
    let factor = 10f64.powi(PERCENT_DECIMALS as i32);
    (value * factor).round() / factor
}

/// Stats part of a HUD row: `VPIP|23.5% PFR|12.0% (17 hands)`.
///
/// Players with no hands yet show a placeholder instead of 0%.
pub fn format_hud_line(player: &PlayerSnapshot, show_hand_count: bool) -> String {
    if !player.stats.has_data() {
        return NO_DATA_TEXT.to_string();
    }

    let mut line = format!(
        "VPIP|{} PFR|{}",
        format_percent(player.vpip_pct),
        format_percent(player.pfr_pct)
    );
    if show_hand_count {
        let unit = if player.stats.hands_played == 1 {
            "hand"
        } else {
            "hands"
        };
        line.push_str(&format!(" ({} {})", player.stats.hands_played, unit));
    }
    line
}

/// Full HUD text, one player per line
pub fn format_hud(snapshot: &Snapshot, show_hand_count: bool) -> String {
    if snapshot.is_empty() {
        return "No player data yet. Play some hands!".to_string();
    }

    let players = sorted_players(snapshot);
    let width = players
        .iter()
        .map(|(_, p)| p.display_name.chars().count())
        .max()
        .unwrap_or(0);

    players
        .iter()
        .map(|(_, p)| {
            format!(
                "{:<width$}  {}",
                p.display_name,
                format_hud_line(p, show_hand_count),
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
