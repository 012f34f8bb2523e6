//! Renderer-facing views of a snapshot.

mod hud;
mod table;

pub use hud::*;
pub use table::*;

use serde::Serialize;

use crate::ledger::{PlayerSnapshot, Snapshot};

/// Totals shown next to the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SnapshotSummary {
    pub players_tracked: usize,
    /// Most hands played by any single player
    pub total_hands: u32,
}

pub fn summarize(snapshot: &Snapshot) -> SnapshotSummary {
    SnapshotSummary {
        players_tracked: snapshot.len(),
        total_hands: snapshot
            .players
            .values()
            .map(|p| p.stats.hands_played)
            .max()
            .unwrap_or(0),
    }
}

/// Players ordered by hands played (most first), then name, then id
pub(crate) fn sorted_players(snapshot: &Snapshot) -> Vec<(&str, &PlayerSnapshot)> {
    let mut players: Vec<(&str, &PlayerSnapshot)> = snapshot
        .players
        .iter()
        .map(|(id, p)| (id.as_str(), p))
        .collect();
    players.sort_by(|(a_id, a), (b_id, b)| {
        b.stats
            .hands_played
            .cmp(&a.stats.hands_played)
            .then_with(|| a.display_name.cmp(&b.display_name))
            .then_with(|| a_id.cmp(b_id))
    });
    players
}
