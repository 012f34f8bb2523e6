mod snapshot;
mod stats;

pub use snapshot::{PlayerSnapshot, Snapshot};
pub use stats::PlayerStats;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::classify::PlayerIdentity;
use crate::hand::CompletedHand;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LedgerEntry {
    pub display_name: String,
    pub stats: PlayerStats,
    pub last_seen: Option<DateTime<Utc>>,
}

/// Cumulative per-player counters keyed by stable player id.
///
/// `commit` is the only operation that changes counters.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: HashMap<String, LedgerEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, player_id: &str) -> Option<&LedgerEntry> {
        self.entries.get(player_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &LedgerEntry)> {
        self.entries.iter()
    }

    fn entry(&mut self, player: &PlayerIdentity) -> &mut LedgerEntry {
        let entry = self
            .entries
            .entry(player.id.clone())
            .or_insert_with(|| LedgerEntry {
                display_name: player.display_name.clone(),
                ..Default::default()
            });
        if entry.display_name != player.display_name {
            debug!(
                "Player {} renamed: {} -> {}",
                player.id, entry.display_name, player.display_name
            );
            entry.display_name = player.display_name.clone();
        }
        entry
    }

    /// Register a player without touching counters. Returns true if the
    /// player was not known before.
    pub fn observe(&mut self, player: &PlayerIdentity, now: DateTime<Utc>) -> bool {
        let is_new = !self.entries.contains_key(&player.id);
        self.entry(player).last_seen = Some(now);
        is_new
    }

    /// Add a finished hand: one hand played for every participant, plus VPIP
    /// and PFR where flagged.
    pub fn commit(&mut self, hand: &CompletedHand, now: DateTime<Utc>) {
        for participant in &hand.participants {
            let entry = self.entry(&participant.identity);
            entry.stats.record(participant.flags);
            entry.last_seen = Some(now);
        }
    }

    /// Replace entries wholesale with the ones in `snapshot`. Entries absent
    /// from the snapshot are left as they are.
    pub fn merge(&mut self, snapshot: &Snapshot) {
        for (id, player) in &snapshot.players {
            self.entries.insert(
                id.clone(),
                LedgerEntry {
                    display_name: player.display_name.clone(),
                    stats: player.stats,
                    last_seen: player.last_seen,
                },
            );
        }
    }

    pub fn to_snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot::new();
        for (id, entry) in self.iter() {
            snapshot.players.insert(
                id.clone(),
                PlayerSnapshot::new(entry.display_name.clone(), entry.stats, entry.last_seen),
            );
        }
        snapshot
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
