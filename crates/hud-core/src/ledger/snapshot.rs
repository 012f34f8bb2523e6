//! Persisted and rendered form of the ledger.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::PlayerStats;
use crate::classify::PlayerIdentity;
use crate::config::snapshot::FORMAT_VERSION;
use crate::error::{Error, Result};

/// One player's row in a snapshot.
///
/// The percentages are derived from the counters when the snapshot is taken
/// and ignored on restore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub display_name: String,
    #[serde(flatten)]
    pub stats: PlayerStats,
    #[serde(default)]
    pub vpip_pct: f64,
    #[serde(default)]
    pub pfr_pct: f64,
    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,
}

impl PlayerSnapshot {
    pub fn new(display_name: String, stats: PlayerStats, last_seen: Option<DateTime<Utc>>) -> Self {
        Self {
            display_name,
            stats,
            vpip_pct: stats.vpip_pct(),
            pfr_pct: stats.pfr_pct(),
            last_seen,
        }
    }
}

/// Copy of the ledger keyed by stable player id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
    /// Last feed sequence token processed before the snapshot was taken
    #[serde(default)]
    pub cursor: Option<u64>,
    #[serde(default)]
    pub players: BTreeMap<String, PlayerSnapshot>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            saved_at: None,
            cursor: None,
            players: BTreeMap::new(),
        }
    }
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, player_id: &str) -> Option<&PlayerSnapshot> {
        self.players.get(player_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerIdentity, &PlayerSnapshot)> {
        self.players
            .iter()
            .map(|(id, p)| (PlayerIdentity::new(id.as_str(), p.display_name.as_str()), p))
    }

    /// Reject snapshots written by another format version or whose counters
    /// break `pfr_hands <= vpip_hands <= hands_played`.
    pub fn validate(&self) -> Result<()> {
        if self.version != FORMAT_VERSION {
            return Err(Error::SnapshotVersionMismatch {
                expected: FORMAT_VERSION,
                actual: self.version,
            });
        }

        for (id, player) in &self.players {
            if id.is_empty() {
                return Err(Error::CorruptSnapshot("empty player id".to_string()));
            }
            if !player.stats.is_consistent() {
                return Err(Error::CorruptSnapshot(format!(
                    "player {} has inconsistent counters: hands={}, vpip={}, pfr={}",
                    id, player.stats.hands_played, player.stats.vpip_hands, player.stats.pfr_hands
                )));
            }
        }

        Ok(())
    }

    /// Parse and validate a snapshot
    pub fn from_json(content: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(content)
            .map_err(|e| Error::CorruptSnapshot(format!("unreadable snapshot: {}", e)))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        debug!("Saved snapshot with {} players to {:?}", self.len(), path);
        Ok(())
    }

    /// Remove players not seen within `retention` of `now`.
    ///
    /// Players with no recorded `last_seen` are kept. Returns the number removed.
    pub fn prune_inactive(&mut self, now: DateTime<Utc>, retention: Duration) -> usize {
        let cutoff = now - retention;
        let before = self.players.len();
        self.players
            .retain(|_, player| player.last_seen.is_none_or(|seen| seen >= cutoff));
        let removed = before - self.players.len();
        if removed > 0 {
            info!("Pruned {} inactive players", removed);
        }
        removed
    }
}
