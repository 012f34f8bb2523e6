use serde::{Deserialize, Serialize};

use crate::hand::PlayerFlags;

/// Cumulative preflop counters for one player.
///
/// Invariant: `pfr_hands <= vpip_hands <= hands_played`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerStats {
    pub hands_played: u32,
    pub vpip_hands: u32,
    pub pfr_hands: u32,
}

impl PlayerStats {
    /// Add one finished hand.
    ///
    /// Once `hands_played` reaches `u32::MAX` the counters stop together, so
    /// the ordering invariant still holds.
    pub fn record(&mut self, flags: PlayerFlags) {
        let Some(hands_played) = self.hands_played.checked_add(1) else {
            return;
        };
        self.hands_played = hands_played;
        if flags.counted_vpip {
            self.vpip_hands = self.vpip_hands.saturating_add(1);
        }
        if flags.counted_pfr {
            self.pfr_hands = self.pfr_hands.saturating_add(1);
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.pfr_hands <= self.vpip_hands && self.vpip_hands <= self.hands_played
    }

    pub fn has_data(&self) -> bool {
        self.hands_played > 0
    }

    pub fn vpip_pct(&self) -> f64 {
        percent(self.vpip_hands, self.hands_played)
    }

    pub fn pfr_pct(&self) -> f64 {
        percent(self.pfr_hands, self.hands_played)
    }
}

fn percent(count: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * f64::from(count) / f64::from(total)
}
