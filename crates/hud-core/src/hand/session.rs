use std::collections::HashMap;

use tracing::{debug, warn};

use super::HandPhase;
use crate::classify::{ActionKind, PlayerIdentity, Street};

/// Per-hand flags for one player.
///
/// Flags are only ever set, so each one contributes at most once per hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerFlags {
    pub counted_vpip: bool,
    pub counted_pfr: bool,
}

impl PlayerFlags {
    fn apply(&mut self, kind: ActionKind) {
        if kind.is_voluntary() {
            self.counted_vpip = true;
        }
        if kind.is_raise() {
            self.counted_pfr = true;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandParticipant {
    pub identity: PlayerIdentity,
    pub flags: PlayerFlags,
}

/// A hand that has ended, ready to be committed to the ledger
#[derive(Debug, Clone)]
pub struct CompletedHand {
    pub hand_number: u64,
    pub hand_id: Option<u64>,
    pub participants: Vec<HandParticipant>,
}

/// Transient state of the hand in progress. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct HandSession {
    hand_number: u64,
    hand_id: Option<u64>,
    phase: HandPhase,
    participants: HashMap<String, HandParticipant>,
}

impl HandSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> HandPhase {
        self.phase
    }

    /// Number of hands started since creation or the last clear
    pub fn hand_number(&self) -> u64 {
        self.hand_number
    }

    /// Hand number announced by the feed for the hand in progress
    pub fn hand_id(&self) -> Option<u64> {
        self.hand_id
    }

    pub fn flags(&self, player_id: &str) -> Option<PlayerFlags> {
        self.participants.get(player_id).map(|p| p.flags)
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    fn transition(&mut self, to: HandPhase) -> bool {
        if !HandPhase::is_valid_transition(self.phase, to) {
            return false;
        }
        if self.phase != to {
            debug!("Hand phase: {} -> {}", self.phase, to);
        }
        self.phase = to;
        true
    }

    /// Begin a new hand. Returns false if a hand is already in progress;
    /// the caller must finish it first.
    pub fn start(&mut self, hand_id: Option<u64>) -> bool {
        if self.phase.is_active() {
            return false;
        }
        self.transition(HandPhase::Preflop);
        self.participants.clear();
        self.hand_number += 1;
        self.hand_id = hand_id;
        true
    }

    /// Move to postflop. Later streets keep the hand postflop.
    pub fn advance(&mut self, street: Street) -> bool {
        match self.phase {
            HandPhase::Preflop => self.transition(HandPhase::Postflop),
            HandPhase::Postflop => true,
            HandPhase::Inactive => {
                debug!("Ignoring {} outside of a hand", street);
                false
            }
        }
    }

    /// Record a preflop action. Actions in any other phase are dropped.
    pub fn record_action(&mut self, player: PlayerIdentity, kind: ActionKind) -> bool {
        if self.phase != HandPhase::Preflop {
            return false;
        }
        let participant = self.participant(player);
        participant.flags.apply(kind);
        true
    }

    /// Add a player dealt into the hand without any action.
    pub fn add_dealt(&mut self, player: PlayerIdentity) -> bool {
        if !self.phase.is_active() {
            return false;
        }
        self.participant(player);
        true
    }

    fn participant(&mut self, player: PlayerIdentity) -> &mut HandParticipant {
        let participant = self
            .participants
            .entry(player.id.clone())
            .or_insert_with(|| HandParticipant {
                identity: player.clone(),
                flags: PlayerFlags::default(),
            });
        if participant.identity.display_name != player.display_name {
            participant.identity.display_name = player.display_name;
        }
        participant
    }

    /// End the hand in progress and hand back its participants.
    ///
    /// Returns `None` when no hand is in progress.
    pub fn finish(&mut self) -> Option<CompletedHand> {
        if !self.phase.is_active() {
            warn!("Hand end received with no hand in progress, ignoring");
            return None;
        }
        self.transition(HandPhase::Inactive);

        let mut participants: Vec<HandParticipant> =
            self.participants.drain().map(|(_, p)| p).collect();
        participants.sort_by(|a, b| a.identity.id.cmp(&b.identity.id));

        Some(CompletedHand {
            hand_number: self.hand_number,
            hand_id: self.hand_id.take(),
            participants,
        })
    }

    /// Drop everything, including the hand counter
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> PlayerIdentity {
        PlayerIdentity::new("p1", "Alice")
    }

    fn bob() -> PlayerIdentity {
        PlayerIdentity::new("p2", "Bob")
    }

    #[test]
    fn test_new_session_is_inactive() {
        let session = HandSession::new();
        assert_eq!(session.phase(), HandPhase::Inactive);
        assert_eq!(session.hand_number(), 0);
        assert_eq!(session.participant_count(), 0);
    }

    #[test]
    fn test_start_increments_hand_number() {
        let mut session = HandSession::new();
        assert!(session.start(None));
        assert_eq!(session.phase(), HandPhase::Preflop);
        assert_eq!(session.hand_number(), 1);

        session.finish();
        assert!(session.start(Some(9)));
        assert_eq!(session.hand_number(), 2);
        assert_eq!(session.hand_id(), Some(9));
    }

    #[test]
    fn test_start_while_active_is_refused() {
        let mut session = HandSession::new();
        session.start(None);
        session.record_action(alice(), ActionKind::Call);

        assert!(!session.start(None));
        assert_eq!(session.hand_number(), 1);
        assert!(session.flags("p1").is_some());
    }

    #[test]
    fn test_flags_are_idempotent() {
        let mut session = HandSession::new();
        session.start(None);
        session.record_action(alice(), ActionKind::Call);
        session.record_action(alice(), ActionKind::Call);
        session.record_action(alice(), ActionKind::Raise);
        session.record_action(alice(), ActionKind::Raise);

        assert_eq!(
            session.flags("p1"),
            Some(PlayerFlags {
                counted_vpip: true,
                counted_pfr: true
            })
        );
        assert_eq!(session.participant_count(), 1);
    }

    #[test]
    fn test_non_qualifying_actions_create_participant() {
        let mut session = HandSession::new();
        session.start(None);
        session.record_action(bob(), ActionKind::Post);
        session.record_action(alice(), ActionKind::Check);

        assert_eq!(session.flags("p1"), Some(PlayerFlags::default()));
        assert_eq!(session.flags("p2"), Some(PlayerFlags::default()));
    }

    #[test]
    fn test_actions_dropped_postflop() {
        let mut session = HandSession::new();
        session.start(None);
        assert!(session.advance(Street::Flop));
        assert_eq!(session.phase(), HandPhase::Postflop);

        assert!(!session.record_action(alice(), ActionKind::Bet));
        assert!(session.flags("p1").is_none());
    }

    #[test]
    fn test_actions_dropped_when_inactive() {
        let mut session = HandSession::new();
        assert!(!session.record_action(alice(), ActionKind::Raise));
        assert!(!session.advance(Street::Flop));
        assert_eq!(session.phase(), HandPhase::Inactive);
    }

    #[test]
    fn test_later_streets_stay_postflop() {
        let mut session = HandSession::new();
        session.start(None);
        session.advance(Street::Flop);
        assert!(session.advance(Street::Turn));
        assert!(session.advance(Street::River));
        assert_eq!(session.phase(), HandPhase::Postflop);
    }

    #[test]
    fn test_finish_returns_participants_and_clears() {
        let mut session = HandSession::new();
        session.start(Some(4));
        session.record_action(bob(), ActionKind::Raise);
        session.record_action(alice(), ActionKind::Call);

        let hand = session.finish().unwrap();
        assert_eq!(hand.hand_number, 1);
        assert_eq!(hand.hand_id, Some(4));
        let ids: Vec<&str> = hand
            .participants
            .iter()
            .map(|p| p.identity.id.as_str())
            .collect();
        assert_eq!(ids, vec!["p1", "p2"]);

        assert_eq!(session.phase(), HandPhase::Inactive);
        assert_eq!(session.participant_count(), 0);
    }

    #[test]
    fn test_finish_when_inactive_is_noop() {
        let mut session = HandSession::new();
        assert!(session.finish().is_none());
    }

    #[test]
    fn test_display_name_refresh() {
        let mut session = HandSession::new();
        session.start(None);
        session.record_action(alice(), ActionKind::Post);
        session.record_action(PlayerIdentity::new("p1", "Alice2"), ActionKind::Call);

        let hand = session.finish().unwrap();
        assert_eq!(hand.participants.len(), 1);
        assert_eq!(hand.participants[0].identity.display_name, "Alice2");
    }

    #[test]
    fn test_add_dealt() {
        let mut session = HandSession::new();
        assert!(!session.add_dealt(alice()));

        session.start(None);
        assert!(session.add_dealt(alice()));
        session.record_action(alice(), ActionKind::Raise);
        assert!(session.add_dealt(alice()));
        assert_eq!(session.flags("p1").map(|f| f.counted_pfr), Some(true));
    }

    #[test]
    fn test_clear_resets_counter() {
        let mut session = HandSession::new();
        session.start(None);
        session.clear();
        assert_eq!(session.phase(), HandPhase::Inactive);
        assert_eq!(session.hand_number(), 0);
    }
}
