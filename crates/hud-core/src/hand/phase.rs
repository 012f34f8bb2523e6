use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

/// Phase of the hand currently being observed
///
/// ## State Transition Rules
///
/// Valid transitions:
/// - Inactive -> Preflop (hand start)
/// - Preflop -> Postflop (flop revealed)
/// - Preflop | Postflop -> Inactive (hand end)
///
/// Invalid transitions (blocked):
/// - Inactive -> Postflop (a street cannot be dealt outside a hand)
/// - Postflop -> Preflop (streets only move forward)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, IntoStaticStr,
)]
pub enum HandPhase {
    #[default]
    Inactive,
    Preflop,
    Postflop,
}

impl HandPhase {
    pub fn is_active(self) -> bool {
        self != HandPhase::Inactive
    }

    /// Check if a phase transition is valid
    pub fn is_valid_transition(from: HandPhase, to: HandPhase) -> bool {
        if from == to {
            return true;
        }

        matches!(
            (from, to),
            (HandPhase::Inactive, HandPhase::Preflop)
                | (HandPhase::Preflop, HandPhase::Postflop)
                | (HandPhase::Preflop, HandPhase::Inactive)
                | (HandPhase::Postflop, HandPhase::Inactive)
        )
    }
}

impl std::fmt::Display for HandPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
