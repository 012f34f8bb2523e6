use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

/// Stable player key plus a display name used only for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerIdentity {
    pub id: String,
    pub display_name: String,
}

impl PlayerIdentity {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }

    /// Identity for feeds that carry no stable id token.
    ///
    /// The display name doubles as the key, so two players sharing a name
    /// collapse into one ledger entry.
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            display_name: name,
        }
    }
}

impl std::fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.id == self.display_name {
            write!(f, "{}", self.display_name)
        } else {
            write!(f, "{} @ {}", self.display_name, self.id)
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum ActionKind {
    Call,
    Raise,
    Bet,
    #[strum(to_string = "AllIn", serialize = "all-in")]
    AllIn,
    Check,
    Fold,
    /// Forced blind, straddle or ante
    Post,
}

impl ActionKind {
    /// Voluntary chip commitment, counted for VPIP
    pub fn is_voluntary(self) -> bool {
        matches!(
            self,
            ActionKind::Call | ActionKind::Raise | ActionKind::Bet | ActionKind::AllIn
        )
    }

    /// Counted for PFR
    pub fn is_raise(self) -> bool {
        self == ActionKind::Raise
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Street {
    Flop,
    Turn,
    River,
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{}", name)
    }
}

/// Result of classifying one feed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedEvent {
    /// Start of a new hand, with the feed's hand number when it carries one
    HandStart { hand_id: Option<u64> },
    HandEnd,
    StreetAdvance(Street),
    PlayerAction {
        player: PlayerIdentity,
        kind: ActionKind,
    },
    Unrecognized,
}
