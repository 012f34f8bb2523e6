//! Feed line classification.
//!
//! This module turns one raw log or chat line into a typed event:
//! - `ClassifiedEvent` - hand boundary, street advance, player action or unrecognized
//! - `ActionKind` - what a player did, and whether it counts for VPIP/PFR
//! - `PlayerIdentity` - stable id plus display name of the acting player
//! - `classify` - the single classification function

mod event;
mod parser;

pub use event::*;
pub use parser::classify;
