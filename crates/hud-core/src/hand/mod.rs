//! Hand session state machine.
//!
//! - `HandPhase` - Inactive, Preflop, Postflop
//! - `HandSession` - per-hand VPIP/PFR flags, reset on each hand boundary

mod phase;
mod session;

pub use phase::*;
pub use session::*;
