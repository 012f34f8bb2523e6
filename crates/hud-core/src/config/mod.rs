//! Configuration and tuning constants.
//!
//! This module contains:
//! - `EngineConfig` - runtime options for the engine, renderer and CLI
//! - Retention, display and snapshot-format constants

mod engine;

pub use engine::*;

/// Ledger retention configuration.
pub mod retention {
    use chrono::Duration;

    /// Default number of days an inactive player is kept in a stored snapshot.
    pub const DEFAULT_RETENTION_DAYS: u32 = 7;

    /// Retention window for a number of days.
    pub fn window(days: u32) -> Duration {
        Duration::days(i64::from(days))
    }
}

/// Display configuration.
pub mod display {
    /// Decimal places shown for VPIP/PFR percentages.
    pub const PERCENT_DECIMALS: usize = 1;

    /// Text shown in place of percentages when a player has no hands yet.
    pub const NO_DATA_TEXT: &str = "no data yet";
}

/// Persisted snapshot format.
pub mod snapshot {
    /// Current snapshot format version. Bumped on incompatible changes.
    pub const FORMAT_VERSION: u32 = 1;
}
