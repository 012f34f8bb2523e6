//! # hud-core
//!
//! Core library for the preflop poker HUD.
//!
//! This crate provides:
//! - Classification of raw table log/chat lines into typed events
//! - The per-hand session state machine (Inactive, Preflop, Postflop)
//! - A ledger of cumulative VPIP/PFR counters keyed by stable player id
//! - The stats engine tying these together, with snapshot/restore/reset
//! - Snapshot persistence and renderer-facing exports

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod hand;
pub mod ledger;

// Re-export from classify module
pub use classify::{ActionKind, ClassifiedEvent, PlayerIdentity, Street, classify};

// Re-export from config module
pub use config::{EngineConfig, EngineConfigBuilder};

// Re-export from engine module
pub use engine::{
    BatchReport, Clock, FeedLine, FixedClock, IngestOutcome, StatsEngine, SystemClock,
};

// Re-export from error module
pub use error::{Error, Result};

// Re-export from export module
pub use export::{
    SnapshotSummary, format_console_table, format_hud, format_hud_line, generate_snapshot_json,
    generate_snapshot_tsv, summarize,
};

// Re-export from hand module
pub use hand::{HandPhase, HandSession, PlayerFlags};

// Re-export from ledger module
pub use ledger::{Ledger, LedgerEntry, PlayerSnapshot, PlayerStats, Snapshot};
