//! Stats engine: drives the hand session from classified feed lines and
//! commits finished hands into the ledger.
//!
//! The engine is synchronous and not reentrant. Callers on a multi-threaded
//! host must serialize access, e.g. with one `Mutex<StatsEngine>`. Lines must
//! arrive in non-decreasing feed order; only exact replays are filtered.

mod clock;
mod feed;

pub use clock::*;
pub use feed::*;

use tracing::{debug, info, warn};

use crate::classify::{ClassifiedEvent, PlayerIdentity, classify};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::hand::{HandPhase, HandSession};
use crate::ledger::{Ledger, LedgerEntry, Snapshot};

pub struct StatsEngine<C: Clock = SystemClock> {
    config: EngineConfig,
    clock: C,
    session: HandSession,
    ledger: Ledger,
    /// Last processed feed sequence token
    cursor: Option<u64>,
}

impl StatsEngine<SystemClock> {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for StatsEngine<SystemClock> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<C: Clock> StatsEngine<C> {
    pub fn with_clock(config: EngineConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            session: HandSession::new(),
            ledger: Ledger::new(),
            cursor: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn phase(&self) -> HandPhase {
        self.session.phase()
    }

    pub fn hand_number(&self) -> u64 {
        self.session.hand_number()
    }

    pub fn cursor(&self) -> Option<u64> {
        self.cursor
    }

    /// Read-only view of one ledger entry
    pub fn player(&self, player_id: &str) -> Option<&LedgerEntry> {
        self.ledger.get(player_id)
    }

    /// Ingest a line that carries no sequence token
    pub fn ingest(&mut self, line: &str) -> IngestOutcome {
        self.dispatch(classify(line))
    }

    /// Ingest a line tagged with a feed sequence token. Lines at or before
    /// the last processed token are skipped.
    ///
    /// Tokens must be strictly increasing across distinct lines: a second
    /// line carrying the same token as the previous one is treated as a
    /// replay and dropped.
    pub fn ingest_seq(&mut self, seq: u64, line: &str) -> IngestOutcome {
        if let Some(cursor) = self.cursor
            && seq <= cursor
        {
            debug!("Skipping replayed line (seq {} <= cursor {})", seq, cursor);
            return IngestOutcome::Replayed;
        }
        let outcome = self.ingest(line);
        self.cursor = Some(seq);
        outcome
    }

    pub fn ingest_feed_line(&mut self, line: &FeedLine) -> IngestOutcome {
        match line.seq {
            Some(seq) => self.ingest_seq(seq, &line.text),
            None => self.ingest(&line.text),
        }
    }

    pub fn ingest_batch<'a, I>(&mut self, lines: I) -> BatchReport
    where
        I: IntoIterator<Item = &'a FeedLine>,
    {
        let mut report = BatchReport::default();
        for line in lines {
            report.add(self.ingest_feed_line(line));
        }
        report
    }

    fn dispatch(&mut self, event: ClassifiedEvent) -> IngestOutcome {
        match event {
            ClassifiedEvent::HandStart { hand_id } => {
                let committed = if self.session.phase().is_active() {
                    warn!(
                        "Hand {} started before hand {} ended, closing it",
                        hand_id.map_or_else(|| "?".to_string(), |id| id.to_string()),
                        self.session.hand_number()
                    );
                    self.commit_hand()
                } else {
                    None
                };
                self.session.start(hand_id);
                debug!(
                    "Hand {} started (feed id {:?})",
                    self.session.hand_number(),
                    hand_id
                );
                committed.unwrap_or(IngestOutcome::Applied)
            }
            ClassifiedEvent::HandEnd => self.commit_hand().unwrap_or(IngestOutcome::Ignored),
            ClassifiedEvent::StreetAdvance(street) => {
                let was_preflop = self.session.phase() == HandPhase::Preflop;
                if self.session.advance(street) && was_preflop {
                    IngestOutcome::Applied
                } else {
                    IngestOutcome::Ignored
                }
            }
            ClassifiedEvent::PlayerAction { player, kind } => {
                if self.session.phase() != HandPhase::Preflop {
                    debug!("Dropped action outside preflop: {} {}", player, kind);
                    return IngestOutcome::Ignored;
                }
                debug!("Preflop action: {} {}", player, kind);
                self.session.record_action(player, kind);
                IngestOutcome::Applied
            }
            ClassifiedEvent::Unrecognized => IngestOutcome::Ignored,
        }
    }

    /// Close the hand in progress and commit its flags. The single point where
    /// ledger counters change.
    fn commit_hand(&mut self) -> Option<IngestOutcome> {
        let hand = self.session.finish()?;
        self.ledger.commit(&hand, self.clock.now());
        info!(
            "Hand {} committed with {} players",
            hand.hand_number,
            hand.participants.len()
        );
        Some(IngestOutcome::Committed {
            hand_number: hand.hand_number,
            players: hand.participants.len(),
        })
    }

    /// Register the players currently seated at the table.
    ///
    /// Creates ledger entries with zero counters for unknown players and
    /// refreshes display names. With `roster_counts_as_dealt`, players are
    /// also dealt into the hand in progress. Returns the number of new players.
    pub fn observe_roster(&mut self, players: &[PlayerIdentity]) -> usize {
        let now = self.clock.now();
        let mut added = 0;
        for player in players {
            if player.id.is_empty() {
                continue;
            }
            if self.ledger.observe(player, now) {
                added += 1;
            }
            if self.config.roster_counts_as_dealt {
                self.session.add_dealt(player.clone());
            }
        }
        if added > 0 {
            debug!("Roster scan added {} players", added);
        }
        added
    }

    /// Copy of the ledger with derived percentages and the feed cursor
    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = self.ledger.to_snapshot();
        snapshot.cursor = self.cursor;
        snapshot
    }

    /// Merge a previously persisted snapshot into the ledger.
    ///
    /// The snapshot is validated in full first; on error nothing is merged.
    /// The feed cursor moves to the later of the live and stored cursors, so
    /// lines counted before the snapshot stay skipped. Returns the number of
    /// players restored.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<usize> {
        if let Err(e) = snapshot.validate() {
            warn!("Refusing to restore snapshot: {}", e);
            return Err(e);
        }
        self.ledger.merge(snapshot);
        self.cursor = self.cursor.max(snapshot.cursor);
        info!(
            "Restored {} players (cursor {:?})",
            snapshot.len(),
            self.cursor
        );
        Ok(snapshot.len())
    }

    /// Clear the ledger and the hand in progress. The feed cursor is kept so
    /// replayed lines stay skipped.
    pub fn reset(&mut self) {
        self.ledger.clear();
        self.session.clear();
        info!("Statistics cleared");
    }
}
