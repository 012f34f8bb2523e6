/// One line delivered by the feed, optionally tagged with a monotonic
/// sequence token used to skip replayed lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedLine {
    pub seq: Option<u64>,
    pub text: String,
}

impl FeedLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            seq: None,
            text: text.into(),
        }
    }

    pub fn with_seq(seq: u64, text: impl Into<String>) -> Self {
        Self {
            seq: Some(seq),
            text: text.into(),
        }
    }
}

/// What `ingest` did with a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Sequence token at or before the cursor; nothing happened
    Replayed,
    /// Unrecognized, or not applicable in the current hand phase
    Ignored,
    /// Changed the hand in progress
    Applied,
    /// A hand was committed to the ledger
    Committed { hand_number: u64, players: usize },
}

impl IngestOutcome {
    pub fn is_commit(&self) -> bool {
        matches!(self, IngestOutcome::Committed { .. })
    }
}

/// Totals for a batch of lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchReport {
    pub lines: usize,
    pub replayed: usize,
    pub ignored: usize,
    pub commits: usize,
}

impl BatchReport {
    pub(crate) fn add(&mut self, outcome: IngestOutcome) {
        self.lines += 1;
        match outcome {
            IngestOutcome::Replayed => self.replayed += 1,
            IngestOutcome::Ignored => self.ignored += 1,
            IngestOutcome::Applied => {}
            IngestOutcome::Committed { .. } => self.commits += 1,
        }
    }
}
