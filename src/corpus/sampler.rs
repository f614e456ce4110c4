//! Rank-based sampling of the sorted vocabulary.

use serde::{Deserialize, Serialize};

/// Every `SAMPLE_INTERVAL`-th word is emitted.
pub const SAMPLE_INTERVAL: usize = 10;

/// Every `MISSPELL_INTERVAL`-th word is emitted misspelled.
pub const MISSPELL_INTERVAL: usize = 100;

/// What to do with the word at a given rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleAction {
    /// Not part of the sample.
    Skip,
    /// Emit the word verbatim.
    Keep,
    /// Emit a misspelled variant.
    Misspell,
}

impl SampleAction {
    /// Decide the action for a 1-based rank.
    ///
    /// This samples 10% of the vocabulary and misspells 10% of that sample.
    pub fn for_rank(rank: usize) -> Self {
        if rank % SAMPLE_INTERVAL != 0 {
            SampleAction::Skip
        } else if rank % MISSPELL_INTERVAL != 0 {
            SampleAction::Keep
        } else {
            SampleAction::Misspell
        }
    }

    pub fn is_emitted(self) -> bool {
        self != SampleAction::Skip
    }
}
