//! Deck-building policy constants.
//!
//! `DeckRules` carries the two numbers every deck operation depends on:
//! how many copies of one card a deck may hold, and the advisory deck
//! size shown in summaries. The copy limit is shared by the store's add
//! path and the deck code decoder so the two can never disagree.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default per-card copy limit.
pub const DEFAULT_MAX_COPIES: u32 = 2;

/// Default advisory deck size.
pub const DEFAULT_DECK_SIZE_TARGET: u32 = 30;

/// Deck-building rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDeckRules")]
pub struct DeckRules {
    /// Maximum copies of a single card (default: 2).
    /// Adding past this limit is a silent no-op.
    max_copies: u32,

    /// Advisory total deck size (default: 30).
    /// Never enforced; surfaced in stats and reports only.
    pub deck_size_target: u32,
}

impl Default for DeckRules {
    fn default() -> Self {
        Self {
            max_copies: DEFAULT_MAX_COPIES,
            deck_size_target: DEFAULT_DECK_SIZE_TARGET,
        }
    }
}

#[derive(Deserialize)]
struct RawDeckRules {
    max_copies: u32,
    deck_size_target: u32,
}

impl TryFrom<RawDeckRules> for DeckRules {
    type Error = ConfigError;

    fn try_from(raw: RawDeckRules) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.max_copies)?.with_deck_size_target(raw.deck_size_target))
    }
}

impl DeckRules {
    /// Create rules with a custom copy limit.
    pub fn new(max_copies: u32) -> Result<Self, ConfigError> {
        Self::default().with_max_copies(max_copies)
    }

    /// Replace the copy limit. Zero is rejected.
    pub fn with_max_copies(mut self, max_copies: u32) -> Result<Self, ConfigError> {
        if max_copies == 0 {
            return Err(ConfigError::ZeroCopyLimit);
        }
        self.max_copies = max_copies;
        Ok(self)
    }

    /// Replace the advisory deck size.
    #[must_use]
    pub fn with_deck_size_target(mut self, target: u32) -> Self {
        self.deck_size_target = target;
        self
    }

    /// Per-card copy limit.
    #[must_use]
    pub const fn max_copies(&self) -> u32 {
        self.max_copies
    }

    /// Check whether `quantity` is a legal per-card count.
    #[must_use]
    pub fn allows_quantity(&self, quantity: u32) -> bool {
        (1..=self.max_copies).contains(&quantity)
    }
}
