//! # spies-deck
//!
//! Deck composition and filtering engine for the S.P.I.E.S. card game.
//!
//! ## Design Principles
//!
//! 1. **Immutable Catalog**: Cards are loaded and validated once at startup.
//!    Nothing downstream can mutate a card.
//!
//! 2. **Snapshots, Not Shared Mutation**: A `Deck` is a persistent value.
//!    Every change produces a new snapshot; readers never see torn state.
//!
//! 3. **Derived Values Stay Derived**: Filtered views and statistics are
//!    pure functions of the current snapshot, never stored separately.
//!
//! 4. **All-or-Nothing Import**: A deck code either validates completely
//!    and replaces the deck, or the deck is left untouched.
//!
//! ## Modules
//!
//! - `core`: Deck rules and error types
//! - `cards`: Card attributes, definitions and the catalog
//! - `filter`: Multi-criteria catalog filtering
//! - `deck`: Deck snapshots, the session store and statistics
//! - `codec`: Deck codes and the text export

pub mod core;
pub mod cards;
pub mod filter;
pub mod deck;
pub mod codec;

// Re-export commonly used types
pub use crate::core::{CatalogError, ConfigError, DecodeError, DeckRules};

pub use crate::cards::{Card, CardId, CardSubtype, CardSuit, CardTrigger, CardType, Catalog};

pub use crate::filter::{filter_catalog, FilterState, StatRange};

pub use crate::deck::{compute_stats, Deck, DeckEntry, DeckStats, DeckStore};

pub use crate::codec::{decode, encode, DeckReport};
