//! Deck state and derived statistics.
//!
//! ## Key Types
//!
//! - `Deck`: Immutable snapshot of entries (card + quantity)
//! - `DeckStore`: Session owner of the current snapshot and its stats
//! - `DeckStats`: Totals, weighted averages and groupings

pub mod stats;
pub mod store;

pub use stats::{compute_stats, DeckStats};
pub use store::{Deck, DeckEntry, DeckStore};
