//! Deck snapshots and the session-owned deck store.
//!
//! `Deck` is an immutable value: every mutation builds a new snapshot
//! backed by an `im::Vector`, so handing a snapshot to a reader is O(1)
//! and the reader can never observe a half-applied change.
//!
//! `DeckStore` owns the current snapshot for one session. It swaps in the
//! new snapshot on each change, bumps a version counter and recomputes the
//! deck statistics, so stats can never drift from the deck they describe.
//!
//! ## Invariants
//!
//! - At most one entry per card id
//! - Every entry has `quantity >= 1`; an entry reaching zero is removed
//! - Entries keep the order in which their cards were first added

use im::Vector;
use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::debug;

use super::stats::{compute_stats, DeckStats};
use crate::cards::{Card, CardId};
use crate::core::config::DeckRules;

/// A card held in a deck, with its copy count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeckEntry {
    pub card: Card,
    quantity: u32,
}

impl DeckEntry {
    /// Copies of this card in the deck. Always at least 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    #[must_use]
    pub fn id(&self) -> &CardId {
        &self.card.id
    }
}

/// Immutable deck snapshot.
///
/// ## Example
///
/// ```
/// use spies_deck::cards::{Card, CardSuit, CardType};
/// use spies_deck::core::DeckRules;
/// use spies_deck::deck::Deck;
///
/// let rules = DeckRules::default();
/// let card = Card::new("1", "Courier", CardType::Agent).with_suits([CardSuit::Transport]);
///
/// let deck = Deck::new()
///     .with_card(&card, &rules)
///     .with_card(&card, &rules)
///     .with_card(&card, &rules); // capped at 2
///
/// assert_eq!(deck.quantity_of("1"), 2);
/// assert_eq!(deck.without_card("1").quantity_of("1"), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Deck {
    entries: Vector<DeckEntry>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.card.id.as_str() == id)
    }

    /// Add one copy of `card`.
    ///
    /// A new card enters with quantity 1. A card already at the copy limit
    /// is left alone and the returned deck equals `self`.
    #[must_use]
    pub fn with_card(&self, card: &Card, rules: &DeckRules) -> Deck {
        let mut entries = self.entries.clone();
        match self.position(card.id.as_str()) {
            Some(index) => {
                let entry = &mut entries[index];
                if entry.quantity >= rules.max_copies() {
                    return self.clone();
                }
                entry.quantity += 1;
            }
            None => entries.push_back(DeckEntry {
                card: card.clone(),
                quantity: 1,
            }),
        }
        Deck { entries }
    }

    /// Remove one copy of the card with `id`. Unknown ids are a no-op.
    #[must_use]
    pub fn without_card(&self, id: &str) -> Deck {
        let Some(index) = self.position(id) else {
            return self.clone();
        };
        let mut entries = self.entries.clone();
        if entries[index].quantity <= 1 {
            entries.remove(index);
        } else {
            entries[index].quantity -= 1;
        }
        Deck { entries }
    }

    /// Copies of the card with `id` (0 if absent).
    #[must_use]
    pub fn quantity_of(&self, id: &str) -> u32 {
        self.position(id).map_or(0, |i| self.entries[i].quantity)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> im::vector::Iter<'_, DeckEntry> {
        self.entries.iter()
    }

    /// Number of distinct cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_cards(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Entries ordered by ascending Intel, ties kept in insertion order.
    #[must_use]
    pub fn entries_by_intel(&self) -> Vec<&DeckEntry> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by_key(|e| e.card.intel);
        entries
    }

    /// id -> quantity view, ignoring entry order.
    #[must_use]
    pub fn quantities(&self) -> FxHashMap<&str, u32> {
        self.entries
            .iter()
            .map(|e| (e.card.id.as_str(), e.quantity))
            .collect()
    }

    /// Same cards with the same quantities, in any order.
    #[must_use]
    pub fn same_cards(&self, other: &Deck) -> bool {
        self.len() == other.len() && self.quantities() == other.quantities()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a DeckEntry;
    type IntoIter = im::vector::Iter<'a, DeckEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Session-owned deck state.
///
/// All mutations are synchronous and total: they never fail, and an
/// add at the copy limit or a remove of an absent card changes nothing
/// (the version stays the same).
#[derive(Clone, Debug, Default)]
pub struct DeckStore {
    rules: DeckRules,
    deck: Deck,
    stats: DeckStats,
    version: u64,
}

impl DeckStore {
    /// Create an empty store with the given rules.
    #[must_use]
    pub fn new(rules: DeckRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn rules(&self) -> &DeckRules {
        &self.rules
    }

    /// The current snapshot.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Statistics for the current snapshot.
    #[must_use]
    pub fn stats(&self) -> &DeckStats {
        &self.stats
    }

    /// Bumped on every change to the deck.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Add one copy of `card`, up to the copy limit.
    pub fn add_card(&mut self, card: &Card) -> &Deck {
        let next = self.deck.with_card(card, &self.rules);
        if next == self.deck {
            debug!(card = %card.id, max = self.rules.max_copies(), "copy limit reached");
        } else {
            debug!(card = %card.id, quantity = next.quantity_of(card.id.as_str()), "card added");
        }
        self.replace(next)
    }

    /// Remove one copy of `card`.
    pub fn remove_card(&mut self, card: &Card) -> &Deck {
        let next = self.deck.without_card(card.id.as_str());
        debug!(card = %card.id, quantity = next.quantity_of(card.id.as_str()), "card removed");
        self.replace(next)
    }

    /// Empty the deck.
    pub fn clear(&mut self) -> &Deck {
        debug!(cards = self.deck.total_cards(), "deck cleared");
        self.replace(Deck::new())
    }

    /// Copies of the card with `id` (0 if absent).
    #[must_use]
    pub fn quantity_of(&self, id: &str) -> u32 {
        self.deck.quantity_of(id)
    }

    /// Whether one more copy of the card with `id` would be accepted.
    #[must_use]
    pub fn can_add(&self, id: &str) -> bool {
        self.quantity_of(id) < self.rules.max_copies()
    }

    /// Swap in a new snapshot. No-op when nothing changed.
    pub(crate) fn replace(&mut self, next: Deck) -> &Deck {
        if next != self.deck {
            self.stats = compute_stats(&next);
            self.deck = next;
            self.version += 1;
        }
        &self.deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardSuit, CardType};

    fn card(id: &str, intel: u8) -> Card {
        Card::new(id, format!("Card {id}"), CardType::Agent)
            .with_suits([CardSuit::Search])
            .with_stats(intel, 1)
    }

    #[test]
    fn test_add_new_card() {
        let mut store = DeckStore::default();
        store.add_card(&card("1", 0));

        assert_eq!(store.quantity_of("1"), 1);
        assert_eq!(store.deck().len(), 1);
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn test_add_respects_cap() {
        let mut store = DeckStore::default();
        let c = card("1", 0);
        for _ in 0..3 {
            store.add_card(&c);
        }

        assert_eq!(store.quantity_of("1"), 2);
        assert!(!store.can_add("1"));
        // Third add was a no-op
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn test_custom_cap() {
        let mut store = DeckStore::new(DeckRules::new(3).unwrap());
        let c = card("1", 0);
        for _ in 0..5 {
            store.add_card(&c);
        }
        assert_eq!(store.quantity_of("1"), 3);
    }

    #[test]
    fn test_remove_decrements_then_deletes() {
        let mut store = DeckStore::default();
        let c = card("1", 0);
        store.add_card(&c);
        store.add_card(&c);

        store.remove_card(&c);
        assert_eq!(store.quantity_of("1"), 1);
        assert!(store.deck().contains("1"));

        store.remove_card(&c);
        assert_eq!(store.quantity_of("1"), 0);
        assert!(store.deck().is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = DeckStore::default();
        store.add_card(&card("1", 0));
        let before = store.version();

        store.remove_card(&card("2", 0));
        assert_eq!(store.version(), before);
        assert_eq!(store.deck().len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut store = DeckStore::default();
        store.add_card(&card("1", 0));
        store.add_card(&card("2", 0));

        store.clear();
        assert!(store.deck().is_empty());
        assert_eq!(store.stats().total_cards, 0);
    }

    #[test]
    fn test_insertion_order_kept() {
        let mut store = DeckStore::default();
        store.add_card(&card("b", 0));
        store.add_card(&card("a", 0));
        store.add_card(&card("b", 0));

        let ids: Vec<_> = store.deck().iter().map(|e| e.id().as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_snapshots_are_independent() {
        let mut store = DeckStore::default();
        store.add_card(&card("1", 0));
        let snapshot = store.deck().clone();

        store.add_card(&card("2", 0));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.deck().len(), 2);
    }

    #[test]
    fn test_stats_follow_mutations() {
        let mut store = DeckStore::default();
        store.add_card(&card("1", 4));
        store.add_card(&card("1", 4));
        assert_eq!(store.stats().total_cards, 2);
        assert_eq!(store.stats().average_intel, 4.0);
    }

    #[test]
    fn test_entries_by_intel() {
        let deck = Deck::new()
            .with_card(&card("hi", 9), &DeckRules::default())
            .with_card(&card("lo", 1), &DeckRules::default())
            .with_card(&card("mid", 5), &DeckRules::default());

        let ids: Vec<_> = deck.entries_by_intel().iter().map(|e| e.id().as_str()).collect();
        assert_eq!(ids, vec!["lo", "mid", "hi"]);
    }

    #[test]
    fn test_same_cards_ignores_order() {
        let rules = DeckRules::default();
        let a = Deck::new().with_card(&card("1", 0), &rules).with_card(&card("2", 0), &rules);
        let b = Deck::new().with_card(&card("2", 0), &rules).with_card(&card("1", 0), &rules);

        assert_ne!(a, b);
        assert!(a.same_cards(&b));
        assert!(!a.same_cards(&a.without_card("1")));
    }
}
