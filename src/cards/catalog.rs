//! Card catalog: the ordered, immutable list of every card.
//!
//! The `Catalog` is built once at startup and validated in one pass.
//! After that it only hands out shared references, so nothing downstream
//! can mutate a card. Iteration follows the source order; lookup by id
//! goes through a hash index.

use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::info;

use super::definition::{Card, CardId, MAX_STAT};
use crate::core::error::CatalogError;

const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Validated card catalog.
///
/// ## Example
///
/// ```
/// use spies_deck::cards::{Card, CardSuit, CardType, Catalog};
///
/// let catalog = Catalog::from_cards(vec![
///     Card::new("1", "Courier", CardType::Agent).with_suits([CardSuit::Transport]),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.get("1").unwrap().name, "Courier");
/// assert!(catalog.get("99").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: Vec<Card>,
    index: FxHashMap<CardId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting the first record that breaks the card contract.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, CatalogError> {
        let mut index = FxHashMap::default();
        index.reserve(cards.len());

        for (position, card) in cards.iter().enumerate() {
            validate_card(card)?;
            if index.insert(card.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(card.id.to_string()));
            }
        }

        Ok(Self { cards, index })
    }

    /// Parse and validate a JSON array of card records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        Self::from_cards(cards)
    }

    /// Load a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&contents)?;
        info!(path = %path.display(), cards = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// The catalog shipped with the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Card> {
        self.index.get(id).map(|&position| &self.cards[position])
    }

    /// Check if a card ID exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All cards in catalog order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Check one record against the catalog contract.
///
/// Ids may not contain the deck code separators, so every id round-trips
/// through a deck code unambiguously.
fn validate_card(card: &Card) -> Result<(), CatalogError> {
    let id = card.id.as_str();
    if id.is_empty() || id.trim() != id || id.contains([',', '-']) {
        return Err(CatalogError::InvalidId(id.to_string()));
    }

    for (stat, value) in [("Intel", card.intel), ("Strength", card.strength)] {
        if value > MAX_STAT {
            return Err(CatalogError::StatOutOfRange {
                id: id.to_string(),
                stat,
                value,
            });
        }
    }

    if !(1..=2).contains(&card.suits.len()) {
        return Err(CatalogError::SuitCount {
            id: id.to_string(),
            count: card.suits.len(),
        });
    }
    if card.suits.len() == 2 && card.suits[0] == card.suits[1] {
        return Err(CatalogError::DuplicateSuit(id.to_string()));
    }

    let mut seen = FxHashSet::default();
    if !card.subtypes.iter().all(|s| seen.insert(*s)) {
        return Err(CatalogError::DuplicateSubtype(id.to_string()));
    }

    Ok(())
}
