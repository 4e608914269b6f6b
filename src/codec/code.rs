//! Deck codes: the compact `id-quantity,id-quantity` text form of a deck.
//!
//! ## Format
//!
//! ```text
//! code  = entry ("," entry)*
//! entry = card-id "-" quantity
//! ```
//!
//! `quantity` is an unsigned base-10 literal. Entries are split on the
//! last `-`; catalog ids never contain `-` or `,`, so this is unambiguous.
//! Whitespace around the code and around each entry is ignored.
//!
//! Decoding is all-or-nothing: every entry is validated against the
//! catalog before a deck is built, and `DeckStore::import_code` only
//! swaps the result in after that succeeds.

use tracing::{info, warn};

use crate::cards::{Card, Catalog};
use crate::core::config::DeckRules;
use crate::core::error::DecodeError;
use crate::deck::{Deck, DeckStore};

/// Encode a deck as a deck code, in entry order.
///
/// ## Example
///
/// ```
/// use spies_deck::cards::Catalog;
/// use spies_deck::codec::{decode, encode};
/// use spies_deck::core::DeckRules;
///
/// let catalog = Catalog::bundled().unwrap();
/// let rules = DeckRules::default();
///
/// let deck = decode("2-2,4-1", &catalog, &rules).unwrap();
/// assert_eq!(encode(&deck), "2-2,4-1");
/// ```
#[must_use]
pub fn encode(deck: &Deck) -> String {
    deck.iter()
        .map(|entry| format!("{}-{}", entry.id(), entry.quantity()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Validate every entry of `code` without building a deck.
///
/// Returns `(card, quantity)` pairs in code order.
pub fn parse_entries<'c>(
    code: &str,
    catalog: &'c Catalog,
    rules: &DeckRules,
) -> Result<Vec<(&'c Card, u32)>, DecodeError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(DecodeError::EmptyCode);
    }

    code.split(',')
        .map(|segment| parse_entry(segment.trim(), catalog, rules))
        .collect()
}

fn parse_entry<'c>(
    segment: &str,
    catalog: &'c Catalog,
    rules: &DeckRules,
) -> Result<(&'c Card, u32), DecodeError> {
    let (id, quantity) = segment
        .rsplit_once('-')
        .filter(|(id, _)| !id.is_empty())
        .ok_or_else(|| DecodeError::MalformedEntry(segment.to_string()))?;

    let quantity = parse_quantity(quantity)
        .filter(|q| rules.allows_quantity(*q))
        .ok_or_else(|| DecodeError::InvalidQuantity(segment.to_string()))?;

    let card = catalog
        .get(id)
        .ok_or_else(|| DecodeError::UnknownCard(id.to_string()))?;

    Ok((card, quantity))
}

/// Digits only: no sign, no whitespace, no `+`.
fn parse_quantity(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Decode a deck code into a fresh deck.
///
/// Cards are added copy by copy in code order, so the copy limit still
/// applies when the same id appears in more than one entry.
pub fn decode(code: &str, catalog: &Catalog, rules: &DeckRules) -> Result<Deck, DecodeError> {
    let entries = parse_entries(code, catalog, rules)?;

    let mut deck = Deck::new();
    for (card, quantity) in entries {
        for _ in 0..quantity {
            deck = deck.with_card(card, rules);
        }
    }
    Ok(deck)
}

impl DeckStore {
    /// Replace the whole deck with the one described by `code`.
    ///
    /// On failure the current deck is left untouched.
    pub fn import_code(&mut self, code: &str, catalog: &Catalog) -> Result<&Deck, DecodeError> {
        let deck = match decode(code, catalog, self.rules()) {
            Ok(deck) => deck,
            Err(err) => {
                warn!(error = %err, "deck import rejected");
                return Err(err);
            }
        };
        info!(cards = deck.total_cards(), entries = deck.len(), "deck imported");
        Ok(self.replace(deck))
    }

    /// Deck code for the current snapshot.
    #[must_use]
    pub fn export_code(&self) -> String {
        encode(self.deck())
    }
}
