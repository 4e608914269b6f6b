//! Derived deck statistics for summaries and charts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::store::Deck;
use crate::cards::{CardSuit, CardTrigger, CardType};
use crate::core::config::DeckRules;

/// Summary figures for one deck snapshot.
///
/// Groupings only hold non-zero counts. Suit counts overlap: a dual-suit
/// card adds its quantity to both of its suits.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckStats {
    /// Sum of all quantities.
    pub total_cards: u32,

    /// Quantity-weighted mean Intel, one decimal place.
    pub average_intel: f64,

    /// Quantity-weighted mean Strength, one decimal place.
    pub average_strength: f64,

    pub counts_by_type: BTreeMap<CardType, u32>,

    pub counts_by_trigger: BTreeMap<CardTrigger, u32>,

    pub counts_by_suit: BTreeMap<CardSuit, u32>,
}

impl DeckStats {
    /// Cards still needed to reach the advisory size (0 once reached).
    #[must_use]
    pub fn remaining(&self, rules: &DeckRules) -> u32 {
        rules.deck_size_target.saturating_sub(self.total_cards)
    }

    /// Whether the deck is past the advisory size.
    #[must_use]
    pub fn is_over_target(&self, rules: &DeckRules) -> bool {
        self.total_cards > rules.deck_size_target
    }

    /// Trigger counts without `None`, as shown in trigger badges.
    pub fn keyword_triggers(&self) -> impl Iterator<Item = (CardTrigger, u32)> + '_ {
        self.counts_by_trigger
            .iter()
            .filter(|(trigger, _)| **trigger != CardTrigger::None)
            .map(|(trigger, count)| (*trigger, *count))
    }
}

/// Compute statistics for `deck`.
///
/// Averages are 0 for an empty deck.
#[must_use]
pub fn compute_stats(deck: &Deck) -> DeckStats {
    let mut stats = DeckStats::default();
    let mut intel_sum = 0u64;
    let mut strength_sum = 0u64;

    for entry in deck {
        let quantity = entry.quantity();
        let card = &entry.card;

        stats.total_cards += quantity;
        intel_sum += u64::from(card.intel) * u64::from(quantity);
        strength_sum += u64::from(card.strength) * u64::from(quantity);

        *stats.counts_by_type.entry(card.card_type).or_default() += quantity;
        *stats.counts_by_trigger.entry(card.trigger).or_default() += quantity;
        for suit in &card.suits {
            *stats.counts_by_suit.entry(*suit).or_default() += quantity;
        }
    }

    stats.average_intel = average(intel_sum, stats.total_cards);
    stats.average_strength = average(strength_sum, stats.total_cards);
    stats
}

fn average(sum: u64, count: u32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let mean = sum as f64 / f64::from(count);
    (mean * 10.0).round() / 10.0
}
