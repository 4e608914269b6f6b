//! Filter predicate over catalog cards.
//!
//! A card passes when every configured criterion holds. Set criteria are
//! OR-matched within themselves; an empty set or query is skipped.

use crate::cards::Card;

use super::state::FilterState;

/// A `FilterState` with its text queries lowercased once per pass.
#[derive(Debug)]
pub struct CompiledFilter<'f> {
    state: &'f FilterState,
    name_query: String,
    effect_query: String,
}

impl<'f> CompiledFilter<'f> {
    #[must_use]
    pub fn new(state: &'f FilterState) -> Self {
        Self {
            state,
            name_query: state.name_query.to_lowercase(),
            effect_query: state.effect_query.to_lowercase(),
        }
    }

    /// Check a single card against every criterion.
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        let f = self.state;

        if !self.name_query.is_empty() && !card.name.to_lowercase().contains(&self.name_query) {
            return false;
        }
        if !self.effect_query.is_empty()
            && !card.description.to_lowercase().contains(&self.effect_query)
        {
            return false;
        }
        if !f.types.is_empty() && !f.types.contains(&card.card_type) {
            return false;
        }
        if !f.suits.is_empty() && !card.suits.iter().any(|s| f.suits.contains(s)) {
            return false;
        }
        if !f.subtypes.is_empty() && !card.subtypes.iter().any(|s| f.subtypes.contains(s)) {
            return false;
        }
        if !f.triggers.is_empty() && !f.triggers.contains(&card.trigger) {
            return false;
        }

        f.strength_range.contains(card.strength) && f.intel_range.contains(card.intel)
    }
}

/// Check a single card against `filters`.
#[must_use]
pub fn matches(card: &Card, filters: &FilterState) -> bool {
    CompiledFilter::new(filters).matches(card)
}

/// Lazily yield the cards accepted by `filters`, in slice order.
pub fn filter_iter<'a>(
    cards: &'a [Card],
    filters: &'a FilterState,
) -> impl Iterator<Item = &'a Card> + 'a {
    let compiled = CompiledFilter::new(filters);
    cards.iter().filter(move |card| compiled.matches(card))
}

/// Collect the cards accepted by `filters`, preserving catalog order.
///
/// ## Example
///
/// ```
/// use spies_deck::cards::Catalog;
/// use spies_deck::filter::{filter_catalog, FilterState};
///
/// let catalog = Catalog::bundled().unwrap();
/// let spies = filter_catalog(&catalog, &FilterState::new().with_name("SPY"));
///
/// assert_eq!(spies.len(), 1);
/// assert_eq!(spies[0].name, "Example Spy");
/// ```
pub fn filter_catalog<'a, I>(cards: I, filters: &FilterState) -> Vec<&'a Card>
where
    I: IntoIterator<Item = &'a Card>,
{
    let compiled = CompiledFilter::new(filters);
    cards.into_iter().filter(|card| compiled.matches(card)).collect()
}
