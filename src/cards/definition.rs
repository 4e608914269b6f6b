//! Card definitions - static card data.
//!
//! A `Card` is one immutable catalog record. Deck state never copies
//! mutable data onto a card; quantities live in `DeckEntry`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::attributes::{CardSubtype, CardSuit, CardTrigger, CardType};

/// Highest legal value for `Intel` and `Strength`.
pub const MAX_STAT: u8 = 10;

/// Stable card identifier, as used in deck codes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl std::borrow::Borrow<str> for CardId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Suit list: one or two suits, order preserved for display.
pub type Suits = SmallVec<[CardSuit; 2]>;

/// Subtype list: zero or more subtypes.
pub type Subtypes = SmallVec<[CardSubtype; 2]>;

/// Immutable catalog card.
///
/// Field names on the wire follow the catalog interchange format
/// (`type`, `Intel`, `Strength`).
///
/// ## Example
///
/// ```
/// use spies_deck::cards::{Card, CardSuit, CardTrigger, CardType};
///
/// let agent = Card::new("2", "Example Agent", CardType::Agent)
///     .with_suits([CardSuit::Combat])
///     .with_stats(5, 7)
///     .with_trigger(CardTrigger::Ambush);
///
/// assert_eq!(agent.intel, 5);
/// assert!(agent.has_suit(CardSuit::Combat));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    pub name: String,

    /// Rules text, matched by effect searches.
    pub description: String,

    #[serde(rename = "type")]
    pub card_type: CardType,

    pub suits: Suits,

    #[serde(default)]
    pub subtypes: Subtypes,

    pub trigger: CardTrigger,

    #[serde(rename = "Intel")]
    pub intel: u8,

    #[serde(rename = "Strength")]
    pub strength: u8,

    /// Opaque image reference. Never interpreted here.
    #[serde(default)]
    pub image: String,
}

impl Card {
    /// Create a card with no suits, no subtypes, zero stats and no trigger.
    ///
    /// Use the `with_*` builders to fill in the rest.
    #[must_use]
    pub fn new(id: impl Into<CardId>, name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            card_type,
            suits: Suits::new(),
            subtypes: Subtypes::new(),
            trigger: CardTrigger::None,
            intel: 0,
            strength: 0,
            image: String::new(),
        }
    }

    #[must_use]
    pub fn with_suits(mut self, suits: impl IntoIterator<Item = CardSuit>) -> Self {
        self.suits = suits.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_subtypes(mut self, subtypes: impl IntoIterator<Item = CardSubtype>) -> Self {
        self.subtypes = subtypes.into_iter().collect();
        self
    }

    /// Set `Intel` and `Strength`.
    #[must_use]
    pub fn with_stats(mut self, intel: u8, strength: u8) -> Self {
        self.intel = intel;
        self.strength = strength;
        self
    }

    #[must_use]
    pub fn with_trigger(mut self, trigger: CardTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Check if the card belongs to `suit`.
    #[must_use]
    pub fn has_suit(&self, suit: CardSuit) -> bool {
        self.suits.contains(&suit)
    }

    /// Check if the card carries `subtype`.
    #[must_use]
    pub fn has_subtype(&self, subtype: CardSubtype) -> bool {
        self.subtypes.contains(&subtype)
    }

    /// Suits joined for display, e.g. `Stealth/System`.
    #[must_use]
    pub fn suits_label(&self) -> String {
        self.suits
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join("/")
    }
}
