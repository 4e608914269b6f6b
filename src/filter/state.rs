//! Filter configuration.
//!
//! A `FilterState` is the full multi-criteria query over the catalog.
//! Empty text and empty sets mean "no constraint"; the stat ranges start
//! at the full `0..=10`. Ranges are validated when they are built, so a
//! `FilterState` can never hold `lo > hi`.

use serde::{Deserialize, Serialize};

use rustc_hash::FxHashSet;

use crate::cards::{CardSubtype, CardSuit, CardTrigger, CardType, MAX_STAT};
use crate::core::error::ConfigError;

/// Inclusive stat bounds with `0 <= lo <= hi <= 10`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct StatRange {
    lo: u8,
    hi: u8,
}

impl StatRange {
    /// The unconstrained range `0..=10`.
    pub const FULL: StatRange = StatRange { lo: 0, hi: MAX_STAT };

    /// Create a range, rejecting `lo > hi` and bounds above 10.
    pub fn new(lo: u8, hi: u8) -> Result<Self, ConfigError> {
        if lo > hi || hi > MAX_STAT {
            return Err(ConfigError::InvalidRange { lo, hi, max: MAX_STAT });
        }
        Ok(Self { lo, hi })
    }

    /// Range matching exactly one value.
    pub fn exactly(value: u8) -> Result<Self, ConfigError> {
        Self::new(value, value)
    }

    #[must_use]
    pub const fn lo(&self) -> u8 {
        self.lo
    }

    #[must_use]
    pub const fn hi(&self) -> u8 {
        self.hi
    }

    #[must_use]
    pub fn contains(&self, value: u8) -> bool {
        (self.lo..=self.hi).contains(&value)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        *self == Self::FULL
    }
}

impl Default for StatRange {
    fn default() -> Self {
        Self::FULL
    }
}

impl TryFrom<(u8, u8)> for StatRange {
    type Error = ConfigError;

    fn try_from((lo, hi): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(lo, hi)
    }
}

impl From<StatRange> for (u8, u8) {
    fn from(range: StatRange) -> Self {
        (range.lo, range.hi)
    }
}

impl std::fmt::Display for StatRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.lo, self.hi)
    }
}

/// Parses `lo..hi`, `lo..`, `..hi` or a single value.
impl std::str::FromStr for StatRange {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bound = |part: &str, default: u8| -> Result<u8, ConfigError> {
            let part = part.trim();
            if part.is_empty() {
                return Ok(default);
            }
            part.parse().map_err(|_| ConfigError::UnknownValue {
                kind: "stat range",
                value: s.to_string(),
            })
        };

        match s.split_once("..") {
            Some((lo, hi)) => Self::new(bound(lo, 0)?, bound(hi, MAX_STAT)?),
            None => Self::exactly(bound(s, 0)?),
        }
    }
}

/// Multi-criteria catalog query.
///
/// Fields combine with AND; values inside one set combine with OR.
///
/// ## Example
///
/// ```
/// use spies_deck::cards::{CardSuit, CardType};
/// use spies_deck::filter::{FilterState, StatRange};
///
/// let filters = FilterState::new()
///     .with_name("spy")
///     .with_types([CardType::Agent])
///     .with_suits([CardSuit::Stealth, CardSuit::Charm])
///     .with_intel_range(StatRange::new(4, 10).unwrap());
///
/// assert!(!filters.is_unconstrained());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Case-insensitive substring of the card name.
    pub name_query: String,

    /// Case-insensitive substring of the card description.
    pub effect_query: String,

    pub types: FxHashSet<CardType>,

    /// Matches cards holding at least one of these suits.
    pub suits: FxHashSet<CardSuit>,

    /// Matches cards holding at least one of these subtypes.
    pub subtypes: FxHashSet<CardSubtype>,

    pub triggers: FxHashSet<CardTrigger>,

    pub strength_range: StatRange,

    pub intel_range: StatRange,
}

impl FilterState {
    /// Create a filter that accepts every card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, query: impl Into<String>) -> Self {
        self.name_query = query.into();
        self
    }

    #[must_use]
    pub fn with_effect(mut self, query: impl Into<String>) -> Self {
        self.effect_query = query.into();
        self
    }

    #[must_use]
    pub fn with_types(mut self, types: impl IntoIterator<Item = CardType>) -> Self {
        self.types.extend(types);
        self
    }

    #[must_use]
    pub fn with_suits(mut self, suits: impl IntoIterator<Item = CardSuit>) -> Self {
        self.suits.extend(suits);
        self
    }

    #[must_use]
    pub fn with_subtypes(mut self, subtypes: impl IntoIterator<Item = CardSubtype>) -> Self {
        self.subtypes.extend(subtypes);
        self
    }

    #[must_use]
    pub fn with_triggers(mut self, triggers: impl IntoIterator<Item = CardTrigger>) -> Self {
        self.triggers.extend(triggers);
        self
    }

    #[must_use]
    pub fn with_strength_range(mut self, range: StatRange) -> Self {
        self.strength_range = range;
        self
    }

    #[must_use]
    pub fn with_intel_range(mut self, range: StatRange) -> Self {
        self.intel_range = range;
        self
    }

    /// Toggle a type in or out of the selection, as a checkbox would.
    pub fn toggle_type(&mut self, card_type: CardType) {
        if !self.types.remove(&card_type) {
            self.types.insert(card_type);
        }
    }

    pub fn toggle_suit(&mut self, suit: CardSuit) {
        if !self.suits.remove(&suit) {
            self.suits.insert(suit);
        }
    }

    pub fn toggle_subtype(&mut self, subtype: CardSubtype) {
        if !self.subtypes.remove(&subtype) {
            self.subtypes.insert(subtype);
        }
    }

    pub fn toggle_trigger(&mut self, trigger: CardTrigger) {
        if !self.triggers.remove(&trigger) {
            self.triggers.insert(trigger);
        }
    }

    /// Reset every field to "no constraint".
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check whether this filter accepts every card.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.name_query.is_empty()
            && self.effect_query.is_empty()
            && self.types.is_empty()
            && self.suits.is_empty()
            && self.subtypes.is_empty()
            && self.triggers.is_empty()
            && self.strength_range.is_full()
            && self.intel_range.is_full()
    }
}
