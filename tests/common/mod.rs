//! Shared fixtures and proptest strategies for integration tests.

#![allow(dead_code)]

use proptest::prelude::*;
use proptest::sample::{select, subsequence};

use spies_deck::cards::{Card, CardSubtype, CardSuit, CardTrigger, CardType, Catalog};
use spies_deck::filter::{FilterState, StatRange};

/// The two-card catalog from the reference scenario.
pub fn scenario_catalog() -> Catalog {
    Catalog::from_cards(vec![
        Card::new("1", "Field Agent", CardType::Agent)
            .with_suits([CardSuit::Combat])
            .with_stats(5, 7)
            .with_trigger(CardTrigger::Ambush)
            .with_description("PLAY: Deal 2 damage"),
        Card::new("2", "Gadget", CardType::Item)
            .with_suits([CardSuit::System])
            .with_stats(3, 0)
            .with_trigger(CardTrigger::Payoff)
            .with_description("ATTACH: Target agent gains +2 Strength"),
        Card::new("3", "Informant", CardType::Agent)
            .with_suits([CardSuit::Stealth, CardSuit::Charm])
            .with_subtypes([CardSubtype::Crime])
            .with_stats(2, 1)
            .with_description("FLIP: Look at the top card"),
    ])
    .expect("valid catalog")
}

const NAMES: &[&str] = &[
    "Field Agent", "Double Agent", "Lockpick", "Safehouse", "Dead Drop",
    "Courier", "Wiretap", "Mole", "Handler", "Extraction",
];

const TEXTS: &[&str] = &[
    "PLAY: Deal 2 damage",
    "FLIP: Draw two cards",
    "ATTACH: Target agent gains +2 Strength",
    "Payoff: gain 1 intel",
    "",
];

const NAME_QUERIES: &[&str] = &["", "agent", "DROP", "o"];

const EFFECT_QUERIES: &[&str] = &["", "draw", "play"];

pub fn arb_suits() -> impl Strategy<Value = Vec<CardSuit>> {
    subsequence(CardSuit::ALL.to_vec(), 1..=2).prop_shuffle()
}

pub fn arb_card(id: String) -> impl Strategy<Value = Card> {
    (
        select(NAMES),
        select(TEXTS),
        select(CardType::ALL),
        arb_suits(),
        subsequence(CardSubtype::ALL.to_vec(), 0..=3),
        select(CardTrigger::ALL),
        0u8..=10,
        0u8..=10,
    )
        .prop_map(move |(name, text, card_type, suits, subtypes, trigger, intel, strength)| {
            Card::new(id.clone(), name, card_type)
                .with_description(text)
                .with_suits(suits)
                .with_subtypes(subtypes)
                .with_trigger(trigger)
                .with_stats(intel, strength)
        })
}

/// Catalog of 1..=`max` cards with ids `c0`, `c1`, ...
pub fn arb_catalog(max: usize) -> impl Strategy<Value = Catalog> {
    (1..=max)
        .prop_flat_map(|n| (0..n).map(|i| arb_card(format!("c{i}"))).collect::<Vec<_>>())
        .prop_map(|cards| Catalog::from_cards(cards).expect("generated catalog is valid"))
}

pub fn arb_range() -> impl Strategy<Value = StatRange> {
    (0u8..=10, 0u8..=10).prop_map(|(a, b)| {
        StatRange::new(a.min(b), a.max(b)).expect("ordered bounds")
    })
}

pub fn arb_filter() -> impl Strategy<Value = FilterState> {
    (
        select(NAME_QUERIES),
        select(EFFECT_QUERIES),
        subsequence(CardType::ALL.to_vec(), 0..=2),
        subsequence(CardSuit::ALL.to_vec(), 0..=3),
        subsequence(CardSubtype::ALL.to_vec(), 0..=3),
        subsequence(CardTrigger::ALL.to_vec(), 0..=2),
        arb_range(),
        arb_range(),
    )
        .prop_map(|(name, effect, types, suits, subtypes, triggers, strength, intel)| {
            FilterState::new()
                .with_name(name)
                .with_effect(effect)
                .with_types(types)
                .with_suits(suits)
                .with_subtypes(subtypes)
                .with_triggers(triggers)
                .with_strength_range(strength)
                .with_intel_range(intel)
        })
}
