//! Filtering and stats throughput over a synthetic catalog.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use spies_deck::cards::{Card, CardSubtype, CardSuit, CardTrigger, CardType, Catalog};
use spies_deck::deck::DeckStore;
use spies_deck::filter::{filter_catalog, FilterState, StatRange};

fn synthetic_catalog(size: usize) -> Catalog {
    let cards = (0..size)
        .map(|i| {
            let first = CardSuit::ALL[i % CardSuit::ALL.len()];
            let second = CardSuit::ALL[(i / 3) % CardSuit::ALL.len()];
            let mut suits = vec![first];
            if second != first && i % 2 == 0 {
                suits.push(second);
            }
            Card::new(
                format!("{i}"),
                format!("Operative {i}"),
                CardType::ALL[i % CardType::ALL.len()],
            )
            .with_suits(suits)
            .with_subtypes([CardSubtype::ALL[i % CardSubtype::ALL.len()]])
            .with_trigger(CardTrigger::ALL[i % CardTrigger::ALL.len()])
            .with_stats((i % 11) as u8, ((i * 7) % 11) as u8)
            .with_description(if i % 5 == 0 { "FLIP: Draw a card" } else { "PLAY: Deal 1 damage" })
        })
        .collect();
    Catalog::from_cards(cards).expect("synthetic catalog is valid")
}

fn bench_filter(c: &mut Criterion) {
    let filters = FilterState::new()
        .with_name("operative 1")
        .with_effect("draw")
        .with_types([CardType::Agent, CardType::Order])
        .with_suits([CardSuit::Stealth, CardSuit::Charm])
        .with_intel_range(StatRange::new(2, 8).expect("ordered bounds"));

    let mut group = c.benchmark_group("filter_catalog");
    for size in [100, 1_000, 10_000] {
        let catalog = synthetic_catalog(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| filter_catalog(black_box(catalog), black_box(&filters)).len())
        });
    }
    group.finish();
}

fn bench_add_card(c: &mut Criterion) {
    let catalog = synthetic_catalog(60);
    c.bench_function("deck_store_fill", |b| {
        b.iter(|| {
            let mut store = DeckStore::default();
            for card in &catalog {
                store.add_card(card);
                store.add_card(card);
            }
            black_box(store.stats().total_cards)
        })
    });
}

criterion_group!(benches, bench_filter, bench_add_card);
criterion_main!(benches);
