//! Human-readable deck export.
//!
//! The report is plain text meant for sharing. Only its last line, the
//! deck code, is meant to be read back by a program.
//!
//! ```text
//! My Deck - October 19, 2026
//! ==================================================
//!
//! Total Cards: 3 / 30
//! Average Intel: 4.3
//! Average Strength: 4.7
//!
//! AGENT (2)
//! ------------------------------
//! 2x Example Agent (5 Combat) [Military]
//!     Strength: 7 - PLAY: Deal 2 damage
//!     Trigger: Ambush
//!
//! ITEM (1)
//! ------------------------------
//! 1x Example Gadget (3 System) [Gadget, Science]
//!     Strength: 0 - ATTACH: Target agent gains +2 Strength
//!     Trigger: Payoff
//!
//!
//! Deck Code:
//! 2-2,4-1
//! ```

use std::cmp::Ordering;
use std::fmt::Write as _;

use chrono::{Local, NaiveDate};

use super::code::encode;
use crate::cards::CardTrigger;
use crate::core::config::DeckRules;
use crate::deck::{Deck, DeckEntry, DeckStats};

/// Title used when none is given.
pub const DEFAULT_TITLE: &str = "My Deck";

/// Text export of a deck.
#[derive(Clone, Debug)]
pub struct DeckReport<'d> {
    deck: &'d Deck,
    stats: &'d DeckStats,
    rules: DeckRules,
    title: String,
    date: NaiveDate,
}

impl<'d> DeckReport<'d> {
    /// Report dated today with the default title.
    #[must_use]
    pub fn new(deck: &'d Deck, stats: &'d DeckStats, rules: DeckRules) -> Self {
        Self {
            deck,
            stats,
            rules,
            title: DEFAULT_TITLE.to_string(),
            date: Local::now().date_naive(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Render the report. `None` for an empty deck.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        if self.deck.is_empty() {
            return None;
        }

        let mut out = String::new();
        self.write_header(&mut out);
        for (type_name, entries) in self.groups() {
            write_group(&mut out, type_name, &entries);
        }
        let _ = write!(out, "\nDeck Code:\n{}\n", encode(self.deck));
        Some(out)
    }

    fn write_header(&self, out: &mut String) {
        let stats = self.stats;
        let _ = writeln!(out, "{} - {}", self.title, self.date.format("%B %-d, %Y"));
        let _ = writeln!(out, "{}\n", "=".repeat(50));
        let _ = writeln!(
            out,
            "Total Cards: {} / {}",
            stats.total_cards, self.rules.deck_size_target
        );
        let _ = writeln!(out, "Average Intel: {:.1}", stats.average_intel);
        let _ = writeln!(out, "Average Strength: {:.1}\n", stats.average_strength);
    }

    /// Entries grouped by type name (alphabetical), each group sorted by
    /// ascending Intel then name.
    fn groups(&self) -> Vec<(&'static str, Vec<&'d DeckEntry>)> {
        let mut groups: Vec<(&'static str, Vec<&'d DeckEntry>)> = Vec::new();
        for entry in self.deck.iter() {
            let type_name = entry.card.card_type.name();
            match groups.iter_mut().find(|(name, _)| *name == type_name) {
                Some((_, entries)) => entries.push(entry),
                None => groups.push((type_name, vec![entry])),
            }
        }

        groups.sort_by(|(a, _), (b, _)| a.cmp(b));
        for (_, entries) in &mut groups {
            entries.sort_by(|a, b| {
                a.card
                    .intel
                    .cmp(&b.card.intel)
                    .then_with(|| compare_names(&a.card.name, &b.card.name))
            });
        }
        groups
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn write_group(out: &mut String, type_name: &str, entries: &[&DeckEntry]) {
    let count: u32 = entries.iter().map(|e| e.quantity()).sum();
    let _ = writeln!(out, "{} ({})", type_name.to_uppercase(), count);
    let _ = writeln!(out, "{}", "-".repeat(30));

    for entry in entries {
        let card = &entry.card;
        let subtypes = if card.subtypes.is_empty() {
            String::new()
        } else {
            let names: Vec<_> = card.subtypes.iter().map(|s| s.name()).collect();
            format!(" [{}]", names.join(", "))
        };
        let _ = writeln!(
            out,
            "{}x {} ({} {}){}",
            entry.quantity(),
            card.name,
            card.intel,
            card.suits_label(),
            subtypes
        );
        let _ = writeln!(out, "    Strength: {} - {}", card.strength, card.description);
        if card.trigger != CardTrigger::None {
            let _ = writeln!(out, "    Trigger: {}", card.trigger);
        }
    }
    out.push('\n');
}

/// File name for a saved report: the title with every non-alphanumeric
/// character replaced by `_`, lowercased, then `-<millis>.txt`.
#[must_use]
pub fn suggested_file_name(title: &str, timestamp_millis: i64) -> String {
    let stem: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{stem}-{timestamp_millis}.txt")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardSubtype, CardSuit, CardType};
    use crate::deck::compute_stats;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn sample_deck() -> Deck {
        let rules = DeckRules::default();
        let agent = Card::new("2", "Example Agent", CardType::Agent)
            .with_suits([CardSuit::Combat])
            .with_subtypes([CardSubtype::Military])
            .with_stats(5, 7)
            .with_trigger(CardTrigger::Ambush)
            .with_description("PLAY: Deal 2 damage");
        let gadget = Card::new("4", "Example Gadget", CardType::Item)
            .with_suits([CardSuit::System])
            .with_subtypes([CardSubtype::Gadget, CardSubtype::Science])
            .with_stats(3, 0)
            .with_trigger(CardTrigger::Payoff)
            .with_description("ATTACH: Target agent gains +2 Strength");

        Deck::new()
            .with_card(&gadget, &rules)
            .with_card(&agent, &rules)
            .with_card(&agent, &rules)
    }

    #[test]
    fn test_empty_deck_renders_nothing() {
        let deck = Deck::new();
        let stats = compute_stats(&deck);
        let report = DeckReport::new(&deck, &stats, DeckRules::default());
        assert!(report.render().is_none());
    }

    #[test]
    fn test_full_report() {
        let deck = sample_deck();
        let stats = compute_stats(&deck);
        let text = DeckReport::new(&deck, &stats, DeckRules::default())
            .with_date(date())
            .render()
            .unwrap();

        let expected = "\
My Deck - October 19, 2026
==================================================

Total Cards: 3 / 30
Average Intel: 4.3
Average Strength: 4.7

AGENT (2)
------------------------------
2x Example Agent (5 Combat) [Military]
    Strength: 7 - PLAY: Deal 2 damage
    Trigger: Ambush

ITEM (1)
------------------------------
1x Example Gadget (3 System) [Gadget, Science]
    Strength: 0 - ATTACH: Target agent gains +2 Strength
    Trigger: Payoff


Deck Code:
4-1,2-2
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_group_sorting() {
        let rules = DeckRules::default();
        let card = |id: &str, name: &str, intel: u8| {
            Card::new(id, name, CardType::Order)
                .with_suits([CardSuit::Search])
                .with_stats(intel, 0)
        };
        let deck = Deck::new()
            .with_card(&card("1", "zeta", 4), &rules)
            .with_card(&card("2", "Alpha", 4), &rules)
            .with_card(&card("3", "omega", 1), &rules);
        let stats = compute_stats(&deck);

        let text = DeckReport::new(&deck, &stats, rules)
            .with_title("Orders")
            .with_date(date())
            .render()
            .unwrap();

        let lines: Vec<_> = text.lines().filter(|l| l.starts_with("1x")).collect();
        assert_eq!(
            lines,
            vec!["1x omega (1 Search)", "1x Alpha (4 Search)", "1x zeta (4 Search)"]
        );
        assert!(text.starts_with("Orders - October 19, 2026\n"));
        assert!(!text.contains("Trigger:"));
    }

    #[test]
    fn test_suggested_file_name() {
        assert_eq!(
            suggested_file_name("My Deck!", 1700000000000),
            "my_deck_-1700000000000.txt"
        );
    }
}
