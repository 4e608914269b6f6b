//! Command-line front end over the deck engine.

use std::error::Error;
use std::path::PathBuf;

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use spies_deck::cards::{Card, CardSubtype, CardSuit, CardTrigger, CardType, Catalog};
use spies_deck::codec::{decode, suggested_file_name, DeckReport, DEFAULT_TITLE};
use spies_deck::core::{DeckRules, DEFAULT_DECK_SIZE_TARGET, DEFAULT_MAX_COPIES};
use spies_deck::deck::DeckStore;
use spies_deck::filter::{filter_catalog, FilterState, StatRange};

pub type Fallible<T> = Result<T, Box<dyn Error>>;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Catalog JSON file. Defaults to the bundled catalog.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Maximum copies of a single card.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_COPIES)]
    max_copies: u32,

    /// Advisory deck size shown in summaries.
    #[arg(long, global = true, default_value_t = DEFAULT_DECK_SIZE_TARGET)]
    deck_size: u32,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List catalog cards matching the given filters.
    Cards(FilterArgs),
    /// Print statistics for a deck code as JSON.
    Stats {
        /// Deck code, e.g. `1-2,5-1`.
        code: String,
    },
    /// Render the text export for a deck code.
    Export {
        /// Deck code, e.g. `1-2,5-1`.
        code: String,
        /// Report title.
        #[arg(long, default_value = DEFAULT_TITLE)]
        title: String,
        /// Write the report into this directory instead of printing it.
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Validate a deck code against the catalog.
    Check {
        /// Deck code, e.g. `1-2,5-1`.
        code: String,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Case-insensitive substring of the card name.
    #[arg(long)]
    name: Option<String>,
    /// Case-insensitive substring of the card text.
    #[arg(long)]
    effect: Option<String>,
    #[arg(long = "type")]
    types: Vec<CardType>,
    #[arg(long = "suit")]
    suits: Vec<CardSuit>,
    #[arg(long = "subtype")]
    subtypes: Vec<CardSubtype>,
    #[arg(long = "trigger")]
    triggers: Vec<CardTrigger>,
    /// Strength range, e.g. `2..6`, `4..` or `7`.
    #[arg(long)]
    strength: Option<StatRange>,
    /// Intel range, e.g. `2..6`, `4..` or `7`.
    #[arg(long)]
    intel: Option<StatRange>,
}

impl FilterArgs {
    fn into_filter(self) -> FilterState {
        FilterState::new()
            .with_name(self.name.unwrap_or_default())
            .with_effect(self.effect.unwrap_or_default())
            .with_types(self.types)
            .with_suits(self.suits)
            .with_subtypes(self.subtypes)
            .with_triggers(self.triggers)
            .with_strength_range(self.strength.unwrap_or_default())
            .with_intel_range(self.intel.unwrap_or_default())
    }
}

pub fn entrypoint(cli: Cli) -> Fallible<()> {
    let rules = DeckRules::new(cli.max_copies)?.with_deck_size_target(cli.deck_size);
    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::bundled()?,
    };

    match cli.command {
        Command::Cards(args) => {
            let filters = args.into_filter();
            let cards = filter_catalog(&catalog, &filters);
            for card in &cards {
                println!("{}", card_line(card));
            }
            println!("{} of {} cards", cards.len(), catalog.len());
        }
        Command::Stats { code } => {
            let store = import(&code, &catalog, rules)?;
            println!("{}", serde_json::to_string_pretty(store.stats())?);
        }
        Command::Export {
            code,
            title,
            out_dir,
        } => {
            let store = import(&code, &catalog, rules)?;
            let text = DeckReport::new(store.deck(), store.stats(), rules)
                .with_title(title.as_str())
                .render()
                .ok_or("deck is empty")?;
            match out_dir {
                Some(dir) => {
                    let path = dir.join(suggested_file_name(&title, Utc::now().timestamp_millis()));
                    std::fs::write(&path, text)?;
                    info!(path = %path.display(), "report written");
                    println!("Deck exported to {}", path.display());
                }
                None => print!("{text}"),
            }
        }
        Command::Check { code } => {
            let store = import(&code, &catalog, rules)?;
            let stats = store.stats();
            println!(
                "OK: {} cards ({} distinct), {} / {}",
                stats.total_cards,
                store.deck().len(),
                stats.total_cards,
                rules.deck_size_target
            );
            if stats.is_over_target(&rules) {
                println!("Warning: deck is over the advisory size");
            }
        }
    }
    Ok(())
}

fn import(code: &str, catalog: &Catalog, rules: DeckRules) -> Fallible<DeckStore> {
    let mut store = DeckStore::new(rules);
    store.import_code(code, catalog)?;
    Ok(store)
}

fn card_line(card: &Card) -> String {
    format!(
        "{:>4}  {:<24} {:<8} {:<18} Intel {:>2}  Strength {:>2}  {}",
        card.id,
        card.name,
        card.card_type,
        card.suits_label(),
        card.intel,
        card.strength,
        card.trigger
    )
}
