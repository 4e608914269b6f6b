//! Deck serialization.
//!
//! - `code`: the compact, round-trippable deck code
//! - `report`: the human-readable text export

pub mod code;
pub mod report;

pub use code::{decode, encode, parse_entries};
pub use report::{suggested_file_name, DeckReport, DEFAULT_TITLE};
