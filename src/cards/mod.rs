//! Card system: attributes, definitions, and the catalog.
//!
//! ## Key Types
//!
//! - `CardType`, `CardSuit`, `CardSubtype`, `CardTrigger`: closed enumerations
//! - `CardId`: Stable string identifier used in deck codes
//! - `Card`: Immutable catalog record
//! - `Catalog`: Ordered, validated card list with id lookup

pub mod attributes;
pub mod catalog;
pub mod definition;

pub use attributes::{CardSubtype, CardSuit, CardTrigger, CardType};
pub use catalog::Catalog;
pub use definition::{Card, CardId, Subtypes, Suits, MAX_STAT};
