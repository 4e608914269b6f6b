//! Core types shared by every other module: rules and errors.

pub mod config;
pub mod error;

pub use config::{DeckRules, DEFAULT_DECK_SIZE_TARGET, DEFAULT_MAX_COPIES};
pub use error::{CatalogError, ConfigError, DecodeError};
