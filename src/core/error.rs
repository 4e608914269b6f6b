//! Error types for the deck engine.
//!
//! Each failure family gets its own enum so callers can match on exactly
//! what they can recover from:
//!
//! - `ConfigError`: bad filter or rules configuration, rejected at construction
//! - `CatalogError`: catalog data that fails the startup validation pass
//! - `DecodeError`: a deck code that cannot be imported
//!
//! None of these are fatal. Filtering and deck mutation never fail.

use thiserror::Error;

/// Configuration rejected at the boundary (filter ranges, rules, enum names).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid range: {lo}..{hi} (expected 0 <= lo <= hi <= {max})")]
    InvalidRange { lo: u8, hi: u8, max: u8 },

    #[error("Per-card copy limit must be at least 1")]
    ZeroCopyLimit,

    #[error("Unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },
}

/// Catalog data that violates the card record contract.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Duplicate card id: {0}")]
    DuplicateId(String),

    #[error("Invalid card id {0:?}: ids must be non-empty, trimmed and free of ',' and '-'")]
    InvalidId(String),

    #[error("Card {id}: {stat} {value} is outside 0..=10")]
    StatOutOfRange {
        id: String,
        stat: &'static str,
        value: u8,
    },

    #[error("Card {id}: expected 1 or 2 suits, got {count}")]
    SuitCount { id: String, count: usize },

    #[error("Card {0}: suit listed twice")]
    DuplicateSuit(String),

    #[error("Card {0}: subtype listed twice")]
    DuplicateSubtype(String),
}

/// Reasons a deck code is rejected. The first violation encountered wins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Please enter a deck code")]
    EmptyCode,

    #[error("Invalid entry: {0}")]
    MalformedEntry(String),

    #[error("Invalid quantity in entry: {0}")]
    InvalidQuantity(String),

    #[error("Card not found: {0}")]
    UnknownCard(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_messages() {
        assert_eq!(DecodeError::EmptyCode.to_string(), "Please enter a deck code");
        assert_eq!(
            DecodeError::MalformedEntry("BAD".into()).to_string(),
            "Invalid entry: BAD"
        );
        assert_eq!(
            DecodeError::UnknownCard("99".into()).to_string(),
            "Card not found: 99"
        );
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::InvalidRange { lo: 7, hi: 3, max: 10 };
        assert_eq!(
            err.to_string(),
            "Invalid range: 7..3 (expected 0 <= lo <= hi <= 10)"
        );
    }

    #[test]
    fn test_catalog_error_from_json() {
        let err: CatalogError = serde_json::from_str::<Vec<u8>>("nope").unwrap_err().into();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
