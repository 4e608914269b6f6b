//! Catalog filtering.
//!
//! - `FilterState`: the multi-criteria query (validated stat ranges)
//! - `filter_catalog`: pure, order-preserving filter over any card sequence

pub mod predicate;
pub mod state;

pub use predicate::{filter_catalog, filter_iter, matches, CompiledFilter};
pub use state::{FilterState, StatRange};
