//! Cleaning operations
//!
//! Both transforms take a table by value and return a new one; neither
//! depends on the other having run first, and both are idempotent.

mod dedup;
mod fill;

pub use dedup::remove_duplicates;
pub use fill::{fill_missing_numeric, FillOutcome};
