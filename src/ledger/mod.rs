//! Ledger module containing the ordered allocation map and the row aggregator

pub mod aggregator;
pub mod core;

pub use aggregator::*;
pub use self::core::*;
