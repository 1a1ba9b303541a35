//! # Presale Airdrop
//!
//! Turns a presale contribution export into batched airdrop call arguments and
//! reconciles the distributed total against the token cap.
//!
//! ## Features
//!
//! - **Fixed-point amounts**: comma-decimal quantities scaled by 10^18 with exact big-integer arithmetic
//! - **Ordered ledger**: per-address totals kept in first-seen order, repeats summed with a warning
//! - **Batch formatting**: address and amount list literals in chunks of a configurable size
//! - **Reconciliation**: cap, total and remainder report
//! - **Source abstraction**: CSV files or in-memory rows behind one trait
//!
//! ## Quick Start
//!
//! ```rust
//! use presale_airdrop::utils::MemorySource;
//! use presale_airdrop::{AirdropConfig, AirdropPipeline, ContributionRow};
//!
//! let mut source: MemorySource = vec![ContributionRow::new(
//!     format!("0x{}", "a".repeat(40)),
//!     "1,5",
//!     "0,5",
//! )]
//! .into_iter()
//! .collect();
//!
//! let pipeline = AirdropPipeline::new(AirdropConfig::default()).unwrap();
//! let mut out = Vec::<u8>::new();
//! let report = pipeline.run(&mut source, &mut out).unwrap();
//! assert_eq!(report.distinct_addresses, 1);
//! ```

pub mod amount;
pub mod batch;
pub mod config;
pub mod ledger;
pub mod pipeline;
pub mod reconciliation;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use amount::*;
pub use batch::*;
pub use config::*;
pub use ledger::*;
pub use pipeline::*;
pub use reconciliation::*;
pub use traits::*;
pub use types::*;
