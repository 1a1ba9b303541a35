//! Batch formatting for airdrop contract calls
//!
//! The ledger is cut into consecutive chunks; each chunk is rendered as two
//! parallel list literals (addresses, then amounts) ready to paste into a
//! bulk transfer call.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::amount::FixedPointAmount;
use crate::config::AirdropConfig;
use crate::ledger::AllocationLedger;
use crate::types::*;

/// Width of the horizontal rule separating report sections
pub const RULE_WIDTH: usize = 64;

/// One contiguous slice of the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// 1-based position of the first entry
    pub start: usize,
    /// 1-based position of the last entry, inclusive
    pub end: usize,
    pub addresses: Vec<String>,
    pub amounts: Vec<FixedPointAmount>,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Human readable range label, e.g. `101...200`
    pub fn label(&self) -> String {
        format!("{}...{}", self.start, self.end)
    }
}

/// List rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStyle {
    pub brackets: bool,
    pub quotes: bool,
}

impl ListStyle {
    /// Join items with `,`, quoting each item and bracketing the list as configured
    pub fn render<T: fmt::Display>(&self, items: &[T]) -> String {
        let joined = items
            .iter()
            .map(|item| {
                if self.quotes {
                    format!("'{item}'")
                } else {
                    item.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(",");

        if self.brackets {
            format!("[{joined}]")
        } else {
            joined
        }
    }
}

/// Splits a ledger into batches and renders them
#[derive(Debug, Clone)]
pub struct BatchFormatter {
    chunk_size: usize,
    style: ListStyle,
}

impl BatchFormatter {
    /// Create a formatter; the chunk size must be at least 1
    pub fn new(chunk_size: usize, style: ListStyle) -> AirdropResult<Self> {
        if chunk_size == 0 {
            return Err(AirdropError::Config(
                "Chunk size must be at least 1".to_string(),
            ));
        }
        Ok(Self { chunk_size, style })
    }

    pub fn from_config(config: &AirdropConfig) -> AirdropResult<Self> {
        Self::new(
            config.chunk_size,
            ListStyle {
                brackets: config.use_brackets,
                quotes: config.use_quotes,
            },
        )
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Cut the ledger into batches of at most `chunk_size` entries, in ledger order
    pub fn batches(&self, ledger: &AllocationLedger) -> Vec<Batch> {
        ledger
            .entries()
            .chunks(self.chunk_size)
            .enumerate()
            .map(|(i, chunk)| {
                let start = i * self.chunk_size + 1;
                Batch {
                    start,
                    end: start + chunk.len() - 1,
                    addresses: chunk.iter().map(|a| a.address.clone()).collect(),
                    amounts: chunk.iter().map(|a| a.amount.clone()).collect(),
                }
            })
            .collect()
    }

    /// Render one batch section, terminated by a blank line
    pub fn render(&self, batch: &Batch) -> String {
        format!(
            "{}\n{}\n\n{}\n\n{}\n\n",
            "_".repeat(RULE_WIDTH),
            batch.label(),
            self.style.render(&batch.addresses),
            self.style.render(&batch.amounts),
        )
    }
}
