//! Core types and data structures for the airdrop pipeline

use serde::{Deserialize, Serialize};

/// One record of the presale master data export
///
/// Quantities are kept as the raw strings found in the file; they use a comma
/// as decimal separator and are converted by [`crate::FixedPointAmount::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRow {
    /// Contributor address as written in the sheet (any case)
    #[serde(rename = "Public Ethereum Address")]
    pub address: String,
    /// Tokens bought during the presale
    #[serde(rename = "Tokens Bought")]
    pub tokens_bought: String,
    /// Bonus tokens granted on top of the purchase
    #[serde(rename = "Bonus Tokens Issued")]
    pub bonus_tokens: String,
}

impl ContributionRow {
    /// Create a new contribution row
    pub fn new(
        address: impl Into<String>,
        tokens_bought: impl Into<String>,
        bonus_tokens: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            tokens_bought: tokens_bought.into(),
            bonus_tokens: bonus_tokens.into(),
        }
    }
}

/// A repeated address found while aggregating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateWarning {
    /// 1-based index of the data row carrying the repeat
    pub row: usize,
    /// Normalized (lowercase) address
    pub address: String,
}

impl std::fmt::Display for DuplicateWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "WARNING: duplicate address {} in row {}",
            self.address, self.row
        )
    }
}

/// Errors that can occur while building the airdrop report
#[derive(Debug, thiserror::Error)]
pub enum AirdropError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("Invalid amount {:?}{}", .value, .row.map(|r| format!(" in row {r}")).unwrap_or_default())]
    InvalidAmount { value: String, row: Option<usize> },
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for airdrop operations
pub type AirdropResult<T> = Result<T, AirdropError>;
