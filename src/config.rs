//! Pipeline configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::amount::FixedPointAmount;
use crate::types::*;

/// Presale master data export read when no input is given
pub const DEFAULT_INPUT_PATH: &str = "20180512_FINAL_PreSale_MasterData_Lukas _v5.csv";

/// Number of addresses per airdrop call
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Total presale token cap, in whole tokens
pub const DEFAULT_CAP: &str = "222247844";

/// Settings for one airdrop report run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirdropConfig {
    /// CSV file with the presale contributions
    pub input_path: PathBuf,
    /// Maximum number of entries per batch
    pub chunk_size: usize,
    /// Wrap each rendered list in `[...]`
    pub use_brackets: bool,
    /// Wrap each rendered list element in `'...'`
    pub use_quotes: bool,
    /// Token cap as a comma-decimal literal
    pub cap: String,
}

impl Default for AirdropConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            chunk_size: DEFAULT_CHUNK_SIZE,
            use_brackets: true,
            use_quotes: true,
            cap: DEFAULT_CAP.to_string(),
        }
    }
}

impl AirdropConfig {
    /// Create a configuration reading from the given file, other settings at their defaults
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            ..Self::default()
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_brackets(mut self, use_brackets: bool) -> Self {
        self.use_brackets = use_brackets;
        self
    }

    pub fn with_quotes(mut self, use_quotes: bool) -> Self {
        self.use_quotes = use_quotes;
        self
    }

    pub fn with_cap(mut self, cap: impl Into<String>) -> Self {
        self.cap = cap.into();
        self
    }

    /// Parsed token cap
    pub fn cap_amount(&self) -> AirdropResult<FixedPointAmount> {
        FixedPointAmount::parse(&self.cap)
            .map_err(|_| AirdropError::Config(format!("Invalid cap {:?}", self.cap)))
    }

    /// Validate the configuration
    pub fn validate(&self) -> AirdropResult<()> {
        if self.chunk_size == 0 {
            return Err(AirdropError::Config(
                "Chunk size must be at least 1".to_string(),
            ));
        }

        self.cap_amount()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_presale_export() {
        let config = AirdropConfig::default();
        assert_eq!(config.input_path, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(config.chunk_size, 100);
        assert!(config.use_brackets);
        assert!(config.use_quotes);
        assert_eq!(
            config.cap_amount().unwrap(),
            FixedPointAmount::from_whole_tokens(222_247_844)
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let config = AirdropConfig::default().with_chunk_size(0);
        assert!(matches!(config.validate(), Err(AirdropError::Config(_))));
    }

    #[test]
    fn test_invalid_cap_rejected() {
        let config = AirdropConfig::new("input.csv").with_cap("lots");
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: Invalid cap \"lots\"");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AirdropConfig =
            serde_json::from_str(r#"{"input_path": "sale.csv", "use_quotes": false}"#).unwrap();
        assert_eq!(config.input_path, PathBuf::from("sale.csv"));
        assert!(!config.use_quotes);
        assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(config.cap, DEFAULT_CAP);
    }
}
