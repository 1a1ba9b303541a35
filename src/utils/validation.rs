//! Validation utilities

use regex::Regex;
use std::sync::LazyLock;

// One trailing newline is accepted and kept as part of the address
static ADDRESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^0x[0-9a-f]{40}\n?$").expect("address pattern is a valid regex")
});

/// Lower-case an address as written in the sheet
pub fn normalize_address(address: &str) -> String {
    address.to_lowercase()
}

/// Check that an already normalized address is `0x` followed by 40 lowercase hex digits
pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_PATTERN.is_match(address)
}

/// Normalize an address and return it only if it is well formed
pub fn validate_address(address: &str) -> Option<String> {
    let normalized = normalize_address(address);
    is_valid_address(&normalized).then_some(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_case_address_is_normalized() {
        let raw = format!("0x{}", "AbCdEf0123".repeat(4));
        assert_eq!(
            validate_address(&raw),
            Some(format!("0x{}", "abcdef0123".repeat(4)))
        );
    }

    #[test]
    fn test_uppercase_prefix_is_accepted() {
        let raw = format!("0X{}", "a".repeat(40));
        assert_eq!(validate_address(&raw), Some(format!("0x{}", "a".repeat(40))));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(validate_address(&format!("0x{}", "a".repeat(39))), None);
        assert_eq!(validate_address(&format!("0x{}", "a".repeat(41))), None);
    }

    #[test]
    fn test_rejects_non_hex() {
        assert_eq!(validate_address(&format!("0x{}g", "a".repeat(39))), None);
    }

    #[test]
    fn test_rejects_missing_prefix() {
        assert_eq!(validate_address(&"a".repeat(40)), None);
        assert_eq!(validate_address(&"a".repeat(42)), None);
    }

    #[test]
    fn test_rejects_surrounding_text() {
        assert_eq!(validate_address(&format!(" 0x{}", "a".repeat(40))), None);
        assert_eq!(validate_address(&format!("0x{} ", "a".repeat(40))), None);
        assert_eq!(validate_address(""), None);
    }

    #[test]
    fn test_single_trailing_newline_is_tolerated() {
        let raw = format!("0x{}\n", "a".repeat(40));
        assert_eq!(validate_address(&raw), Some(raw.clone()));
        assert_eq!(validate_address(&format!("{raw}\n")), None);
        assert_eq!(validate_address(&format!("0x{}\r\n", "a".repeat(40))), None);
    }

    #[test]
    fn test_is_valid_address_expects_normalized_input() {
        assert!(!is_valid_address(&format!("0x{}", "A".repeat(40))));
        assert!(is_valid_address(&format!("0x{}", "0".repeat(40))));
    }
}
