//! Payee handle (VPA) validation

use crate::CodecConfig;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HANDLE_REGEX: Regex = Regex::new(r"^[A-Za-z0-9._-]+@[A-Za-z0-9._-]+$").unwrap();
}

/// Check a handle against the `localpart@domain` pattern and the default
/// length bounds of 5 to 50 characters.
pub fn validate_handle(handle: &str) -> bool {
    handle_matches(handle, &CodecConfig::default())
}

pub(crate) fn handle_matches(handle: &str, config: &CodecConfig) -> bool {
    if !HANDLE_REGEX.is_match(handle) {
        return false;
    }

    // Pattern admits ASCII only, so byte length equals char length here
    (config.min_handle_len..=config.max_handle_len).contains(&handle.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_boundaries() {
        assert!(validate_handle("ab@cd"));
        assert!(!validate_handle("a@b"));

        let fifty = format!("{}@{}", "a".repeat(24), "b".repeat(25));
        assert_eq!(fifty.len(), 50);
        assert!(validate_handle(&fifty));

        let fifty_one = format!("{}@{}", "a".repeat(25), "b".repeat(25));
        assert_eq!(fifty_one.len(), 51);
        assert!(!validate_handle(&fifty_one));
    }

    #[test]
    fn test_pattern() {
        assert!(validate_handle("business@paytm"));
        assert!(validate_handle("first.last-01@ok_axis"));
        assert!(!validate_handle("businesspaytm"));
        assert!(!validate_handle("busi ness@paytm"));
        assert!(!validate_handle("a@b@paytm"));
        assert!(!validate_handle("@paytm"));
        assert!(!validate_handle("business@"));
        assert!(!validate_handle("rāj@paytm"));
        assert!(!validate_handle(""));
    }

    #[test]
    fn test_custom_bounds() {
        let config = CodecConfig {
            min_handle_len: 3,
            max_handle_len: 6,
        };
        assert!(handle_matches("a@b", &config));
        assert!(!handle_matches("abcd@ef", &config));
    }
}
