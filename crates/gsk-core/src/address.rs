//! Hex address parsing and formatting utilities.

use crate::error::{Error, Result};

/// Parse a hex address string (with or without 0x prefix).
///
/// # Examples
///
/// ```
/// use gsk_core::parse_hex_address;
///
/// assert_eq!(parse_hex_address("0x401234").unwrap(), 0x401234);
/// assert_eq!(parse_hex_address("401234").unwrap(), 0x401234);
/// assert_eq!(parse_hex_address("0X401234").unwrap(), 0x401234);
/// ```
pub fn parse_hex_address(s: &str) -> Result<u64> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidAddress {
            input: s.to_string(),
            message: "expected hex digits".to_string(),
        });
    }

    u64::from_str_radix(digits, 16).map_err(|e| Error::InvalidAddress {
        input: s.to_string(),
        message: e.to_string(),
    })
}

/// Format an address the way the server expects it: `0x` plus lowercase hex.
///
/// ```
/// use gsk_core::format_hex_address;
///
/// assert_eq!(format_hex_address(0x401234), "0x401234");
/// ```
pub fn format_hex_address(addr: u64) -> String {
    format!("0x{:x}", addr)
}
