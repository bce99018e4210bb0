//! Hex rendering of wire images

use crate::error::{CliError, Result};

pub fn encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Parse hex digits, ignoring whitespace and an optional `0x` prefix
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let digits: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(&digits);

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(CliError::InvalidHex(format!("unexpected character '{}'", bad)));
    }
    if digits.len() % 2 != 0 {
        return Err(CliError::InvalidHex(format!("odd number of digits ({})", digits.len())));
    }

    // all ASCII from here, so byte offsets are char boundaries
    (0..digits.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| CliError::InvalidHex(digits[i..i + 2].to_string())))
        .collect()
}
