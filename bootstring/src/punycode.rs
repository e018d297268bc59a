//! Punycode shortcuts over the shared [`PUNYCODE`] codec.

use crate::error::Result;
use crate::presets::PUNYCODE;

/// Encode `input` as Punycode.
///
/// ```
/// assert_eq!(bootstring::punycode::encode("b\u{fc}cher").unwrap(), "bcher-kva");
/// ```
pub fn encode(input: &str) -> Result<String> {
    PUNYCODE.encode(input)
}

/// Decode a Punycode string. Digits are case-insensitive.
///
/// ```
/// assert_eq!(bootstring::punycode::decode("BCHER-KVA").unwrap(), "B\u{fc}CHER");
/// ```
pub fn decode(input: &str) -> Result<String> {
    PUNYCODE.decode(input)
}
