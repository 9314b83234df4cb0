//! Conversions and formatting for `U256`
//!
//! Conversions follow the crate-wide conventions:
//! - byte arrays are big-endian
//! - widening conversions are infallible
//! - narrowing conversions fail when high bits would be lost

use super::U256;

use std::fmt::{self, Debug, Display, Formatter, LowerHex, UpperHex};

/// Converts a `U256` into its big-endian 32-byte encoding.
impl From<U256> for [u8; 32] {
    fn from(value: U256) -> Self {
        value.to_be_bytes()
    }
}

/// Interprets a 32-byte array as a big-endian integer.
impl From<[u8; 32]> for U256 {
    fn from(value: [u8; 32]) -> Self {
        U256::from_be_bytes(value)
    }
}

impl From<u8> for U256 {
    fn from(value: u8) -> Self {
        U256([value as u64, 0, 0, 0])
    }
}

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        U256([value, 0, 0, 0])
    }
}

impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        U256([value as u64, (value >> 64) as u64, 0, 0])
    }
}

/// Succeeds only if the upper 192 bits are zero.
impl TryFrom<U256> for u64 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value.0[1..].iter().any(|&limb| limb != 0) {
            return Err(());
        }

        Ok(value.0[0])
    }
}

/// Succeeds only if the upper 128 bits are zero.
impl TryFrom<U256> for u128 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value.0[2] != 0 || value.0[3] != 0 {
            return Err(());
        }

        Ok(((value.0[1] as u128) << 64) | value.0[0] as u128)
    }
}

impl LowerHex for U256 {
    /// Minimal-width hexadecimal; `{:#x}` adds the `0x` prefix.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let digits = hex_digits(self, b"0123456789abcdef");
        f.pad_integral(true, "0x", &digits)
    }
}

impl UpperHex for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let digits = hex_digits(self, b"0123456789ABCDEF");
        f.pad_integral(true, "0x", &digits)
    }
}

impl Display for U256 {
    /// Formats the value as `0x`-prefixed lowercase hexadecimal.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self)
    }
}

impl Debug for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "U256({:#x})", self)
    }
}

fn hex_digits(value: &U256, alphabet: &[u8; 16]) -> String {
    let bytes = value.to_be_bytes();
    let mut digits = String::with_capacity(64);

    for byte in bytes {
        digits.push(alphabet[(byte >> 4) as usize] as char);
        digits.push(alphabet[(byte & 0x0f) as usize] as char);
    }

    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
