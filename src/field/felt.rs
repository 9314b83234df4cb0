//! Elements of the Stark prime field.
//!
//! The field modulus is
//!
//! ```text
//! p = 2²⁵¹ + 17·2¹⁹² + 1
//! ```
//!
//! A [`Felt`] always holds a canonical residue. Internally it is stored in
//! Montgomery form, which is itself a unique value in `[0, p)`, so equality
//! and hashing work directly on the stored limbs.

use crate::error::CryptoError;
use crate::primitives::U256;
use crate::primitives::montgomery::{self, Modulus};

use std::fmt::{self, Debug, Display, Formatter, LowerHex, UpperHex};
use std::str::FromStr;

pub(crate) const MODULUS: Modulus = Modulus {
    value: U256::from_limbs([1, 0, 0, 0x0800_0000_0000_0011]),
    r: U256::from_limbs([
        0xffff_ffff_ffff_ffe1,
        0xffff_ffff_ffff_ffff,
        0xffff_ffff_ffff_ffff,
        0x07ff_ffff_ffff_fdf0,
    ]),
    r2: U256::from_limbs([
        0xffff_fd73_7e00_0401,
        0x0000_0001_330f_ffff,
        0xffff_ffff_ff6f_8000,
        0x07ff_d4ab_5e00_8810,
    ]),
    inv: u64::MAX,
};

// p − 1 = 2¹⁹² · ODD_PART
const TWO_ADICITY: u32 = 192;
const ODD_PART: U256 = U256::from_limbs([0x0800_0000_0000_0011, 0, 0, 0]);
const ODD_PART_PLUS_ONE_HALF: U256 = U256::from_limbs([0x0400_0000_0000_0009, 0, 0, 0]);
const EULER_EXPONENT: U256 = U256::from_limbs([0, 0, 0x8000_0000_0000_0000, 0x0400_0000_0000_0008]);

/// An element of the Stark prime field.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Felt(pub(crate) U256);

impl Felt {
    /// The additive identity.
    pub const ZERO: Felt = Felt(U256::ZERO);

    /// The multiplicative identity.
    pub const ONE: Felt = Felt(MODULUS.r);

    pub const TWO: Felt = Felt::from_u64(2);

    pub const THREE: Felt = Felt::from_u64(3);

    /// The largest canonical element, `p − 1`.
    pub const MAX: Felt = Felt::from_canonical(MODULUS.value.overflowing_sub(&U256::ONE).0);

    /// The field modulus `p` as a plain integer.
    pub const PRIME: U256 = MODULUS.value;

    /// Builds an element from a machine integer.
    pub const fn from_u64(value: u64) -> Felt {
        Felt(montgomery::to_montgomery(
            &U256::from_limbs([value, 0, 0, 0]),
            &MODULUS,
        ))
    }

    /// Builds an element from an integer known to be below `p`.
    ///
    /// # Panics
    ///
    /// Panics if `value >= p`; in a `const` context this is a compile error.
    pub const fn from_canonical(value: U256) -> Felt {
        if !value.const_lt(&MODULUS.value) {
            panic!("value is not a canonical field element");
        }

        Felt(montgomery::to_montgomery(&value, &MODULUS))
    }

    /// Parses a hexadecimal literal known to denote a canonical element.
    ///
    /// # Panics
    ///
    /// Panics on malformed or out-of-range input.
    pub const fn from_hex_unchecked(s: &str) -> Felt {
        Felt::from_canonical(U256::from_hex_unchecked(s))
    }

    /// Parses a hexadecimal string (optional `0x` prefix, at most 64
    /// digits). Values `>= p` are rejected.
    pub fn from_hex(s: &str) -> Result<Felt, CryptoError> {
        let value = U256::from_hex(s).ok_or(CryptoError::InvalidEncoding)?;
        Felt::try_from(value)
    }

    /// Decodes the 32-byte big-endian encoding.
    ///
    /// Fails with [`CryptoError::InvalidEncoding`] if the value is `>= p`.
    pub fn from_bytes_be(bytes: &[u8; 32]) -> Result<Felt, CryptoError> {
        Felt::try_from(U256::from_be_bytes(*bytes))
    }

    /// Decodes 32 big-endian bytes, reducing the value modulo `p`.
    ///
    /// Intended for hash outputs and other uniformly distributed input;
    /// use [`Felt::from_bytes_be`] for encodings that must be canonical.
    pub fn from_bytes_be_reduced(bytes: &[u8; 32]) -> Felt {
        Felt(montgomery::to_montgomery(
            &U256::from_be_bytes(*bytes),
            &MODULUS,
        ))
    }

    /// Returns the 32-byte big-endian encoding of the canonical value.
    pub fn to_bytes_be(&self) -> [u8; 32] {
        self.to_u256().to_be_bytes()
    }

    /// Returns the canonical integer in `[0, p)`.
    pub const fn to_u256(&self) -> U256 {
        montgomery::from_montgomery(&self.0, &MODULUS)
    }

    pub const fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn double(&self) -> Felt {
        Felt(montgomery::add(&self.0, &self.0, &MODULUS))
    }

    pub fn square(&self) -> Felt {
        Felt(montgomery::mul(&self.0, &self.0, &MODULUS))
    }

    /// Raises the element to a public integer power by square-and-multiply.
    pub fn pow(&self, exponent: &U256) -> Felt {
        Felt(montgomery::pow(&self.0, exponent, &MODULUS))
    }

    /// Multiplicative inverse.
    ///
    /// Fails with [`CryptoError::DivisionByZero`] for zero.
    pub fn inverse(&self) -> Result<Felt, CryptoError> {
        if self.is_zero() {
            return Err(CryptoError::DivisionByZero);
        }

        Ok(self.invert_or_zero())
    }

    /// Inverse for callers that have already excluded zero.
    pub(crate) fn invert_or_zero(&self) -> Felt {
        Felt(montgomery::invert(&self.0, &MODULUS))
    }

    /// Square root by Tonelli–Shanks, or `None` for a non-residue.
    ///
    /// Which of the two roots is returned is unspecified; negate the result
    /// for the other one.
    pub fn sqrt(&self) -> Option<Felt> {
        if self.is_zero() {
            return Some(Felt::ZERO);
        }

        if self.pow(&EULER_EXPONENT) != Felt::ONE {
            return None;
        }

        // 3 is a quadratic non-residue modulo p.
        let mut c = Felt::THREE.pow(&ODD_PART);
        let mut t = self.pow(&ODD_PART);
        let mut root = self.pow(&ODD_PART_PLUS_ONE_HALF);
        let mut m = TWO_ADICITY;

        while t != Felt::ONE {
            let mut i = 0;
            let mut t_pow = t;

            while t_pow != Felt::ONE {
                t_pow = t_pow.square();
                i += 1;
            }

            let mut b = c;
            for _ in 0..(m - i - 1) {
                b = b.square();
            }

            m = i;
            c = b.square();
            t = t * c;
            root = root * b;
        }

        Some(root)
    }
}

impl TryFrom<U256> for Felt {
    type Error = CryptoError;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value >= MODULUS.value {
            return Err(CryptoError::InvalidEncoding);
        }

        Ok(Felt(montgomery::to_montgomery(&value, &MODULUS)))
    }
}

impl From<Felt> for U256 {
    fn from(value: Felt) -> Self {
        value.to_u256()
    }
}

impl From<Felt> for [u8; 32] {
    fn from(value: Felt) -> Self {
        value.to_bytes_be()
    }
}

impl From<u64> for Felt {
    fn from(value: u64) -> Self {
        Felt::from_u64(value)
    }
}

impl From<u128> for Felt {
    fn from(value: u128) -> Self {
        Felt(montgomery::to_montgomery(&U256::from(value), &MODULUS))
    }
}

impl FromStr for Felt {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Felt::from_hex(s)
    }
}

impl LowerHex for Felt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(&self.to_u256(), f)
    }
}

impl UpperHex for Felt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        UpperHex::fmt(&self.to_u256(), f)
    }
}

impl Display for Felt {
    /// Formats the canonical value as `0x`-prefixed lowercase hexadecimal.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self)
    }
}

impl Debug for Felt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Felt({:#x})", self)
    }
}
