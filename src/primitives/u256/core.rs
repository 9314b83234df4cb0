//! 256-bit unsigned integer primitive
//!
//! This module defines the fixed-size 256-bit unsigned integer (`U256`)
//! that backs every field element, scalar and constant in the crate.
//!
//! It is a **simple, explicit value type**, not a general big-integer
//! library. It carries exactly what modular arithmetic over the Stark prime
//! and the curve order needs:
//! - carry-propagating addition and borrow-propagating subtraction
//! - bit access for double-and-add scalar multiplication
//! - big-endian byte and hexadecimal conversions
//!
//! The internal representation is four little-endian 64-bit limbs. Every
//! constructor and accessor that constants depend on is a `const fn`, so
//! curve parameters and hash tables are built at compile time.

/// Fixed-size 256-bit unsigned integer.
///
/// The value is stored as four 64-bit limbs, least significant first.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct U256(pub(crate) [u64; 4]);

impl U256 {
    /// The value zero.
    pub const ZERO: Self = Self([0; 4]);

    /// The value one.
    pub const ONE: Self = Self([1, 0, 0, 0]);

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self([u64::MAX; 4]);

    /// Builds a value from little-endian limbs.
    pub const fn from_limbs(limbs: [u64; 4]) -> Self {
        Self(limbs)
    }

    /// Returns the little-endian limbs.
    pub const fn limbs(&self) -> [u64; 4] {
        self.0
    }

    /// Interprets 32 bytes as a big-endian integer.
    pub const fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut limbs = [0u64; 4];
        let mut i = 0;

        while i < 32 {
            let limb = 3 - i / 8;
            limbs[limb] = (limbs[limb] << 8) | bytes[i] as u64;
            i += 1;
        }

        Self(limbs)
    }

    /// Returns the big-endian 32-byte encoding.
    pub const fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        let mut i = 0;

        while i < 32 {
            let limb = self.0[3 - i / 8];
            out[i] = (limb >> (56 - 8 * (i % 8))) as u8;
            i += 1;
        }

        out
    }

    /// Parses a hexadecimal string with an optional `0x` prefix.
    ///
    /// Returns `None` for an empty digit string, more than 64 digits, or a
    /// non-hex character. Leading zeros count toward the 64-digit limit.
    pub const fn from_hex(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        let mut i = 0;

        if bytes.len() >= 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X') {
            i = 2;
        }

        if i == bytes.len() || bytes.len() - i > 64 {
            return None;
        }

        let mut limbs = [0u64; 4];

        while i < bytes.len() {
            let digit = match bytes[i] {
                b'0'..=b'9' => bytes[i] - b'0',
                b'a'..=b'f' => bytes[i] - b'a' + 10,
                b'A'..=b'F' => bytes[i] - b'A' + 10,
                _ => return None,
            };

            limbs[3] = (limbs[3] << 4) | (limbs[2] >> 60);
            limbs[2] = (limbs[2] << 4) | (limbs[1] >> 60);
            limbs[1] = (limbs[1] << 4) | (limbs[0] >> 60);
            limbs[0] = (limbs[0] << 4) | digit as u64;

            i += 1;
        }

        Some(Self(limbs))
    }

    /// Parses a hexadecimal literal known to be valid.
    ///
    /// # Panics
    ///
    /// Panics on malformed input. In a `const` context this turns a bad
    /// literal into a compile error.
    pub const fn from_hex_unchecked(s: &str) -> Self {
        match Self::from_hex(s) {
            Some(value) => value,
            None => panic!("invalid 256-bit hex literal"),
        }
    }

    /// Returns `true` if the value is zero.
    pub const fn is_zero(&self) -> bool {
        (self.0[0] | self.0[1] | self.0[2] | self.0[3]) == 0
    }

    /// Returns bit `index` (0 is the least significant bit).
    ///
    /// Indices at or above 256 read as zero.
    pub const fn bit(&self, index: usize) -> bool {
        if index >= 256 {
            return false;
        }

        (self.0[index / 64] >> (index % 64)) & 1 == 1
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=256`.
    pub const fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;
        let mut i = 4;

        while i > 0 {
            i -= 1;

            if self.0[i] == 0 {
                count += 64;
            } else {
                return count + self.0[i].leading_zeros();
            }
        }

        count
    }

    /// Number of significant bits; zero for the value zero.
    pub const fn bits(&self) -> u32 {
        256 - self.leading_zeros()
    }

    /// Addition returning the wrapped sum and the outgoing carry.
    pub const fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; 4];
        let mut carry = 0u64;
        let mut i = 0;

        while i < 4 {
            let sum = self.0[i] as u128 + rhs.0[i] as u128 + carry as u128;
            out[i] = sum as u64;
            carry = (sum >> 64) as u64;
            i += 1;
        }

        (Self(out), carry != 0)
    }

    /// Subtraction returning the wrapped difference and the outgoing borrow.
    pub const fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; 4];
        let mut borrow = 0u64;
        let mut i = 0;

        while i < 4 {
            let (diff, b1) = self.0[i].overflowing_sub(rhs.0[i]);
            let (diff, b2) = diff.overflowing_sub(borrow);
            out[i] = diff;
            borrow = (b1 | b2) as u64;
            i += 1;
        }

        (Self(out), borrow != 0)
    }

    /// `self < rhs`, usable in constant expressions.
    pub const fn const_lt(&self, rhs: &Self) -> bool {
        let mut i = 4;

        while i > 0 {
            i -= 1;

            if self.0[i] != rhs.0[i] {
                return self.0[i] < rhs.0[i];
            }
        }

        false
    }

    /// Keeps only the `count` least significant bits.
    pub const fn low_bits(&self, count: u32) -> Self {
        if count >= 256 {
            return *self;
        }

        let mut out = self.0;
        let mut i = 0;

        while i < 4 {
            let start = 64 * i as u32;

            if count <= start {
                out[i] = 0;
            } else if count < start + 64 {
                out[i] &= (1u64 << (count - start)) - 1;
            }

            i += 1;
        }

        Self(out)
    }
}
