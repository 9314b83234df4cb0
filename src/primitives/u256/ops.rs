//! Arithmetic, bitwise and ordering operations for `U256`
//!
//! Only the operations the crate relies on are provided:
//! - ordering (range checks against the prime and the curve order)
//! - AND / XOR and shifts (chunk splitting, test bit flips)
//! - wrapping addition and subtraction
//!
//! Modular arithmetic lives in [`crate::primitives::montgomery`]; the
//! operators here wrap modulo 2²⁵⁶.

use super::U256;

use std::cmp::Ordering;
use std::ops::{Add, BitAnd, BitXor, Shl, Shr, Sub};

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Bitwise XOR between two 256-bit values.
impl BitXor for U256 {
    type Output = U256;

    fn bitxor(self, rhs: U256) -> Self::Output {
        let mut out = [0u64; 4];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l ^ r);

        U256(out)
    }
}

/// Bitwise AND between two 256-bit values.
impl BitAnd for U256 {
    type Output = U256;

    fn bitand(self, rhs: U256) -> Self::Output {
        let mut out = [0u64; 4];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l & r);

        U256(out)
    }
}

/// Logical left shift. Shifts of 256 bits or more yield zero.
impl Shl<u32> for U256 {
    type Output = U256;

    fn shl(self, shift: u32) -> Self::Output {
        if shift >= 256 {
            return U256::ZERO;
        }

        let limb_shift = (shift / 64) as usize;
        let bit_shift = shift % 64;
        let mut out = [0u64; 4];

        for i in limb_shift..4 {
            out[i] = self.0[i - limb_shift] << bit_shift;

            if bit_shift != 0 && i > limb_shift {
                out[i] |= self.0[i - limb_shift - 1] >> (64 - bit_shift);
            }
        }

        U256(out)
    }
}

/// Logical right shift. Shifts of 256 bits or more yield zero.
impl Shr<u32> for U256 {
    type Output = U256;

    fn shr(self, shift: u32) -> Self::Output {
        if shift >= 256 {
            return U256::ZERO;
        }

        let limb_shift = (shift / 64) as usize;
        let bit_shift = shift % 64;
        let mut out = [0u64; 4];

        for i in 0..(4 - limb_shift) {
            out[i] = self.0[i + limb_shift] >> bit_shift;

            if bit_shift != 0 && i + limb_shift + 1 < 4 {
                out[i] |= self.0[i + limb_shift + 1] << (64 - bit_shift);
            }
        }

        U256(out)
    }
}

/// Addition modulo 2²⁵⁶.
impl Add for U256 {
    type Output = U256;

    fn add(self, rhs: U256) -> Self::Output {
        self.overflowing_add(&rhs).0
    }
}

/// Subtraction modulo 2²⁵⁶.
impl Sub for U256 {
    type Output = U256;

    fn sub(self, rhs: U256) -> Self::Output {
        self.overflowing_sub(&rhs).0
    }
}
