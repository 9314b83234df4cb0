//! Scalars modulo the curve order `n`.
//!
//! Signature arithmetic (`s⁻¹`, `msg·w`, `r·w`, signing) happens in this
//! field. Scalars reuse the Montgomery routines of the base field with the
//! curve order as modulus.

use crate::error::CryptoError;
use crate::field::Felt;
use crate::primitives::U256;
use crate::primitives::montgomery::{self, Modulus};

use std::fmt::{self, Debug, Formatter};
use std::ops::{Add, Mul};

pub(crate) const ORDER_MODULUS: Modulus = Modulus {
    value: U256::from_limbs([
        0x1e66_a241_adc6_4d2f,
        0xb781_126d_cae7_b232,
        0xffff_ffff_ffff_ffff,
        0x0800_0000_0000_0010,
    ]),
    r: U256::from_limbs([
        0x5192_5a0b_f4fc_a74f,
        0xc75e_c4b4_6df1_6bee,
        0x0000_0000_0000_0008,
        0x07ff_ffff_ffff_fdf1,
    ]),
    r2: U256::from_limbs([
        0x6021_b3f1_ea1c_688d,
        0x509c_f64d_14ce_60b9,
        0xbaf0_ab4c_f78b_babb,
        0x07d9_e57c_2333_766e,
    ]),
    inv: 0xbb6b_3c4c_e8bd_e631,
};

/// An integer modulo the order of the curve's generator.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Scalar(U256);

impl Scalar {
    pub const ZERO: Scalar = Scalar(U256::ZERO);

    pub const ONE: Scalar = Scalar(ORDER_MODULUS.r);

    /// The curve order `n`.
    pub const ORDER: U256 = ORDER_MODULUS.value;

    /// Accepts an integer already in `[0, n)`.
    ///
    /// Fails with [`CryptoError::ScalarOutOfRange`] otherwise.
    pub fn from_u256(value: &U256) -> Result<Scalar, CryptoError> {
        if *value >= Self::ORDER {
            return Err(CryptoError::ScalarOutOfRange);
        }

        Ok(Scalar::reduce(value))
    }

    /// Interprets a field element as a scalar without reduction.
    pub fn from_felt(value: &Felt) -> Result<Scalar, CryptoError> {
        Scalar::from_u256(&value.to_u256())
    }

    /// Reduces an arbitrary 256-bit integer modulo `n`.
    pub fn reduce(value: &U256) -> Scalar {
        Scalar(montgomery::to_montgomery(value, &ORDER_MODULUS))
    }

    /// Returns the canonical integer in `[0, n)`.
    pub fn to_u256(&self) -> U256 {
        montgomery::from_montgomery(&self.0, &ORDER_MODULUS)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiplicative inverse modulo `n`.
    pub fn inverse(&self) -> Result<Scalar, CryptoError> {
        if self.is_zero() {
            return Err(CryptoError::DivisionByZero);
        }

        Ok(Scalar(montgomery::invert(&self.0, &ORDER_MODULUS)))
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        Scalar(montgomery::add(&self.0, &rhs.0, &ORDER_MODULUS))
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        Scalar(montgomery::mul(&self.0, &rhs.0, &ORDER_MODULUS))
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({:#x})", self.to_u256())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_rejected_and_order_minus_one_accepted() {
        assert_eq!(
            Scalar::from_u256(&Scalar::ORDER),
            Err(CryptoError::ScalarOutOfRange)
        );

        let max = Scalar::from_u256(&(Scalar::ORDER - U256::ONE)).unwrap();
        assert_eq!(max + Scalar::ONE, Scalar::ZERO);
    }

    #[test]
    fn reduce_wraps_values_above_order() {
        let above = Scalar::ORDER + U256::from(5u64);
        assert_eq!(Scalar::reduce(&above).to_u256(), U256::from(5u64));
    }

    #[test]
    fn inverse_round_trips() {
        let a = Scalar::reduce(&U256::from(0xdead_beefu64));
        let inv = a.inverse().unwrap();

        assert_eq!(a * inv, Scalar::ONE);
        assert_eq!(Scalar::ZERO.inverse(), Err(CryptoError::DivisionByZero));
    }
}
