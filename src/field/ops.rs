//! Operator traits for [`Felt`].
//!
//! Every operator returns a canonical element; there is no lazy reduction
//! across operator boundaries.

use super::felt::{Felt, MODULUS};
use crate::primitives::montgomery;

use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl Add for Felt {
    type Output = Felt;

    fn add(self, rhs: Felt) -> Felt {
        Felt(montgomery::add(&self.0, &rhs.0, &MODULUS))
    }
}

impl Sub for Felt {
    type Output = Felt;

    fn sub(self, rhs: Felt) -> Felt {
        Felt(montgomery::sub(&self.0, &rhs.0, &MODULUS))
    }
}

impl Mul for Felt {
    type Output = Felt;

    fn mul(self, rhs: Felt) -> Felt {
        Felt(montgomery::mul(&self.0, &rhs.0, &MODULUS))
    }
}

impl Neg for Felt {
    type Output = Felt;

    fn neg(self) -> Felt {
        Felt(montgomery::neg(&self.0, &MODULUS))
    }
}

impl AddAssign for Felt {
    fn add_assign(&mut self, rhs: Felt) {
        *self = *self + rhs;
    }
}

impl SubAssign for Felt {
    fn sub_assign(&mut self, rhs: Felt) {
        *self = *self - rhs;
    }
}

impl MulAssign for Felt {
    fn mul_assign(&mut self, rhs: Felt) {
        *self = *self * rhs;
    }
}

impl Sum for Felt {
    fn sum<I: Iterator<Item = Felt>>(iter: I) -> Felt {
        iter.fold(Felt::ZERO, |acc, x| acc + x)
    }
}

impl Product for Felt {
    fn product<I: Iterator<Item = Felt>>(iter: I) -> Felt {
        iter.fold(Felt::ONE, |acc, x| acc * x)
    }
}
