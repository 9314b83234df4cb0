//! Jacobian coordinates for inversion-free scalar multiplication.
//!
//! A point `(X : Y : Z)` denotes the affine point `(X/Z², Y/Z³)`; `Z = 0`
//! is the point at infinity. Only the two operations double-and-add needs
//! are provided: doubling and mixed addition with an affine point.

use super::params::ALPHA;
use super::point::CurvePoint;
use crate::field::Felt;

#[derive(Clone, Copy, Debug)]
pub(crate) struct JacobianPoint {
    x: Felt,
    y: Felt,
    z: Felt,
}

impl JacobianPoint {
    pub(crate) const IDENTITY: JacobianPoint = JacobianPoint {
        x: Felt::ONE,
        y: Felt::ONE,
        z: Felt::ZERO,
    };

    pub(crate) fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Converts back to affine form with a single inversion.
    pub(crate) fn to_affine(&self) -> CurvePoint {
        if self.is_identity() {
            return CurvePoint::Identity;
        }

        let z_inv = self.z.invert_or_zero();
        let z_inv2 = z_inv.square();

        CurvePoint::Affine {
            x: self.x * z_inv2,
            y: self.y * z_inv2 * z_inv,
        }
    }

    /// dbl-2007-bl
    pub(crate) fn double(&self) -> JacobianPoint {
        if self.is_identity() {
            return *self;
        }

        let xx = self.x.square();
        let yy = self.y.square();
        let yyyy = yy.square();
        let zz = self.z.square();

        let s = ((self.x + yy).square() - xx - yyyy).double();
        let m = xx.double() + xx + ALPHA * zz.square();
        let t = m.square() - s.double();

        let y3 = m * (s - t) - yyyy.double().double().double();
        let z3 = (self.y + self.z).square() - yy - zz;

        JacobianPoint { x: t, y: y3, z: z3 }
    }

    /// madd-2007-bl, falling back to doubling when both operands coincide.
    pub(crate) fn add_affine(&self, x2: &Felt, y2: &Felt) -> JacobianPoint {
        if self.is_identity() {
            return JacobianPoint {
                x: *x2,
                y: *y2,
                z: Felt::ONE,
            };
        }

        let z1z1 = self.z.square();
        let u2 = *x2 * z1z1;
        let s2 = *y2 * self.z * z1z1;
        let h = u2 - self.x;
        let r = (s2 - self.y).double();

        if h.is_zero() {
            return if r.is_zero() {
                self.double()
            } else {
                JacobianPoint::IDENTITY
            };
        }

        let hh = h.square();
        let i = hh.double().double();
        let j = h * i;
        let v = self.x * i;

        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (self.y * j).double();
        let z3 = (self.z + h).square() - z1z1 - hh;

        JacobianPoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }
}
