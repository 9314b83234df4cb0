//! Affine points of the Stark curve.
//!
//! [`CurvePoint`] is a tagged variant: the point at infinity is an explicit
//! case rather than a sentinel coordinate pair, so every operation handles
//! it exhaustively. The variant is public so callers can match on it, but
//! the group operations assume their operands lie on the curve: build
//! points with [`CurvePoint::new`], [`CurvePoint::from_x`] or
//! [`CurvePoint::from_bytes`]. Debug builds assert this on every operand.
//!
//! Addition and doubling use the textbook chord-and-tangent formulas with
//! one field inversion each. Scalar multiplication switches to Jacobian
//! coordinates internally and inverts once at the end.

use super::jacobian::JacobianPoint;
use super::params::{ALPHA, BETA};
use crate::error::CryptoError;
use crate::field::Felt;
use crate::primitives::U256;

use std::ops::{Add, AddAssign, Neg, Sub};

/// A point of the Stark curve, or the point at infinity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CurvePoint {
    /// The group identity.
    Identity,
    /// An affine point satisfying `y² = x³ + α·x + β`.
    ///
    /// Constructing this variant directly skips that check; results of the
    /// group operations on an off-curve point are meaningless.
    Affine { x: Felt, y: Felt },
}

/// Right-hand side of the curve equation for a given `x`.
fn curve_rhs(x: &Felt) -> Felt {
    (x.square() + ALPHA) * *x + BETA
}

impl CurvePoint {
    /// Builds an affine point, checking the curve equation.
    pub fn new(x: Felt, y: Felt) -> Result<CurvePoint, CryptoError> {
        let point = CurvePoint::Affine { x, y };

        if !point.is_on_curve() {
            return Err(CryptoError::PointNotOnCurve);
        }

        Ok(point)
    }

    /// Recovers a point from its x-coordinate.
    ///
    /// Of the two candidates `(x, y)` and `(x, −y)` the one produced by the
    /// field square root is returned; callers that need the other negate it.
    /// Fails with [`CryptoError::PointNotOnCurve`] when no point has this
    /// x-coordinate.
    pub fn from_x(x: Felt) -> Result<CurvePoint, CryptoError> {
        let y = curve_rhs(&x).sqrt().ok_or(CryptoError::PointNotOnCurve)?;
        Ok(CurvePoint::Affine { x, y })
    }

    /// Decodes `x ‖ y`, each coordinate 32 bytes big-endian.
    ///
    /// Sixty-four zero bytes decode to the identity (`(0, 0)` is not on the
    /// curve, so the encoding is unambiguous).
    pub fn from_bytes(bytes: &[u8; 64]) -> Result<CurvePoint, CryptoError> {
        if bytes.iter().all(|&b| b == 0) {
            return Ok(CurvePoint::Identity);
        }

        let (x_bytes, y_bytes) = bytes.split_at(32);
        let x = Felt::from_bytes_be(x_bytes.try_into().map_err(|_| CryptoError::InvalidEncoding)?)?;
        let y = Felt::from_bytes_be(y_bytes.try_into().map_err(|_| CryptoError::InvalidEncoding)?)?;

        CurvePoint::new(x, y)
    }

    /// Encodes the point as `x ‖ y`; the identity encodes as zeros.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];

        if let CurvePoint::Affine { x, y } = self {
            out[..32].copy_from_slice(&x.to_bytes_be());
            out[32..].copy_from_slice(&y.to_bytes_be());
        }

        out
    }

    pub fn x(&self) -> Option<Felt> {
        match self {
            CurvePoint::Identity => None,
            CurvePoint::Affine { x, .. } => Some(*x),
        }
    }

    pub fn y(&self) -> Option<Felt> {
        match self {
            CurvePoint::Identity => None,
            CurvePoint::Affine { y, .. } => Some(*y),
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, CurvePoint::Identity)
    }

    /// Group membership test. The identity is a member; an affine point is
    /// a member iff it satisfies the curve equation.
    pub fn is_on_curve(&self) -> bool {
        match self {
            CurvePoint::Identity => true,
            CurvePoint::Affine { x, y } => y.square() == curve_rhs(x),
        }
    }

    /// Tangent-rule doubling.
    pub fn double(&self) -> CurvePoint {
        match *self {
            CurvePoint::Identity => CurvePoint::Identity,
            CurvePoint::Affine { x, y } => {
                if y.is_zero() {
                    return CurvePoint::Identity;
                }

                let slope = (x.square().double() + x.square() + ALPHA) * y.double().invert_or_zero();
                Self::from_slope(slope, x, y, x)
            }
        }
    }

    /// Scalar multiplication `k·P` by left-to-right double-and-add.
    ///
    /// Any 256-bit `k` is accepted; callers pass scalars in `[0, n)` or
    /// Pedersen chunks. Running time depends on the bit length and Hamming
    /// weight of `k`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `self` is not on the curve.
    pub fn multiply(&self, k: &U256) -> CurvePoint {
        debug_assert!(self.is_on_curve(), "scalar multiplication of an off-curve point");

        let (x, y) = match self {
            CurvePoint::Identity => return CurvePoint::Identity,
            CurvePoint::Affine { x, y } => (x, y),
        };

        let mut acc = JacobianPoint::IDENTITY;

        for i in (0..k.bits() as usize).rev() {
            acc = acc.double();

            if k.bit(i) {
                acc = acc.add_affine(x, y);
            }
        }

        acc.to_affine()
    }

    /// Sum of `(x1, y1)` and a point with x-coordinate `x2` on the line of
    /// the given slope.
    fn from_slope(slope: Felt, x1: Felt, y1: Felt, x2: Felt) -> CurvePoint {
        let x3 = slope.square() - x1 - x2;
        let y3 = slope * (x1 - x3) - y1;

        CurvePoint::Affine { x: x3, y: y3 }
    }
}

/// Chord-and-tangent addition.
impl Add for CurvePoint {
    type Output = CurvePoint;

    fn add(self, rhs: CurvePoint) -> CurvePoint {
        debug_assert!(self.is_on_curve() && rhs.is_on_curve(), "addition of an off-curve point");

        match (self, rhs) {
            (CurvePoint::Identity, p) | (p, CurvePoint::Identity) => p,
            (CurvePoint::Affine { x: x1, y: y1 }, CurvePoint::Affine { x: x2, y: y2 }) => {
                if x1 == x2 {
                    // Same x: either the same point or its negation.
                    return if y1 == y2 {
                        self.double()
                    } else {
                        CurvePoint::Identity
                    };
                }

                let slope = (y2 - y1) * (x2 - x1).invert_or_zero();
                CurvePoint::from_slope(slope, x1, y1, x2)
            }
        }
    }
}

impl AddAssign for CurvePoint {
    fn add_assign(&mut self, rhs: CurvePoint) {
        *self = *self + rhs;
    }
}

impl Neg for CurvePoint {
    type Output = CurvePoint;

    fn neg(self) -> CurvePoint {
        match self {
            CurvePoint::Identity => CurvePoint::Identity,
            CurvePoint::Affine { x, y } => CurvePoint::Affine { x, y: -y },
        }
    }
}

impl Sub for CurvePoint {
    type Output = CurvePoint;

    fn sub(self, rhs: CurvePoint) -> CurvePoint {
        self + (-rhs)
    }
}
