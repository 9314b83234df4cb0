//! Stark ECDSA signature type and range rules.

use crate::curve::Scalar;
use crate::error::CryptoError;
use crate::field::Felt;
use crate::primitives::U256;

/// Exclusive upper bound `2²⁵¹` for message hashes, `r` and `w = s⁻¹`.
///
/// Keeping these values below `2²⁵¹` (rather than below `n`) matches the
/// range the Cairo signature builtin can express.
pub const ELEMENT_UPPER_BOUND: U256 = U256::from_limbs([0, 0, 0, 0x0800_0000_0000_0000]);

/// An ECDSA signature `(r, s)` over the Stark curve.
///
/// The fields are public and carry no range guarantee on their own; the
/// verification functions check `r ∈ [1, 2²⁵¹)` and `s ∈ [1, n)` before
/// any curve arithmetic. Use [`Signature::try_new`] to check up front.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    pub r: Felt,
    pub s: Felt,
}

impl Signature {
    /// Pairs `r` and `s` without checking their ranges.
    pub fn new(r: Felt, s: Felt) -> Self {
        Self { r, s }
    }

    /// Pairs `r` and `s`, failing with [`CryptoError::ScalarOutOfRange`]
    /// unless both are in the ranges verification accepts.
    pub fn try_new(r: Felt, s: Felt) -> Result<Self, CryptoError> {
        check_signature_ranges(&r, &s)?;
        Ok(Self { r, s })
    }
}

/// `r ∈ [1, 2²⁵¹)` and `s ∈ [1, n)`
pub(crate) fn check_signature_ranges(r: &Felt, s: &Felt) -> Result<(), CryptoError> {
    check_bounded_nonzero(&r.to_u256())?;

    let s = s.to_u256();
    if s.is_zero() || s >= Scalar::ORDER {
        return Err(CryptoError::ScalarOutOfRange);
    }

    Ok(())
}

/// `value ∈ [1, 2²⁵¹)`
pub(crate) fn check_bounded_nonzero(value: &U256) -> Result<(), CryptoError> {
    if value.is_zero() || *value >= ELEMENT_UPPER_BOUND {
        return Err(CryptoError::ScalarOutOfRange);
    }

    Ok(())
}

/// `value ∈ [0, 2²⁵¹)`
pub(crate) fn check_bounded(value: &U256) -> Result<(), CryptoError> {
    if *value >= ELEMENT_UPPER_BOUND {
        return Err(CryptoError::ScalarOutOfRange);
    }

    Ok(())
}
