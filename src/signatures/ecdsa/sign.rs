use super::core::{Signature, check_bounded, check_bounded_nonzero};
use crate::curve::{CurvePoint, GENERATOR, Scalar};
use crate::error::CryptoError;
use crate::field::Felt;

/// Derives the public key `private_key·G`.
pub fn get_public_key(private_key: &Felt) -> CurvePoint {
    GENERATOR.multiply(&private_key.to_u256())
}

/// Signs `msg_hash` with an explicit nonce `k`.
///
/// Choosing `k` is the caller's responsibility: it must be secret,
/// uniformly random in `[1, n)` and never reused. Fails with
/// [`CryptoError::ScalarOutOfRange`] when `msg_hash ≥ 2²⁵¹`, when `k` is
/// outside `[1, n)`, or when the nonce produces an `r` or `s` outside
/// `[1, 2²⁵¹)`; retry with another nonce in the last case.
pub fn sign(private_key: &Felt, msg_hash: &Felt, k: &Felt) -> Result<Signature, CryptoError> {
    check_bounded(&msg_hash.to_u256())?;

    let k_scalar = Scalar::from_felt(k)?;
    if k_scalar.is_zero() {
        return Err(CryptoError::ScalarOutOfRange);
    }

    let r = GENERATOR
        .multiply(&k.to_u256())
        .x()
        .ok_or(CryptoError::ScalarOutOfRange)?;
    check_bounded_nonzero(&r.to_u256())?;

    let d = Scalar::reduce(&private_key.to_u256());
    let s = (Scalar::from_felt(msg_hash)? + Scalar::from_felt(&r)? * d) * k_scalar.inverse()?;
    let s = s.to_u256();
    check_bounded_nonzero(&s)?;

    Ok(Signature::new(r, Felt::try_from(s)?))
}
