use super::core::{check_bounded, check_bounded_nonzero, check_signature_ranges};
use crate::curve::{CurvePoint, GENERATOR, Scalar};
use crate::error::CryptoError;
use crate::field::Felt;
use crate::primitives::{ConstantTimeEq, U256};

fn check_components(msg_hash: &Felt, r: &Felt, s: &Felt) -> Result<(), CryptoError> {
    check_bounded(&msg_hash.to_u256())?;
    check_signature_ranges(r, s)
}

fn check_public_key(public_key: &CurvePoint) -> Result<(), CryptoError> {
    if public_key.is_identity() || !public_key.is_on_curve() {
        return Err(CryptoError::PointNotOnCurve);
    }

    Ok(())
}

/// `(msg_hash·w, r·w) mod n` with `w = s⁻¹`, after checking `w < 2²⁵¹`.
fn weighted_scalars(msg_hash: &Felt, r: &Felt, s: &Felt) -> Result<(U256, U256), CryptoError> {
    let w = Scalar::from_felt(s)?.inverse()?;
    check_bounded_nonzero(&w.to_u256())?;

    let u1 = Scalar::from_felt(msg_hash)? * w;
    let u2 = Scalar::from_felt(r)? * w;

    Ok((u1.to_u256(), u2.to_u256()))
}

fn x_matches(candidate: &CurvePoint, r: &Felt) -> bool {
    match candidate {
        CurvePoint::Identity => false,
        CurvePoint::Affine { x, .. } => x.to_bytes_be().ct_eq(&r.to_bytes_be()),
    }
}

/// Verifies a signature against a full public key point, reporting why a
/// malformed input was rejected.
///
/// `Ok(false)` means the inputs were well formed but the signature does
/// not match.
pub fn try_verify_signature(
    msg_hash: &Felt,
    r: &Felt,
    s: &Felt,
    public_key: &CurvePoint,
) -> Result<bool, CryptoError> {
    check_components(msg_hash, r, s)?;
    check_public_key(public_key)?;

    let (u1, u2) = weighted_scalars(msg_hash, r, s)?;
    let candidate = GENERATOR.multiply(&u1) + public_key.multiply(&u2);

    Ok(x_matches(&candidate, r))
}

/// Verifies a signature against a public key given by its x-coordinate,
/// reporting why a malformed input was rejected.
///
/// Both points with this x-coordinate are tried, i.e. the signature is
/// accepted if `(u1·G + u2·Q).x == r` or `(u1·G − u2·Q).x == r`.
pub fn try_verify(
    public_key_x: &Felt,
    msg_hash: &Felt,
    r: &Felt,
    s: &Felt,
) -> Result<bool, CryptoError> {
    check_components(msg_hash, r, s)?;

    let public_key = CurvePoint::from_x(*public_key_x)?;
    let (u1, u2) = weighted_scalars(msg_hash, r, s)?;

    let u1_g = GENERATOR.multiply(&u1);
    let u2_q = public_key.multiply(&u2);

    Ok(x_matches(&(u1_g + u2_q), r) | x_matches(&(u1_g - u2_q), r))
}

/// Verifies `(r, s)` on `msg_hash` against a full public key point.
///
/// Total over arbitrary input: out-of-range components, the identity or an
/// off-curve key all yield `false`.
pub fn verify_signature(msg_hash: &Felt, r: &Felt, s: &Felt, public_key: &CurvePoint) -> bool {
    settle(try_verify_signature(msg_hash, r, s, public_key))
}

/// Verifies `(r, s)` on `msg_hash` against a public key x-coordinate.
///
/// Total over arbitrary input, like [`verify_signature`].
pub fn verify(public_key_x: &Felt, msg_hash: &Felt, r: &Felt, s: &Felt) -> bool {
    settle(try_verify(public_key_x, msg_hash, r, s))
}

fn settle(outcome: Result<bool, CryptoError>) -> bool {
    match outcome {
        Ok(true) => true,
        Ok(false) => {
            tracing::debug!("signature does not match public key");
            false
        }
        Err(err) => {
            tracing::debug!(error = %err, "signature rejected");
            false
        }
    }
}
