//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors reported at the boundaries of the crate.
///
/// Arithmetic on already-validated values never fails; these variants are
/// produced while decoding external input or by the one partial field
/// operation (inversion).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// A byte or hex encoding does not denote a canonical element (its value
    /// is at least the modulus, or the text is malformed).
    #[error("invalid field element encoding")]
    InvalidEncoding,

    /// Inversion of zero was requested.
    #[error("division by zero")]
    DivisionByZero,

    /// Coordinates do not satisfy the curve equation, or the point at
    /// infinity was supplied where an affine point is required.
    #[error("point is not on the curve")]
    PointNotOnCurve,

    /// A signature component, message hash or nonce lies outside the range
    /// the signature scheme accepts.
    #[error("scalar out of range")]
    ScalarOutOfRange,
}
