//! Pedersen hash over the Stark curve.
//!
//! ```text
//! H(x, y) = (S + x_low·P1 + x_high·P2 + y_low·P3 + y_high·P4).x
//! ```
//!
//! where `low` is the 248 least significant bits of an input and `high` the
//! remaining (at most four) bits. A canonical element cannot reach the full
//! 252-bit range, so its top chunk gets a separate base point instead of
//! being folded into one undifferentiated multiplier.
//!
//! Inputs are arbitrary canonical elements; there is no further range
//! requirement and no error path.

pub mod params;

use params::{LOW_PART_BITS, P1, P2, P3, P4, SHIFT_POINT};

use crate::curve::CurvePoint;
use crate::field::Felt;

/// Hashes two field elements.
pub fn pedersen_hash(x: &Felt, y: &Felt) -> Felt {
    let x = x.to_u256();
    let y = y.to_u256();

    let terms = [
        (P1, x.low_bits(LOW_PART_BITS)),
        (P2, x >> LOW_PART_BITS),
        (P3, y.low_bits(LOW_PART_BITS)),
        (P4, y >> LOW_PART_BITS),
    ];

    let sum = terms
        .iter()
        .fold(SHIFT_POINT, |acc, (base, chunk)| acc + base.multiply(chunk));

    match sum {
        CurvePoint::Affine { x, .. } => x,
        // Would require a known discrete-log relation between the constant points.
        CurvePoint::Identity => Felt::ZERO,
    }
}

/// Chained hash of a slice, suffixed with its length:
///
/// ```text
/// H(H(…H(H(0, v₁), v₂)…, vₖ), k)
/// ```
pub fn pedersen_hash_array(values: &[Felt]) -> Felt {
    let chained = values
        .iter()
        .fold(Felt::ZERO, |acc, value| pedersen_hash(&acc, value));

    pedersen_hash(&chained, &Felt::from(values.len() as u64))
}
