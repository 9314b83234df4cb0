//! Stark curve parameters.
//!
//! ```text
//! y² = x³ + α·x + β  (mod p)
//! ```
//!
//! These values are fixed reference data of the system and are evaluated
//! at compile time.

use super::point::CurvePoint;
use crate::field::Felt;

/// The curve coefficient `α`.
pub const ALPHA: Felt = Felt::ONE;

/// The curve coefficient `β`.
pub const BETA: Felt =
    Felt::from_hex_unchecked("0x6f21413efbe40de150e596d72f7a8c5609ad26c15c915c1f4cdfcb99cee9e89");

/// The generator `G` of the prime-order group used for signatures.
pub const GENERATOR: CurvePoint = CurvePoint::Affine {
    x: Felt::from_hex_unchecked("0x1ef15c18599971b7beced415a40f0c7deacfd9b0d1819e03d723d8bc943cfca"),
    y: Felt::from_hex_unchecked("0x5668060aa49730b7be4801df46ec62de53ecd11abe43a32873000c36e8dc1f"),
};
