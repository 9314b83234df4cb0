//! The Stark elliptic curve.
//!
//! This module provides group arithmetic on the short-Weierstrass curve
//!
//! ```text
//! y² = x³ + x + β   over 𝔽ₚ,  p = 2²⁵¹ + 17·2¹⁹² + 1
//! ```
//!
//! together with scalars modulo the prime order `n` of the generator.
//!
//! ## Contents
//!
//! - [`CurvePoint`]: identity or checked affine point; addition, doubling,
//!   negation, subtraction, scalar multiplication, byte encoding
//! - [`Scalar`]: integers modulo `n`
//! - [`params`]: `α`, `β` and the generator `G`
//!
//! Scalar multiplication is the single routine shared by the Pedersen hash
//! (four fixed-point multiplications) and signature verification (two
//! multiplications). It runs in variable time: every caller in this crate
//! multiplies public values.

mod jacobian;
pub mod params;
mod point;
mod scalar;

pub use params::{ALPHA, BETA, GENERATOR};
pub use point::CurvePoint;
pub use scalar::Scalar;
