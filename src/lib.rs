//! Stark curve cryptography
//!
//! This crate provides the cryptographic primitives of the Stark/Cairo
//! ecosystem, built on a single 252-bit prime field:
//!
//! ```text
//! p = 2²⁵¹ + 17·2¹⁹² + 1
//! ```
//!
//! The focus is on **bit-exact agreement with the reference
//! implementations**: every constant is compiled in, every operation is a
//! pure function, and every fallible boundary reports a typed error.
//!
//! # Module overview
//!
//! - `primitives`
//!   Fixed-size building blocks: the `U256` integer, Montgomery modular
//!   arithmetic shared by both prime fields, and constant-time equality.
//!
//! - `field`
//!   The Stark field element `Felt`, its arithmetic, square roots and its
//!   canonical 32-byte big-endian encoding.
//!
//! - `curve`
//!   The short-Weierstrass curve `y² = x³ + x + β` over the field:
//!   `CurvePoint` group arithmetic, scalar multiplication and `Scalar`
//!   values modulo the group order `n`.
//!
//! - `hash`
//!   The Poseidon permutation (width 3, Hades rounds) with its sponge
//!   hashes, and the Pedersen hash over four fixed curve points.
//!
//! - `signatures`
//!   ECDSA verification over the curve with the exact acceptance rules of
//!   the Cairo signature builtin, plus deterministic signing from a
//!   caller-supplied nonce.
//!
//! - `ffi` (feature `ffi`)
//!   A C ABI over 32-byte big-endian elements, declared in
//!   `include/stark_crypto.h`.
//!
//! # Design goals
//!
//! - No heap allocations in core arithmetic
//! - Constants evaluated at compile time where possible
//! - Total verification: malformed input is rejected, never a panic
//! - Clear separation between arithmetic layers
//!
//! Operations that only ever see public data (hashing, verification) run
//! in variable time. Do not use `sign` with secret keys in an environment
//! where timing is observable.

mod error;

pub mod curve;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod field;
pub mod hash;
pub mod primitives;
pub mod signatures;

pub use curve::{CurvePoint, Scalar};
pub use error::CryptoError;
pub use field::Felt;
pub use hash::{
    pedersen_hash, pedersen_hash_array, poseidon_hash, poseidon_hash_many, poseidon_hash_single,
    poseidon_permute,
};
pub use primitives::U256;
pub use signatures::{Signature, verify, verify_signature};
