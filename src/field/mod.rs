//! Stark prime field arithmetic.
//!
//! Every other component of the crate is written against [`Felt`]:
//!
//! - curve coordinates and the curve constants `α`, `β`
//! - the Poseidon state and its round constants
//! - Pedersen inputs and outputs
//! - signature components and message hashes
//!
//! ## Encoding
//!
//! The external representation of an element is a fixed 32-byte
//! big-endian integer, valid iff strictly less than `p`. Hexadecimal text
//! with an optional `0x` prefix is accepted and produced for diagnostics
//! and (with the `serde` feature) for serialisation.
//!
//! ## Timing
//!
//! Arithmetic is variable time. The crate only operates on public values
//! (hash inputs, signatures, public keys); see the signature module for the
//! one comparison that is performed in constant time.

mod felt;
mod ops;
#[cfg(feature = "serde")]
mod serialization;

pub use felt::Felt;
