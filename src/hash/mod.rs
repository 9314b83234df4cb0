//! Hash functions over the Stark field.
//!
//! - [`poseidon`]: the width-3 Hades permutation and the sponge hashes
//!   built on it
//! - [`pedersen`]: the two-input elliptic-curve hash and its array form
//!
//! Both are pure functions over fixed, compiled-in parameters.

pub mod pedersen;
pub mod poseidon;

pub use pedersen::{pedersen_hash, pedersen_hash_array};
pub use poseidon::{
    PoseidonState, poseidon_hash, poseidon_hash_many, poseidon_hash_single, poseidon_permute,
    poseidon_permute_in_place,
};
