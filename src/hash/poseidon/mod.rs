//! Poseidon permutation and sponge hashes over the Stark field.
//!
//! The permutation follows the Hades design used by Starknet: four full
//! rounds, eighty-three partial rounds, four full rounds. Every round adds
//! constants, applies the S-box `x ↦ x³` and multiplies the state by the
//! MDS matrix
//!
//! ```text
//! | 3  1  1 |
//! | 1 -1  1 |
//! | 1  1 -2 |
//! ```
//!
//! In a partial round the S-box only touches the last state element. The
//! constants the other two elements would receive are pushed through the
//! linear layer into the following round ahead of time ("compressed"), so a
//! partial round adds a single constant. The compressed table is derived
//! from [`params::ROUND_CONSTANTS`] once, on first use.
//!
//! The sponge hashes absorb two elements per permutation into
//! `state[0]` and `state[1]` and squeeze `state[0]`.

pub mod params;

use params::{FULL_ROUNDS, PARTIAL_ROUNDS, ROUND_CONSTANTS, ROUNDS, WIDTH};

use crate::field::Felt;

use std::sync::LazyLock;

/// The permutation state.
pub type PoseidonState = [Felt; WIDTH];

const HALF_FULL_ROUNDS: usize = FULL_ROUNDS / 2;

struct CompressedConstants {
    first_full: [[Felt; WIDTH]; HALF_FULL_ROUNDS],
    partial: [Felt; PARTIAL_ROUNDS],
    last_full: [[Felt; WIDTH]; HALF_FULL_ROUNDS],
}

static COMPRESSED: LazyLock<CompressedConstants> = LazyLock::new(|| {
    tracing::trace!(rounds = ROUNDS, "compressing poseidon round constants");
    compress(&ROUND_CONSTANTS)
});

fn compress(constants: &[[Felt; WIDTH]; ROUNDS]) -> CompressedConstants {
    let (first, rest) = constants.split_at(HALF_FULL_ROUNDS);
    let (middle, last) = rest.split_at(PARTIAL_ROUNDS);

    let mut first_full = [[Felt::ZERO; WIDTH]; HALF_FULL_ROUNDS];
    first_full.copy_from_slice(first);

    let mut partial = [Felt::ZERO; PARTIAL_ROUNDS];
    let mut carry = [Felt::ZERO; WIDTH];

    for (out, row) in partial.iter_mut().zip(middle) {
        let mut pending = [carry[0] + row[0], carry[1] + row[1], carry[2] + row[2]];
        *out = pending[2];
        pending[2] = Felt::ZERO;
        mix(&mut pending);
        carry = pending;
    }

    let mut last_full = [[Felt::ZERO; WIDTH]; HALF_FULL_ROUNDS];
    last_full.copy_from_slice(last);

    for (c, folded) in last_full[0].iter_mut().zip(carry) {
        *c += folded;
    }

    CompressedConstants {
        first_full,
        partial,
        last_full,
    }
}

/// Multiplication by the MDS matrix, expanded by hand.
#[inline(always)]
fn mix(state: &mut PoseidonState) {
    let t = state[0] + state[1] + state[2];

    state[0] = t + state[0].double();
    state[1] = t - state[1].double();
    state[2] = t - state[2].double() - state[2];
}

#[inline(always)]
fn cube(x: Felt) -> Felt {
    x.square() * x
}

#[inline(always)]
fn full_round(state: &mut PoseidonState, constants: &[Felt; WIDTH]) {
    for (s, c) in state.iter_mut().zip(constants) {
        *s = cube(*s + *c);
    }

    mix(state);
}

#[inline(always)]
fn partial_round(state: &mut PoseidonState, constant: Felt) {
    state[2] = cube(state[2] + constant);
    mix(state);
}

/// Applies the permutation to `state` in place.
pub fn poseidon_permute_in_place(state: &mut PoseidonState) {
    let constants = &*COMPRESSED;

    for row in &constants.first_full {
        full_round(state, row);
    }

    for &constant in &constants.partial {
        partial_round(state, constant);
    }

    for row in &constants.last_full {
        full_round(state, row);
    }
}

/// Returns the permutation of `state`.
pub fn poseidon_permute(mut state: PoseidonState) -> PoseidonState {
    poseidon_permute_in_place(&mut state);
    state
}

/// Two-to-one hash: `permute([x, y, 2])[0]`.
pub fn poseidon_hash(x: &Felt, y: &Felt) -> Felt {
    let mut state = [*x, *y, Felt::TWO];
    poseidon_permute_in_place(&mut state);
    state[0]
}

/// One-to-one hash: `permute([x, 0, 1])[0]`.
pub fn poseidon_hash_single(x: &Felt) -> Felt {
    let mut state = [*x, Felt::ZERO, Felt::ONE];
    poseidon_permute_in_place(&mut state);
    state[0]
}

/// Sponge hash of an arbitrary-length slice.
///
/// The input is padded with `1` (and then `0` if needed to reach an even
/// length) and absorbed two elements per permutation.
pub fn poseidon_hash_many(values: &[Felt]) -> Felt {
    let mut state = [Felt::ZERO; WIDTH];
    let mut pairs = values.chunks_exact(2);

    for pair in &mut pairs {
        state[0] += pair[0];
        state[1] += pair[1];
        poseidon_permute_in_place(&mut state);
    }

    match pairs.remainder() {
        [last] => {
            state[0] += *last;
            state[1] += Felt::ONE;
        }
        _ => state[0] += Felt::ONE,
    }

    poseidon_permute_in_place(&mut state);
    state[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use params::MDS;

    fn textbook_permute(state: &mut PoseidonState) {
        for (round, constants) in ROUND_CONSTANTS.iter().enumerate() {
            let full = round < HALF_FULL_ROUNDS || round >= HALF_FULL_ROUNDS + PARTIAL_ROUNDS;

            for (s, c) in state.iter_mut().zip(constants) {
                *s += *c;
            }

            if full {
                state.iter_mut().for_each(|s| *s = cube(*s));
            } else {
                state[2] = cube(state[2]);
            }

            mix(state);
        }
    }

    fn felt_from_i64(v: i64) -> Felt {
        if v < 0 {
            -Felt::from(v.unsigned_abs())
        } else {
            Felt::from(v as u64)
        }
    }

    #[test]
    fn mix_matches_mds_matrix() {
        let input = [Felt::from(5u64), Felt::from(11u64), Felt::from(0x1234u64)];
        let mut fast = input;
        mix(&mut fast);

        for (row, out) in MDS.iter().zip(fast) {
            let expected: Felt = row
                .iter()
                .zip(input)
                .map(|(&m, x)| felt_from_i64(m) * x)
                .sum();

            assert_eq!(out, expected);
        }
    }

    #[test]
    fn compressed_rounds_match_textbook_rounds() {
        for seed in [0u64, 1, 0xffff_ffff] {
            let start = [Felt::from(seed), Felt::from(seed + 7), -Felt::from(seed + 3)];

            let mut expected = start;
            textbook_permute(&mut expected);

            assert_eq!(poseidon_permute(start), expected);
        }
    }

    #[test]
    fn partial_rounds_carry_one_constant_each() {
        let constants = &*COMPRESSED;

        assert_eq!(constants.partial.len(), PARTIAL_ROUNDS);
        assert_eq!(constants.first_full[0], ROUND_CONSTANTS[0]);
        assert_eq!(constants.last_full[3], ROUND_CONSTANTS[ROUNDS - 1]);
    }
}
