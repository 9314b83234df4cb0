//! C ABI over 32-byte big-endian field elements.
//!
//! Declared in `include/stark_crypto.h`. Every pointer must reference 32
//! readable bytes (and writable, for outputs). Null pointers and
//! non-canonical encodings are reported through the return value; nothing
//! panics across the boundary.

use crate::field::Felt;
use crate::hash::{pedersen, poseidon};
use crate::signatures::ecdsa;

use std::ptr;

/// Reads a canonical element from `bytes`.
///
/// # Safety
///
/// `bytes` must be null or valid for reading 32 bytes.
unsafe fn read_felt(bytes: *const u8) -> Option<Felt> {
    if bytes.is_null() {
        return None;
    }

    let mut buf = [0u8; 32];
    // SAFETY: non-null and, per the caller contract, 32 bytes are readable.
    unsafe { ptr::copy_nonoverlapping(bytes, buf.as_mut_ptr(), 32) };

    Felt::from_bytes_be(&buf).ok()
}

/// # Safety
///
/// `bytes` must be non-null and valid for writing 32 bytes.
unsafe fn write_felt(value: &Felt, bytes: *mut u8) {
    let buf = value.to_bytes_be();
    // SAFETY: guaranteed by the caller.
    unsafe { ptr::copy_nonoverlapping(buf.as_ptr(), bytes, 32) };
}

/// Applies the Poseidon permutation in place to the state `(a, b, c)`.
///
/// Returns `false`, leaving all three buffers untouched, when a pointer is
/// null or an element is not canonical.
///
/// # Safety
///
/// `a`, `b` and `c` must each be valid for reading and writing 32 bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn poseidon_permute(a: *mut u8, b: *mut u8, c: *mut u8) -> bool {
    // SAFETY: forwarded caller contract.
    let state = unsafe { (read_felt(a), read_felt(b), read_felt(c)) };

    let mut state = match state {
        (Some(a), Some(b), Some(c)) => [a, b, c],
        _ => {
            tracing::debug!("poseidon_permute: invalid input element");
            return false;
        }
    };

    poseidon::poseidon_permute_in_place(&mut state);

    // SAFETY: all three pointers were checked non-null above.
    unsafe {
        write_felt(&state[0], a);
        write_felt(&state[1], b);
        write_felt(&state[2], c);
    }

    true
}

/// Writes the Pedersen hash of `a` and `b` to `out`.
///
/// Returns `false`, leaving `out` untouched, when a pointer is null or an
/// input is not canonical.
///
/// # Safety
///
/// `a` and `b` must be valid for reading 32 bytes; `out` must be valid for
/// writing 32 bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pedersen_hash(a: *const u8, b: *const u8, out: *mut u8) -> bool {
    if out.is_null() {
        return false;
    }

    // SAFETY: forwarded caller contract.
    let (Some(a), Some(b)) = (unsafe { read_felt(a) }, unsafe { read_felt(b) }) else {
        tracing::debug!("pedersen_hash: invalid input element");
        return false;
    };

    let hash = pedersen::pedersen_hash(&a, &b);

    // SAFETY: `out` is non-null and writable per the caller contract.
    unsafe { write_felt(&hash, out) };

    true
}

/// Verifies the signature `(r, s)` on `msg` against the public key whose
/// x-coordinate is `public_key`.
///
/// Any invalid pointer or encoding yields `false`.
///
/// # Safety
///
/// Each pointer must be valid for reading 32 bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn verify_signature(
    public_key: *const u8,
    msg: *const u8,
    r: *const u8,
    s: *const u8,
) -> bool {
    // SAFETY: forwarded caller contract.
    let inputs = unsafe { (read_felt(public_key), read_felt(msg), read_felt(r), read_felt(s)) };

    match inputs {
        (Some(public_key), Some(msg), Some(r), Some(s)) => ecdsa::verify(&public_key, &msg, &r, &s),
        _ => {
            tracing::debug!("verify_signature: invalid input element");
            false
        }
    }
}
