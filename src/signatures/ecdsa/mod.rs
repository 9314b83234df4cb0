//! ECDSA over the Stark curve.
//!
//! This is the signature scheme of the Cairo signature builtin, which
//! differs from textbook ECDSA in a few places:
//!
//! - `r`, the message hash and `w = s⁻¹ mod n` must lie below `2²⁵¹`
//!   (`r` and `w` also non-zero); `s` must lie in `[1, n)`
//! - the final check compares `R.x` with `r` directly, with no reduction
//!   modulo `n`
//! - a public key given by its x-coordinate alone is accepted with either
//!   y; a public key given as a point is checked with that point only
//!
//! ## Verification
//!
//! ```text
//! w  = s⁻¹        (mod n)
//! u1 = msg·w      (mod n)
//! u2 = r·w        (mod n)
//! R  = u1·G + u2·Q
//! accept iff R ≠ O and R.x = r
//! ```
//!
//! Range checks run before the public key is inspected, and the public key
//! is validated before any scalar multiplication. The `bool` entry points
//! are total: every malformed input is reported as `false`. The `try_*`
//! variants expose the [`CryptoError`](crate::CryptoError) instead.
//!
//! ## Timing
//!
//! Every input to verification is public, so scalar multiplication and
//! inversion run in variable time. Only the final `R.x = r` comparison uses
//! a constant-time equality.
//!
//! Signing (with a caller-supplied nonce) is provided to produce reference
//! signatures; it is not hardened against side channels.

mod core;
mod sign;
mod verify;

pub use self::core::{ELEMENT_UPPER_BOUND, Signature};
pub use self::sign::{get_public_key, sign};
pub use self::verify::{try_verify, try_verify_signature, verify, verify_signature};
