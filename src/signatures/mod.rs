//! Digital signature schemes.
//!
//! The crate implements a single scheme, ECDSA over the Stark curve as
//! verified by the Cairo signature builtin. It is kept in its own
//! submodule, responsible for its signature type, its range rules and its
//! verification equation.

pub mod ecdsa;

pub use ecdsa::{Signature, verify, verify_signature};
