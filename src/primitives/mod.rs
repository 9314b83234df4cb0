//! Primitive types
//!
//! This module defines the low-level building blocks the rest of the
//! crate is written against.
//!
//! Primitives are simple, fixed-size, dependency-free types with
//! well-defined semantics. They intentionally do not attempt to replicate a
//! full-featured big-integer library.
//!
//! Current primitives include:
//! - `U256`: a fixed-size 256-bit unsigned integer
//! - Montgomery modular arithmetic shared by the base and scalar fields
//! - constant-time equality for fixed-size byte strings

mod ct;
pub(crate) mod montgomery;
mod u256;

pub use ct::ConstantTimeEq;
pub use u256::U256;
