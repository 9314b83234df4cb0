//! 256-bit unsigned integer primitive
//!
//! This module defines the `U256` type, the fixed-size integer underneath
//! field elements, curve scalars and every compiled-in constant.
//!
//! `U256` is designed as a low-level, dependency-free primitive rather than
//! a full big-integer abstraction. Modular arithmetic is layered on top of
//! it in [`super::montgomery`].

mod conv;
mod core;
mod ops;

/// Fixed-size 256-bit unsigned integer.
pub use self::core::U256;
