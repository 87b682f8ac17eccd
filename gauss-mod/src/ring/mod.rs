//! # Ring Module
//!
//! Provides the [`Ring`] struct for representing rings Z_m with a possibly
//! composite modulus, together with the number-theory kernel it is built on.

pub mod helper;
pub mod math;
pub mod matrix_ops;

/// Represents a mathematical vector using a `Vec<i64>`.
pub type Vector = Vec<i64>;
/// Represents a mathematical matrix using a `Vec<Vec<i64>>`.
pub type Matrix = Vec<Vec<i64>>;

pub use helper::{extended_gcd, gcd, mod_inverse, rem};
pub use math::Ring;
