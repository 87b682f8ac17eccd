//! Solves systems of linear congruences `A·x ≡ b (mod m)` for a possibly
//! composite modulus `m`, enumerating every solution.

pub mod config;
pub mod errors;
pub mod gauss;
pub mod ring;

pub use config::SolverConfig;
pub use errors::SolverError;
pub use gauss::{GaussSolver, SolutionSet, solve};
