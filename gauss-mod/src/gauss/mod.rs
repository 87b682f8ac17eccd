//! # Gaussian elimination modulo a composite modulus
//!
//! Solves `A·x ≡ b (mod m)` given as an augmented matrix `[A | b]`. Unlike
//! elimination over a field, pivots may be zero-divisors; a zero-divisor pivot
//! with `gcd(pivot, m) = g` lets its unknown take `g` values, so a consistent
//! system can have several solutions. All of them are returned, up to a
//! configurable ceiling.
//!
//! ```
//! # use gauss_mod::gauss::GaussSolver;
//! // 2x ≡ 2 (mod 4)
//! let solver = GaussSolver::try_with(4).unwrap();
//! let solutions = solver.solve(&vec![vec![2, 2]]).unwrap();
//! assert_eq!(solutions.solutions(), &[vec![1], vec![3]]);
//! ```

mod elimination;
mod expansion;
mod pivot;
mod working;

use crate::config::SolverConfig;
use crate::errors::SolverError;
use crate::ring::{Matrix, Ring, Vector};

use working::WorkingMatrix;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Solver for linear systems over Z_m.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaussSolver {
    pub ring: Ring,
    pub config: SolverConfig,
}

/// Every solution of a system, in original unknown order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSolutionSet")]
pub struct SolutionSet {
    pub modulus: u64,
    /// Product of `gcd(pivot, m)` over all pivots. An upper bound on
    /// `solutions.len()`: equal unless some branches of back-substitution
    /// were inconsistent.
    pub multiplicity: u64,
    /// Sorted, without duplicates.
    pub solutions: Matrix,
}

/// Wire form of [`SolutionSet`]; deserialized sets go through [`SolutionSet::new`].
#[derive(Deserialize)]
struct RawSolutionSet {
    modulus: u64,
    multiplicity: u64,
    solutions: Matrix,
}

impl From<RawSolutionSet> for SolutionSet {
    fn from(raw: RawSolutionSet) -> Self {
        SolutionSet::new(raw.modulus, raw.multiplicity, raw.solutions)
    }
}

impl GaussSolver {
    /// Creates a solver with the default [`SolverConfig`].
    pub fn try_with(modulus: u64) -> Result<Self, SolverError> {
        Self::with_config(modulus, SolverConfig::default())
    }

    pub fn with_config(modulus: u64, config: SolverConfig) -> Result<Self, SolverError> {
        Ok(Self {
            ring: Ring::try_with(modulus)?,
            config,
        })
    }

    /// Solves the system given by the augmented matrix `[A | b]`.
    ///
    /// The input is copied; it is never mutated.
    ///
    /// # Errors
    ///
    /// * `DimensionMismatch` for empty or ragged input.
    /// * `NoPivot` if some elimination step finds no usable pivot.
    /// * `RankMismatch` if the system is inconsistent.
    /// * `TooManySolutions` if the multiplicity exceeds `config.max_solutions`.
    /// * `NoValueAtColumn` if back-substitution finds no value for a column.
    /// * `InternalInvariantViolation` if an accepted pivot cannot clear its column.
    pub fn solve(&self, matrix: &Matrix) -> Result<SolutionSet, SolverError> {
        let mut working = WorkingMatrix::try_from_augmented(matrix, self.ring)?;
        debug!(
            modulus = self.ring.modulus,
            equations = matrix.len(),
            unknowns = working.unknowns,
            "solving"
        );

        let solutions = self.run(&mut working).inspect_err(|err| {
            debug!(modulus = self.ring.modulus, %err, "solve failed");
        })?;
        debug!(
            modulus = self.ring.modulus,
            solutions = solutions.len(),
            "solved"
        );

        Ok(solutions)
    }

    fn run(&self, working: &mut WorkingMatrix) -> Result<SolutionSet, SolverError> {
        working.eliminate(self.config.free_columns)?;
        working.check_consistency()?;

        let multiplicity = working.multiplicity();
        if multiplicity > self.config.max_solutions {
            warn!(
                count = multiplicity,
                limit = self.config.max_solutions,
                "refusing to enumerate solutions"
            );
            return Err(SolverError::TooManySolutions {
                count: multiplicity,
                limit: self.config.max_solutions,
            });
        }

        let solutions = working.expand_solutions()?;
        Ok(SolutionSet::new(self.ring.modulus, multiplicity, solutions))
    }
}

/// Solves `[A | b]` modulo `modulus` with the default configuration.
pub fn solve(matrix: &Matrix, modulus: u64) -> Result<SolutionSet, SolverError> {
    GaussSolver::try_with(modulus)?.solve(matrix)
}

impl SolutionSet {
    pub fn new(modulus: u64, multiplicity: u64, mut solutions: Matrix) -> Self {
        solutions.sort_unstable();
        solutions.dedup();
        Self {
            modulus,
            multiplicity,
            solutions,
        }
    }

    pub fn solutions(&self) -> &[Vector] {
        &self.solutions
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vector> {
        self.solutions.iter()
    }

    pub fn contains(&self, x: &Vector) -> bool {
        self.solutions.binary_search(x).is_ok()
    }

    pub fn to_json(&self) -> Result<String, SolverError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl IntoIterator for SolutionSet {
    type Item = Vector;
    type IntoIter = std::vec::IntoIter<Vector>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}

impl<'a> IntoIterator for &'a SolutionSet {
    type Item = &'a Vector;
    type IntoIter = std::slice::Iter<'a, Vector>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.iter()
    }
}
