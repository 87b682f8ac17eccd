use crate::errors::SolverError;
use crate::ring::matrix_ops::{augmented_shape, normalize_matrix};
use crate::ring::{Matrix, Ring, Vector};

/// The mutable copy of an augmented matrix a single solve works on.
///
/// Entries are kept in `[0, m)`. If there are fewer equations than unknowns the
/// matrix is padded with zero rows so that there is a row for every pivot step.
#[derive(Debug, Clone)]
pub(crate) struct WorkingMatrix {
    pub(crate) ring: Ring,
    /// `D`, at least `unknowns` rows of `unknowns + 1` entries.
    pub(crate) rows: Matrix,
    pub(crate) unknowns: usize,
    /// `permutation[c]` is the original unknown held by working column `c`.
    pub(crate) permutation: Vec<usize>,
}

impl WorkingMatrix {
    pub(crate) fn try_from_augmented(matrix: &Matrix, ring: Ring) -> Result<Self, SolverError> {
        let (equations, unknowns) = augmented_shape(matrix)?;

        let mut rows = normalize_matrix(matrix, &ring);
        if equations < unknowns {
            rows.resize(unknowns, vec![0; unknowns + 1]);
        }

        Ok(Self {
            ring,
            rows,
            unknowns,
            permutation: (0..unknowns).collect(),
        })
    }

    pub(crate) fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }

    /// Swaps two coefficient columns and records the swap in the permutation.
    pub(crate) fn swap_columns(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for row in self.rows.iter_mut() {
            row.swap(a, b);
        }
        self.permutation.swap(a, b);
    }

    /// `row[target] := row[target] + factor · row[source] (mod m)`, entrywise.
    pub(crate) fn combine_rows(&mut self, target: usize, source: usize, factor: i64) {
        let ring = self.ring;
        let source_row = self.rows[source].clone();
        for (t, s) in self.rows[target].iter_mut().zip(source_row) {
            *t = ring.add(*t, ring.mul(factor, s));
        }
    }

    /// After elimination every row past the last pivot must be all zero,
    /// right-hand side included; otherwise r(A) != r(A~).
    pub(crate) fn check_consistency(&self) -> Result<(), SolverError> {
        match self
            .rows
            .iter()
            .enumerate()
            .skip(self.unknowns)
            .find(|(_, row)| row.iter().any(|&v| v != 0))
        {
            Some((row, _)) => Err(SolverError::RankMismatch { row }),
            None => Ok(()),
        }
    }

    /// Product of `gcd(D[i][i], m)` over all pivots, saturating at `u64::MAX`.
    pub(crate) fn multiplicity(&self) -> u64 {
        (0..self.unknowns)
            .map(|i| self.ring.gcd_with_modulus(self.rows[i][i]) as u64)
            .fold(1u64, |count, g| count.saturating_mul(g))
    }

    /// Maps a vector indexed by working columns back to the original unknown order.
    pub(crate) fn restore_order(&self, working: &Vector) -> Vector {
        let mut original = vec![0; working.len()];
        for (&unknown, &value) in self.permutation.iter().zip(working) {
            original[unknown] = value;
        }
        original
    }
}
