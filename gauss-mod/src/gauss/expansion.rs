use tracing::trace;

use super::working::WorkingMatrix;
use crate::errors::SolverError;
use crate::ring::{Matrix, Vector};

impl WorkingMatrix {
    /// Back-substitution over an eliminated matrix.
    ///
    /// Walks the pivot columns from last to first, growing a frontier of
    /// partial solutions. A column whose pivot is a zero-divisor can split a
    /// partial solution into several; a partial solution with no admissible
    /// value is dropped. Returned vectors are in original unknown order.
    pub(crate) fn expand_solutions(&self) -> Result<Matrix, SolverError> {
        let n = self.unknowns;
        let mut frontier: Vec<Vector> = vec![vec![0; n]];

        for col in (0..n).rev() {
            frontier = frontier
                .iter()
                .flat_map(|partial| {
                    self.column_values(partial, col).into_iter().map(move |x| {
                        let mut next = partial.clone();
                        next[col] = x;
                        next
                    })
                })
                .collect();

            if frontier.is_empty() {
                return Err(SolverError::NoValueAtColumn { column: col });
            }
            trace!(column = col, frontier = frontier.len(), "column resolved");
        }

        Ok(frontier.iter().map(|x| self.restore_order(x)).collect())
    }

    /// All `x` with `D[col][col] · x ≡ D[col][N] - Σ_{k>col} D[col][k] · partial[k]`.
    fn column_values(&self, partial: &Vector, col: usize) -> Vec<i64> {
        let n = self.unknowns;
        let row = &self.rows[col];
        let b = (col + 1..n).fold(row[n], |b, k| {
            self.ring.sub(b, self.ring.mul(row[k], partial[k]))
        });

        self.ring.solve_linear(row[col], b)
    }
}
