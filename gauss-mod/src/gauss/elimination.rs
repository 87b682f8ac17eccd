use tracing::{error, trace};

use super::working::WorkingMatrix;
use crate::errors::SolverError;

impl WorkingMatrix {
    /// Forward elimination over pivot steps `0..N`.
    ///
    /// Afterwards `D[k][i] == 0` for every `k > i`. With `free_columns` an
    /// all-zero remaining block is accepted as a zero pivot at `(i, i)`.
    pub(crate) fn eliminate(&mut self, free_columns: bool) -> Result<(), SolverError> {
        for i in 0..self.unknowns {
            let (row, col) = match self.find_pivot(i, i) {
                Some(pivot) => pivot,
                None if free_columns => {
                    trace!(step = i, "free column");
                    (i, i)
                }
                None => return Err(SolverError::NoPivot { step: i }),
            };

            self.swap_rows(i, row);
            self.swap_columns(i, col);

            for k in i + 1..self.row_count() {
                self.eliminate_entry(k, i)?;
            }
        }

        Ok(())
    }

    /// Clears `D[k][i]` by subtracting `mul · row[i]`, where `D[i][i] · mul ≡ D[k][i]`.
    fn eliminate_entry(&mut self, k: usize, i: usize) -> Result<(), SolverError> {
        let target = self.rows[k][i];
        if target == 0 {
            return Ok(());
        }

        let pivot = self.rows[i][i];
        let Some(mul) = self.ring.quotient(pivot, target) else {
            error!(
                step = i,
                row = k,
                pivot,
                target,
                modulus = self.ring.modulus,
                "elimination multiplier undefined"
            );
            return Err(SolverError::InternalInvariantViolation(format!(
                "pivot {} at step {} cannot eliminate {} in row {} mod {}",
                pivot, i, target, k, self.ring.modulus
            )));
        };

        let factor = self.ring.neg(mul);
        self.combine_rows(k, i, factor);
        Ok(())
    }
}
