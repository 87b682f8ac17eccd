use crate::errors::SolverError;
use crate::ring::{Matrix, Ring, Vector};

use itertools::Itertools;

/// Checks that `matrix` is a well-formed augmented matrix `[A | b]`.
///
/// Returns `(rows, unknowns)`, i.e. `R` and `N` where every row holds `N + 1` entries.
///
/// # Errors
///
/// Returns `SolverError::DimensionMismatch` for an empty matrix, a matrix without
/// coefficient columns, or ragged rows.
pub fn augmented_shape(matrix: &Matrix) -> Result<(usize, usize), SolverError> {
    let Some(first) = matrix.first() else {
        return Err(SolverError::DimensionMismatch(
            "Augmented matrix must have at least one row".into(),
        ));
    };
    if first.len() < 2 {
        return Err(SolverError::DimensionMismatch(format!(
            "Augmented matrix needs at least one unknown and a right-hand side, got {} column(s)",
            first.len()
        )));
    }
    if !matrix.iter().map(Vec::len).all_equal() {
        let (i, row) = matrix
            .iter()
            .find_position(|row| row.len() != first.len())
            .unwrap_or((0, first));
        return Err(SolverError::DimensionMismatch(format!(
            "Row {} has length {} but expected {}",
            i,
            row.len(),
            first.len()
        )));
    }

    Ok((matrix.len(), first.len() - 1))
}

/// Returns a copy of `matrix` with every entry reduced into `[0, m)`.
pub fn normalize_matrix(matrix: &Matrix, ring: &Ring) -> Matrix {
    matrix
        .iter()
        .map(|row| row.iter().map(|&v| ring.normalize(v)).collect())
        .collect()
}

/// For every equation `a·x ≡ b` of the augmented matrix computes `a·x - b (mod m)`.
///
/// # Errors
///
/// Returns `SolverError::DimensionMismatch` if the matrix is malformed or `x`
/// does not have one entry per unknown.
pub fn residuals(matrix: &Matrix, x: &Vector, ring: &Ring) -> Result<Vector, SolverError> {
    let (_, n) = augmented_shape(matrix)?;
    if x.len() != n {
        return Err(SolverError::DimensionMismatch(format!(
            "Matrix has {} unknowns but vector length is {}",
            n,
            x.len()
        )));
    }

    Ok(matrix
        .iter()
        .map(|row| {
            let lhs = row[..n]
                .iter()
                .zip_eq(x)
                .fold(0, |sum, (&a, &xi)| ring.add(sum, ring.mul(a, xi)));
            ring.sub(lhs, row[n])
        })
        .collect())
}

/// Returns `true` if `x` satisfies every equation of the augmented matrix modulo `m`.
pub fn satisfies(matrix: &Matrix, x: &Vector, ring: &Ring) -> Result<bool, SolverError> {
    Ok(residuals(matrix, x, ring)?.iter().all(|&r| r == 0))
}
