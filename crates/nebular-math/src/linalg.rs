//! Dense linear solve for the statistical-equilibrium systems.
//!
//! Gaussian elimination with partial pivoting and back substitution.
//! The systems here are small (L ≤ ~40 levels) and carry one extremely
//! sparse, well-conditioned conservation row, so a hand-rolled in-place
//! factorization beats pulling in a general solver.

use ndarray::{Array1, Array2};
use nebular_types::error::{NebularError, NebularResult};

/// Pivot magnitude below which the matrix is treated as singular.
const PIVOT_FLOOR: f64 = 1e-300;

/// Solve `a x = b`, consuming both as working storage.
pub fn solve_linear_system(
    mut a: Array2<f64>,
    mut b: Array1<f64>,
) -> NebularResult<Array1<f64>> {
    let n = b.len();
    if a.nrows() != n || a.ncols() != n {
        return Err(NebularError::LinAlg(format!(
            "matrix is {}x{} for a right-hand side of length {n}",
            a.nrows(),
            a.ncols()
        )));
    }
    if n == 0 {
        return Err(NebularError::LinAlg("empty system".into()));
    }

    // Forward elimination with row pivoting.
    for col in 0..n {
        let mut pivot_row = col;
        let mut pivot_mag = a[[col, col]].abs();
        for row in col + 1..n {
            let mag = a[[row, col]].abs();
            if mag > pivot_mag {
                pivot_mag = mag;
                pivot_row = row;
            }
        }
        if pivot_mag < PIVOT_FLOOR {
            return Err(NebularError::LinAlg(format!(
                "singular matrix at column {col}"
            )));
        }
        if pivot_row != col {
            for k in 0..n {
                a.swap([col, k], [pivot_row, k]);
            }
            b.swap(col, pivot_row);
        }

        let pivot = a[[col, col]];
        for row in col + 1..n {
            let factor = a[[row, col]] / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                let head = a[[col, k]];
                a[[row, k]] -= factor * head;
            }
            let rhs = b[col];
            b[row] -= factor * rhs;
        }
    }

    // Back substitution.
    let mut x = Array1::zeros(n);
    for row in (0..n).rev() {
        let mut sum = b[row];
        for k in row + 1..n {
            sum -= a[[row, k]] * x[k];
        }
        x[row] = sum / a[[row, row]];
    }
    Ok(x)
}
