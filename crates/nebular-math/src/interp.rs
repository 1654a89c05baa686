//! Bilinear interpolation on tabulated axes.
//!
//! The recombination grids (SH95 hydrogenic, Porter He I) tabulate their
//! values on explicit, non-uniform temperature and density axes, so the
//! cell is located by bracketing search rather than by fixed spacing.
//! Queries outside an axis clamp to the edge cell.

use ndarray::{Array1, Array2};
use nebular_types::error::{NebularError, NebularResult};

/// Index of the lower node of the bracketing interval, in `[0, n-2]`.
fn bracket(axis: &Array1<f64>, q: f64) -> usize {
    let n = axis.len();
    let mut lo = 0;
    let mut hi = n - 1;
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if axis[mid] > q {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    lo
}

/// Bilinear interpolation of `values[[ix, iy]]` tabulated on `x_axis` × `y_axis`.
pub fn interp_bilinear(
    x_axis: &Array1<f64>,
    y_axis: &Array1<f64>,
    values: &Array2<f64>,
    x: f64,
    y: f64,
) -> NebularResult<f64> {
    if x_axis.len() < 2 || y_axis.len() < 2 {
        return Err(NebularError::InvalidAtomicData(
            "bilinear interpolation needs at least 2 nodes per axis".into(),
        ));
    }
    if values.dim() != (x_axis.len(), y_axis.len()) {
        return Err(NebularError::InvalidAtomicData(format!(
            "value grid is {:?} for axes of {} x {}",
            values.dim(),
            x_axis.len(),
            y_axis.len()
        )));
    }

    let ix = bracket(x_axis, x);
    let iy = bracket(y_axis, y);

    let tx = ((x - x_axis[ix]) / (x_axis[ix + 1] - x_axis[ix])).clamp(0.0, 1.0);
    let ty = ((y - y_axis[iy]) / (y_axis[iy + 1] - y_axis[iy])).clamp(0.0, 1.0);

    let v00 = values[[ix, iy]];
    let v01 = values[[ix, iy + 1]];
    let v10 = values[[ix + 1, iy]];
    let v11 = values[[ix + 1, iy + 1]];

    Ok((1.0 - tx) * ((1.0 - ty) * v00 + ty * v01) + tx * ((1.0 - ty) * v10 + ty * v11))
}
