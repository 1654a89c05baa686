// ─────────────────────────────────────────────────────────────────────
// SCPN Nebular Core — Omega
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Collision-strength interpolation.
//!
//! Tabulated Ω_ij(T_k) series are evaluated at the electron temperature
//! by a natural cubic spline on the log₁₀ T axis. Temperatures outside
//! the tabulated range extrapolate the end-interval cubic silently;
//! callers are expected to stay in range.

use ndarray::{Array1, Array2};
use nebular_math::spline::CubicSpline;
use nebular_types::atom::{CollisionStrengths, OmegaSeries};
use nebular_types::error::{NebularError, NebularResult};

/// Evaluate one transition's Ω at `te`, given the shared temperature axis.
pub fn interpolate_omega(
    series: &OmegaSeries,
    temps: &Array1<f64>,
    te: f64,
) -> NebularResult<f64> {
    if te <= 0.0 {
        return Err(NebularError::NonPositive {
            name: "electron temperature",
            value: te,
        });
    }
    let log_temps: Vec<f64> = temps.iter().map(|&t| t.log10()).collect();
    omega_on_log_axis(&log_temps, series, te.log10())
}

/// Spline evaluation on a precomputed log₁₀ T axis. The assembler calls
/// this once per tabulated transition with the axis transformed up front.
pub(crate) fn omega_on_log_axis(
    log_temps: &[f64],
    series: &OmegaSeries,
    log_te: f64,
) -> NebularResult<f64> {
    let spline = CubicSpline::new(log_temps, &series.strength.to_vec())?;
    Ok(spline.eval(log_te))
}

/// Snapshot of the interpolated Ω matrix at `te`.
///
/// Returns a symmetric `level_count × level_count` matrix; pairs without
/// a tabulated series stay zero.
pub fn effective_omega(
    te: f64,
    omega: &CollisionStrengths,
    level_count: usize,
) -> NebularResult<Array2<f64>> {
    if te <= 0.0 {
        return Err(NebularError::NonPositive {
            name: "electron temperature",
            value: te,
        });
    }
    let log_temps: Vec<f64> = omega.temps.iter().map(|&t| t.log10()).collect();
    let log_te = te.log10();

    let mut snapshot = Array2::zeros((level_count, level_count));
    for series in &omega.transitions {
        if series.upper > level_count {
            continue;
        }
        let value = omega_on_log_axis(&log_temps, series, log_te)?;
        snapshot[[series.lower - 1, series.upper - 1]] = value;
        snapshot[[series.upper - 1, series.lower - 1]] = value;
    }
    Ok(snapshot)
}
