// ─────────────────────────────────────────────────────────────────────
// SCPN Nebular Core — Matrix
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Rate-matrix assembly for the statistical-equilibrium system.
//!
//! At (Tₑ, Nₑ) the level populations n_j = N_j/N_ion satisfy X·n = 0
//! with Σ n_j = 1. The raw X is rank-deficient by one (its rows sum to
//! zero up to roundoff), so the first row is replaced by the
//! conservation equation and the right-hand side becomes e₀. The
//! substituted row is extremely sparse and well-conditioned, which is
//! what lets the partial-pivot Gaussian solve downstream stay simple.

use ndarray::{Array1, Array2};
use nebular_types::atom::AtomicModel;
use nebular_types::constants::{COLLISION_RATE_COEFF, HC_OVER_K};
use nebular_types::error::{NebularError, NebularResult};

use crate::omega::omega_on_log_axis;

pub(crate) fn check_inputs(
    te: f64,
    ne: f64,
    model: &AtomicModel,
    level_count: usize,
) -> NebularResult<()> {
    if te <= 0.0 {
        return Err(NebularError::NonPositive {
            name: "electron temperature",
            value: te,
        });
    }
    if ne <= 0.0 {
        return Err(NebularError::NonPositive {
            name: "electron density",
            value: ne,
        });
    }
    if level_count == 0 || level_count > model.level_count() {
        return Err(NebularError::LevelOutOfRange {
            level: level_count,
            count: model.level_count(),
        });
    }
    Ok(())
}

/// Collisional rate coefficients q[[a, b]] (cm³ s⁻¹) from level a to
/// level b, both 0-based, restricted to the first `level_count` levels.
///
/// Downward: q_ji = 8.629×10⁻⁶ Ω_ij(Tₑ) / (g_j √Tₑ) for collision
/// strengths, or the tabulated rate scaled by 10^irats. Upward follows
/// from detailed balance with the Boltzmann factor exp(−1.4388 ΔE/Tₑ).
pub fn collision_rates(
    te: f64,
    model: &AtomicModel,
    level_count: usize,
) -> NebularResult<Array2<f64>> {
    let log_temps: Vec<f64> = model.omega.temps.iter().map(|&t| t.log10()).collect();
    let log_te = te.log10();
    let rate_scale = if model.omega.irats == 0 {
        0.0
    } else {
        10.0_f64.powi(model.omega.irats)
    };

    let mut q = Array2::zeros((level_count, level_count));
    for series in &model.omega.transitions {
        if series.upper > level_count {
            continue;
        }
        let lower = series.lower - 1;
        let upper = series.upper - 1;
        let omega_t = omega_on_log_axis(&log_temps, series, log_te)?;

        let g_lower = model.levels.weight(lower);
        let g_upper = model.levels.weight(upper);
        let q_down = if model.omega.irats == 0 {
            COLLISION_RATE_COEFF * omega_t / (g_upper * te.sqrt())
        } else {
            omega_t * rate_scale
        };

        let delta_e = model.levels.energy(upper) - model.levels.energy(lower);
        let q_up = q_down * (g_upper / g_lower) * (-HC_OVER_K * delta_e / te).exp();

        q[[upper, lower]] = q_down;
        q[[lower, upper]] = q_up;
    }
    Ok(q)
}

/// Assemble the substituted linear system (X, B) at (Tₑ, Nₑ).
///
/// X[[i, j]] for i ≠ j carries the total rate into level i from level j
/// (collisional plus radiative); the diagonal carries minus the total
/// rate out. Row 0 is the conservation row.
pub fn assemble_rate_matrix(
    te: f64,
    ne: f64,
    model: &AtomicModel,
    level_count: usize,
) -> NebularResult<(Array2<f64>, Array1<f64>)> {
    check_inputs(te, ne, model, level_count)?;
    let q = collision_rates(te, model, level_count)?;
    let a = &model.radiative.a;

    let mut x = Array2::zeros((level_count, level_count));
    for i in 0..level_count {
        let mut out_rate = 0.0;
        for j in 0..level_count {
            if j == i {
                continue;
            }
            x[[i, j]] = ne * q[[j, i]] + a[[j, i]];
            out_rate += ne * q[[i, j]] + a[[i, j]];
        }
        x[[i, i]] = -out_rate;
    }

    // Conservation replaces the first equilibrium equation.
    for j in 0..level_count {
        x[[0, j]] = 1.0;
    }
    let mut b = Array1::zeros(level_count);
    b[0] = 1.0;

    Ok((x, b))
}
