// ─────────────────────────────────────────────────────────────────────
// SCPN Nebular Core — Populations
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Statistical-equilibrium level populations and critical densities.

use ndarray::Array1;
use nebular_math::linalg::solve_linear_system;
use nebular_types::atom::AtomicModel;
use nebular_types::error::{NebularError, NebularResult};

use crate::matrix::{assemble_rate_matrix, check_inputs, collision_rates};

/// Normalized level populations n_j = N_j/N_ion at (Tₑ, Nₑ).
///
/// `level_count ≤ L` restricts the system to the lowest levels so that a
/// diagnostic using only a few of them runs faster. The result sums to 1
/// within a few L·ε and is strictly positive for well-formed data.
pub fn populations(
    te: f64,
    ne: f64,
    model: &AtomicModel,
    level_count: usize,
) -> NebularResult<Array1<f64>> {
    let (x, b) = assemble_rate_matrix(te, ne, model, level_count)?;
    solve_linear_system(x, b)
}

/// Critical density of each level at Tₑ (cm⁻³):
/// N_crit,j = Σ_{i<j} A_ji / Σ_{i≠j} q_ji.
///
/// The ground level, and any level with no collisional depopulation
/// channel, reports zero.
pub fn critical_densities(
    te: f64,
    model: &AtomicModel,
    level_count: usize,
) -> NebularResult<Array1<f64>> {
    // Density does not enter the definition; any positive value passes
    // the shared input check.
    check_inputs(te, 1.0, model, level_count)?;
    let q = collision_rates(te, model, level_count)?;
    let a = &model.radiative.a;

    let mut ncrit = Array1::zeros(level_count);
    for j in 1..level_count {
        let mut radiative_out = 0.0;
        for i in 0..j {
            radiative_out += a[[j, i]];
        }
        let mut collisional_out = 0.0;
        for i in 0..level_count {
            if i != j {
                collisional_out += q[[j, i]];
            }
        }
        if collisional_out > 0.0 {
            ncrit[j] = radiative_out / collisional_out;
        }
    }
    Ok(ncrit)
}
