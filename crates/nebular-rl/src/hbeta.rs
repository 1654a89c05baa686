// ─────────────────────────────────────────────────────────────────────
// SCPN Nebular Core — Hbeta
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Hβ reference emissivity from the Storey & Hummer (1995) case-B grid.
//!
//! Every recombination-line abundance is the quotient of this value and
//! the line's own emissivity, scaled by the observed flux.

use nebular_types::error::{NebularError, NebularResult};
use nebular_types::recomb::HydrogenicGrid;

/// Bilinear interpolation of a hydrogenic grid in (log₁₀ T, log₁₀ Nₑ).
/// Shared with the He II evaluator, which uses the same grid layout.
pub(crate) fn grid_emissivity(te: f64, ne: f64, grid: &HydrogenicGrid) -> NebularResult<f64> {
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
    let log_temps = grid.temps.mapv(f64::log10);
    let log_densities = grid.densities.mapv(f64::log10);
    nebular_math::interp::interp_bilinear(
        &log_temps,
        &log_densities,
        &grid.values,
        te.log10(),
        ne.log10(),
    )
}

/// ε(Hβ) at (Tₑ, Nₑ) in erg cm³ s⁻¹.
pub fn emissivity_hbeta(te: f64, ne: f64, grid: &HydrogenicGrid) -> NebularResult<f64> {
    grid_emissivity(te, ne, grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn grid() -> HydrogenicGrid {
        // ε falls with T roughly as a power law; a small lattice around
        // the canonical 1e4 K, 1e4 cm⁻³ corner is enough for the tests.
        HydrogenicGrid::new(
            array![5000.0, 10000.0, 20000.0],
            array![100.0, 10000.0],
            array![
                [2.2e-25, 2.1e-25],
                [1.235e-25, 1.24e-25],
                [6.8e-26, 6.9e-26]
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_nodes_reproduced() {
        let g = grid();
        let eps = emissivity_hbeta(10000.0, 100.0, &g).unwrap();
        assert!((eps - 1.235e-25).abs() < 1e-35);
        let eps = emissivity_hbeta(20000.0, 10000.0, &g).unwrap();
        assert!((eps - 6.9e-26).abs() < 1e-36);
    }

    #[test]
    fn test_between_nodes_is_log_midpoint() {
        let g = grid();
        // log10 1000 is the midpoint of the density axis in log space.
        let eps = emissivity_hbeta(10000.0, 1000.0, &g).unwrap();
        let expected = 0.5 * (1.235e-25 + 1.24e-25);
        assert!((eps - expected).abs() < 1e-30, "ε = {eps}");
    }

    #[test]
    fn test_monotone_in_temperature() {
        let g = grid();
        let cold = emissivity_hbeta(6000.0, 1000.0, &g).unwrap();
        let hot = emissivity_hbeta(18000.0, 1000.0, &g).unwrap();
        assert!(cold > hot, "hydrogenic ε falls with T: {cold} vs {hot}");
    }

    #[test]
    fn test_invalid_inputs() {
        let g = grid();
        assert!(emissivity_hbeta(0.0, 100.0, &g).is_err());
        assert!(emissivity_hbeta(10000.0, -5.0, &g).is_err());
    }
}
