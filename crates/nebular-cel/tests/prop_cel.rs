// ─────────────────────────────────────────────────────────────────────
// SCPN Nebular Core — Property-Based Tests (proptest) for nebular-cel
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for statistical equilibrium and the diagnostic
//! root finder.
//!
//! Covers: population conservation and positivity, Ω-table permutation
//! invariance, the low-density limit, critical-density monotonicity, and
//! the temperature/density round-trip laws.

use ndarray::{array, Array1, Array2};
use nebular_cel::diagnostics::{density, temperature, RatioDiagnostic};
use nebular_cel::lines::{emissivity_ratio, parse_level_pairs};
use nebular_cel::populations::{critical_densities, populations};
use nebular_types::atom::{
    AtomicModel, CollisionStrengths, EnergyLevel, EnergyLevels, OmegaSeries,
    TransitionProbabilities,
};
use proptest::prelude::*;

/// Five-level ion with a density-sensitive doublet (levels 2, 3) and a
/// temperature-sensitive upper pair (levels 4, 5).
fn five_level_ion() -> AtomicModel {
    let levels = EnergyLevels::new(vec![
        EnergyLevel { energy: 0.0, j: 1.5 },
        EnergyLevel {
            energy: 14852.94,
            j: 1.5,
        },
        EnergyLevel {
            energy: 14884.73,
            j: 2.5,
        },
        EnergyLevel {
            energy: 24414.40,
            j: 0.5,
        },
        EnergyLevel {
            energy: 24571.54,
            j: 1.5,
        },
    ])
    .unwrap();

    let mut a = Array2::zeros((5, 5));
    a[[1, 0]] = 8.82e-4;
    a[[2, 0]] = 2.60e-4;
    a[[3, 0]] = 9.06e-2;
    a[[4, 0]] = 1.88e-1;
    a[[3, 1]] = 1.63e-1;
    a[[4, 1]] = 1.17e-1;
    a[[3, 2]] = 7.79e-2;
    a[[4, 2]] = 1.45e-1;

    AtomicModel::new(
        levels,
        omega_table(false),
        TransitionProbabilities::new(a).unwrap(),
    )
    .unwrap()
}

fn omega_table(reversed: bool) -> CollisionStrengths {
    let temps = array![1000.0, 3000.0, 6000.0, 10000.0, 15000.0, 25000.0];
    let pairs = [
        (1, 2, 3.1),
        (1, 3, 4.7),
        (1, 4, 1.2),
        (1, 5, 2.2),
        (2, 3, 7.5),
        (2, 4, 1.9),
        (2, 5, 3.2),
        (3, 4, 1.3),
        (3, 5, 2.7),
        (4, 5, 1.5),
    ];
    let mut transitions: Vec<OmegaSeries> = pairs
        .iter()
        .map(|&(lower, upper, base)| OmegaSeries {
            lower,
            upper,
            strength: Array1::from_shape_fn(6, |k| base * (0.9 + 0.04 * k as f64)),
        })
        .collect();
    if reversed {
        transitions.reverse();
    }
    CollisionStrengths::new(temps, transitions, 0).unwrap()
}

fn modeled_ratio(te: f64, ne: f64, upper: &str, lower: &str, model: &AtomicModel) -> f64 {
    let upper = parse_level_pairs(upper);
    let lower = parse_level_pairs(lower);
    // Restrict to the highest referenced level, exactly as the root
    // finder's inner solves do.
    let level_count = upper
        .iter()
        .chain(lower.iter())
        .map(|&(a, b)| a.max(b))
        .max()
        .unwrap();
    let pops = populations(te, ne, model, level_count).unwrap();
    emissivity_ratio(&pops, model, &upper, &lower).unwrap()
}

// ── Population invariants ────────────────────────────────────────────

proptest! {
    /// Populations sum to one and stay strictly positive across the
    /// physically interesting (Tₑ, Nₑ) regime.
    #[test]
    fn populations_conserved_and_positive(
        te in 5000.0f64..20000.0,
        log_ne in 0.0f64..6.0,
    ) {
        let model = five_level_ion();
        let ne = 10.0_f64.powf(log_ne);
        let n = populations(te, ne, &model, 5).unwrap();

        let total: f64 = n.iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-10, "Σn = {}", total);
        for (j, &nj) in n.iter().enumerate() {
            prop_assert!(nj > 0.0, "n[{}] = {}", j, nj);
        }
    }

    /// The ground state absorbs everything as Nₑ → 0.
    #[test]
    fn ground_state_dominates_low_density(te in 5000.0f64..20000.0) {
        let model = five_level_ion();
        let n = populations(te, 1.0e-3, &model, 5).unwrap();
        prop_assert!(n[0] > 0.9999, "n₁ = {}", n[0]);
    }

    /// Populations do not depend on the order of the Ω-table records.
    #[test]
    fn omega_order_invariance(
        te in 5000.0f64..20000.0,
        log_ne in 1.0f64..5.0,
    ) {
        let forward = five_level_ion();
        let reversed = AtomicModel::new(
            forward.levels.clone(),
            omega_table(true),
            forward.radiative.clone(),
        ).unwrap();

        let ne = 10.0_f64.powf(log_ne);
        let n_forward = populations(te, ne, &forward, 5).unwrap();
        let n_reversed = populations(te, ne, &reversed, 5).unwrap();
        for j in 0..5 {
            prop_assert!((n_forward[j] - n_reversed[j]).abs() < 1e-14,
                "n[{}]: {} vs {}", j, n_forward[j], n_reversed[j]);
        }
    }

    /// Critical densities grow with temperature while Ω(T)/√T falls.
    #[test]
    fn critical_density_monotone_in_te(
        te_low in 5000.0f64..12000.0,
        bump in 1000.0f64..8000.0,
    ) {
        let model = five_level_ion();
        let cold = critical_densities(te_low, &model, 5).unwrap();
        let hot = critical_densities(te_low + bump, &model, 5).unwrap();
        for j in 1..5 {
            prop_assert!(hot[j] >= cold[j],
                "N_crit[{}] fell: {} -> {}", j, cold[j], hot[j]);
        }
    }
}

// ── Round-trip laws ──────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// temperature(R(T*), Nₑ) recovers T* within the nine-pass resolution.
    #[test]
    fn temperature_round_trip(
        target in 5500.0f64..19500.0,
        log_ne in 1.0f64..4.5,
    ) {
        let model = five_level_ion();
        let ne = 10.0_f64.powf(log_ne);
        let observed = modeled_ratio(target, ne, "1,2,1,3/", "1,4,1,5/", &model);
        let diag = RatioDiagnostic::new(observed, "1,2,1,3/", "1,4,1,5/").unwrap();
        let recovered = temperature(&diag, ne, &model).unwrap();
        prop_assert!((recovered - target).abs() < 3.0,
            "T* = {} K, recovered {} K at Ne = {}", target, recovered, ne);
    }

    /// density(R(N*), Tₑ) recovers N* within the nine-pass resolution.
    #[test]
    fn density_round_trip(
        target in 200.0f64..50000.0,
        te in 6000.0f64..15000.0,
    ) {
        let model = five_level_ion();
        let observed = modeled_ratio(te, target, "1,2/", "1,3/", &model);
        let diag = RatioDiagnostic::new(observed, "1,2/", "1,3/").unwrap();
        let recovered = density(&diag, te, &model).unwrap();
        prop_assert!((recovered - target).abs() < 20.0,
            "N* = {}, recovered {} at Te = {}", target, recovered, te);
    }
}
