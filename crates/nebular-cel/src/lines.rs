// ─────────────────────────────────────────────────────────────────────
// SCPN Nebular Core — Lines
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Line emissivities and transition selections.
//!
//! A selection string lists 1-based level indices in pairs, terminated
//! by `/`: `"1,2,1,3/"` selects the transitions between levels 1–2 and
//! 1–3 (emission from the higher level of each pair). Tokens that fail
//! to parse and trailing unpaired indices are ignored silently.

use ndarray::{Array1, Array2};
use nebular_types::atom::AtomicModel;
use nebular_types::constants::{PLANCK, SPEED_LIGHT};
use nebular_types::error::{NebularError, NebularResult};

/// Parse a `/`-terminated selection into level pairs.
pub fn parse_level_pairs(selection: &str) -> Vec<(usize, usize)> {
    let body = selection.split('/').next().unwrap_or("");
    let indices: Vec<usize> = body
        .split(',')
        .map(str::trim)
        .filter_map(|token| token.parse().ok())
        .collect();
    indices
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect()
}

/// Emissivity of the transition between two 1-based levels
/// (erg s⁻¹ per ion): ε = n_upper · A · hc · ΔE, with ΔE in cm⁻¹.
///
/// The pair order is irrelevant; the higher index is the emitting level.
/// A degenerate pair contributes zero.
pub fn line_emissivity(
    populations: &Array1<f64>,
    model: &AtomicModel,
    first: usize,
    second: usize,
) -> NebularResult<f64> {
    let count = populations.len();
    if first == 0 || second == 0 {
        return Err(NebularError::LevelOutOfRange { level: 0, count });
    }
    let highest = first.max(second);
    if highest > count {
        return Err(NebularError::LevelOutOfRange {
            level: highest,
            count,
        });
    }
    if first == second {
        return Ok(0.0);
    }

    let upper = highest - 1;
    let lower = first.min(second) - 1;
    let delta_e = model.levels.energy(upper) - model.levels.energy(lower);
    Ok(populations[upper] * model.radiative.a[[upper, lower]] * PLANCK * SPEED_LIGHT * delta_e)
}

/// Sum of the emissivities of a selection.
pub fn summed_emissivity(
    populations: &Array1<f64>,
    model: &AtomicModel,
    pairs: &[(usize, usize)],
) -> NebularResult<f64> {
    let mut total = 0.0;
    for &(first, second) in pairs {
        total += line_emissivity(populations, model, first, second)?;
    }
    Ok(total)
}

/// Modeled line ratio: summed emissivity of the upper selection over the
/// lower selection.
pub fn emissivity_ratio(
    populations: &Array1<f64>,
    model: &AtomicModel,
    upper_pairs: &[(usize, usize)],
    lower_pairs: &[(usize, usize)],
) -> NebularResult<f64> {
    let numerator = summed_emissivity(populations, model, upper_pairs)?;
    let denominator = summed_emissivity(populations, model, lower_pairs)?;
    if denominator <= 0.0 {
        return Err(NebularError::InvalidAtomicData(
            "denominator selection has zero total emissivity".into(),
        ));
    }
    Ok(numerator / denominator)
}

/// Full emissivity snapshot: ε[[j, i]] for every radiative pair j > i.
pub fn all_emissivities(
    populations: &Array1<f64>,
    model: &AtomicModel,
) -> NebularResult<Array2<f64>> {
    let count = populations.len();
    let mut emissivities = Array2::zeros((count, count));
    for j in 1..count {
        for i in 0..j {
            emissivities[[j, i]] = line_emissivity(populations, model, i + 1, j + 1)?;
        }
    }
    Ok(emissivities)
}
