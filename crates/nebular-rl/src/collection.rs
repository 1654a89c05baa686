// ─────────────────────────────────────────────────────────────────────
// SCPN Nebular Core — Collection
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Davey et al. / MOCASSIN effective-recombination collection
//! (C II, N II, O II, Ne II).
//!
//! Same polynomial form as the PPB91 fits; for N II and O II the
//! branching ratio of the observed line is looked up in a companion
//! table keyed by wavelength.

use nebular_types::constants::{ANGSTROM_PER_CM, PLANCK, SPEED_LIGHT};
use nebular_types::error::{NebularError, NebularResult};
use nebular_types::recomb::{BranchingRatios, CollectionRow, CollectionTable, HydrogenicGrid};

use crate::abundance::ionic_abundance;
use crate::hbeta::emissivity_hbeta;
use crate::tables::select_by_wavelength;

fn alpha_eff(row: &CollectionRow, te: f64) -> f64 {
    let t4 = te / 1.0e4;
    let dt = 1.0 - t4;
    let polynomial = 1.0 + row.b * dt + row.c * dt * dt + row.d * dt * dt * dt;
    1.0e-14 * row.a * t4.powf(row.f) * polynomial
}

/// ε for the collection row matching `wavelength`, erg cm³ s⁻¹.
///
/// `branching` is the companion table for the ions that carry one
/// (N II, O II); pass `None` for C II and Ne II.
pub fn emiss_collection_rl(
    te: f64,
    ne: f64,
    wavelength: f64,
    table: &CollectionTable,
    branching: Option<&BranchingRatios>,
) -> NebularResult<f64> {
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
    let row = select_by_wavelength(&table.rows, wavelength, |r| r.wavelength)?;

    let mut alpha = alpha_eff(row, te);
    if let Some(ratios) = branching {
        let entry = select_by_wavelength(&ratios.rows, row.wavelength, |r| r.0)?;
        alpha *= entry.1;
    }
    Ok(alpha * PLANCK * SPEED_LIGHT * ANGSTROM_PER_CM / row.wavelength)
}

/// Ionic abundance from a line flux on the F(Hβ) = 100 scale.
pub fn abund_collection_rl(
    te: f64,
    ne: f64,
    wavelength: f64,
    flux: f64,
    table: &CollectionTable,
    branching: Option<&BranchingRatios>,
    hbeta: &HydrogenicGrid,
) -> NebularResult<f64> {
    let line = emiss_collection_rl(te, ne, wavelength, table, branching)?;
    let reference = emissivity_hbeta(te, ne, hbeta)?;
    ionic_abundance(reference, line, flux)
}
