// ─────────────────────────────────────────────────────────────────────
// SCPN Nebular Core — HeII
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! He II recombination-line emissivity and abundance.
//!
//! The He II 4686 Å data share the SH95 hydrogenic grid layout, so the
//! evaluator is the same bilinear (log T, log Nₑ) interpolation as the
//! Hβ reference.

use nebular_types::error::NebularResult;
use nebular_types::recomb::HydrogenicGrid;

use crate::abundance::ionic_abundance;
use crate::hbeta::{emissivity_hbeta, grid_emissivity};

/// ε(He II) at (Tₑ, Nₑ) in erg cm³ s⁻¹.
pub fn emiss_he_ii_rl(te: f64, ne: f64, grid: &HydrogenicGrid) -> NebularResult<f64> {
    grid_emissivity(te, ne, grid)
}

/// N(He²⁺)/N(H⁺) from a line flux on the F(Hβ) = 100 scale.
pub fn abund_he_ii_rl(
    te: f64,
    ne: f64,
    flux: f64,
    grid: &HydrogenicGrid,
    hbeta: &HydrogenicGrid,
) -> NebularResult<f64> {
    let line = emiss_he_ii_rl(te, ne, grid)?;
    let reference = emissivity_hbeta(te, ne, hbeta)?;
    ionic_abundance(reference, line, flux)
}
