// ─────────────────────────────────────────────────────────────────────
// SCPN Nebular Core — HeI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! He I recombination lines from the Porter et al. (PFSD12) tables.
//!
//! Lines are addressed by the 1-based index of the published table
//! (index 10 is 4471.50 Å). The grids tabulate the emissivity itself,
//! so no photon-energy conversion applies here.

use nebular_math::interp::interp_bilinear;
use nebular_types::error::{NebularError, NebularResult};
use nebular_types::recomb::{HeIEmissivities, HydrogenicGrid};

use crate::abundance::ionic_abundance;
use crate::hbeta::emissivity_hbeta;

/// ε(He I) for the selected line at (Tₑ, Nₑ), erg cm³ s⁻¹.
pub fn emiss_he_i_rl(
    te: f64,
    ne: f64,
    line_index: usize,
    data: &HeIEmissivities,
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
    if line_index == 0 || line_index > data.lines.len() {
        return Err(NebularError::LineIndexOutOfRange {
            index: line_index,
            count: data.lines.len(),
        });
    }

    let line = &data.lines[line_index - 1];
    let log_temps = data.temps.mapv(f64::log10);
    let log_densities = data.densities.mapv(f64::log10);
    interp_bilinear(
        &log_temps,
        &log_densities,
        &line.values,
        te.log10(),
        ne.log10(),
    )
}

/// N(He⁺)/N(H⁺) from a line flux on the F(Hβ) = 100 scale.
pub fn abund_he_i_rl(
    te: f64,
    ne: f64,
    line_index: usize,
    flux: f64,
    data: &HeIEmissivities,
    hbeta: &HydrogenicGrid,
) -> NebularResult<f64> {
    let line = emiss_he_i_rl(te, ne, line_index, data)?;
    let reference = emissivity_hbeta(te, ne, hbeta)?;
    ionic_abundance(reference, line, flux)
}
