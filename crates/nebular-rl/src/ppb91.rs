// ─────────────────────────────────────────────────────────────────────
// SCPN Nebular Core — PPB91
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Pequignot, Petitjean & Boisson (1991) analytic recombination fits
//! (C III, N III).
//!
//! α_eff = 10⁻¹⁴ a T₄^f br [1 + b(1−T₄) + c(1−T₄)² + d(1−T₄)³] with
//! T₄ = Tₑ/10⁴ K; the emissivity follows as α_eff · hc/λ.

use nebular_types::constants::{ANGSTROM_PER_CM, PLANCK, SPEED_LIGHT};
use nebular_types::error::{NebularError, NebularResult};
use nebular_types::recomb::{HydrogenicGrid, Ppb91Row, Ppb91Table};

use crate::abundance::ionic_abundance;
use crate::hbeta::emissivity_hbeta;
use crate::tables::select_by_wavelength;

fn alpha_eff(row: &Ppb91Row, te: f64) -> f64 {
    let t4 = te / 1.0e4;
    let dt = 1.0 - t4;
    let polynomial = 1.0 + row.b * dt + row.c * dt * dt + row.d * dt * dt * dt;
    1.0e-14 * row.a * t4.powf(row.f) * row.br * polynomial
}

/// ε for the fit row matching `wavelength` within tolerance, erg cm³ s⁻¹.
pub fn emiss_ppb91_rl(
    te: f64,
    ne: f64,
    wavelength: f64,
    table: &Ppb91Table,
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
    Ok(alpha_eff(row, te) * PLANCK * SPEED_LIGHT * ANGSTROM_PER_CM / row.wavelength)
}

/// Ionic abundance from a line flux on the F(Hβ) = 100 scale.
pub fn abund_ppb91_rl(
    te: f64,
    ne: f64,
    wavelength: f64,
    flux: f64,
    table: &Ppb91Table,
    hbeta: &HydrogenicGrid,
) -> NebularResult<f64> {
    let line = emiss_ppb91_rl(te, ne, wavelength, table)?;
    let reference = emissivity_hbeta(te, ne, hbeta)?;
    ionic_abundance(reference, line, flux)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(wavelength: f64, a: f64, b: f64, c: f64, d: f64, f: f64, br: f64) -> Ppb91Row {
        Ppb91Row {
            wavelength,
            a,
            b,
            c,
            d,
            f,
            br,
        }
    }

    #[test]
    fn test_unit_coefficients_reduce_to_prefactor() {
        // a = 1, no polynomial terms, no T scaling: α_eff = 1e-14.
        let table = Ppb91Table {
            rows: vec![row(4647.42, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0)],
        };
        let eps = emiss_ppb91_rl(10000.0, 5000.0, 4647.42, &table).unwrap();
        let expected = 1.0e-14 * PLANCK * SPEED_LIGHT * ANGSTROM_PER_CM / 4647.42;
        assert!((eps - expected).abs() / expected < 1e-14, "ε = {eps}");
    }

    #[test]
    fn test_temperature_scaling_and_polynomial() {
        let table = Ppb91Table {
            rows: vec![row(4647.42, 2.0, 0.5, 0.0, 0.0, 1.0, 0.8)],
        };
        let te = 8000.0;
        let eps = emiss_ppb91_rl(te, 5000.0, 4647.42, &table).unwrap();
        // T4 = 0.8: α = 1e-14 · 2 · 0.8 · 0.8 · (1 + 0.5·0.2)
        let alpha = 1.0e-14 * 2.0 * 0.8 * 0.8 * 1.1;
        let expected = alpha * PLANCK * SPEED_LIGHT * ANGSTROM_PER_CM / 4647.42;
        assert!((eps - expected).abs() / expected < 1e-12, "ε = {eps}");
    }

    #[test]
    fn test_wavelength_tie_takes_minimum() {
        // Two rows within 0.01 Å of the request; the smaller stored
        // wavelength must win.
        let table = Ppb91Table {
            rows: vec![
                row(4647.425, 3.0, 0.0, 0.0, 0.0, 0.0, 1.0),
                row(4647.418, 5.0, 0.0, 0.0, 0.0, 0.0, 1.0),
            ],
        };
        let eps = emiss_ppb91_rl(10000.0, 5000.0, 4647.42, &table).unwrap();
        let expected = 5.0e-14 * PLANCK * SPEED_LIGHT * ANGSTROM_PER_CM / 4647.418;
        assert!((eps - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn test_no_match_reported() {
        let table = Ppb91Table {
            rows: vec![row(4647.42, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0)],
        };
        assert!(matches!(
            emiss_ppb91_rl(10000.0, 5000.0, 4650.0, &table),
            Err(NebularError::NoWavelengthMatch { .. })
        ));
    }

    #[test]
    fn test_invalid_inputs() {
        let table = Ppb91Table {
            rows: vec![row(4647.42, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0)],
        };
        assert!(emiss_ppb91_rl(0.0, 5000.0, 4647.42, &table).is_err());
        assert!(emiss_ppb91_rl(10000.0, 0.0, 4647.42, &table).is_err());
    }
}
