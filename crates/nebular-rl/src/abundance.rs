// ─────────────────────────────────────────────────────────────────────
// SCPN Nebular Core — Abundance
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Ionic abundances from recombination-line fluxes.

use nebular_types::constants::HBETA_FLUX_NORM;
use nebular_types::error::{NebularError, NebularResult};

/// N(X⁺q)/N(H⁺) = (ε_Hβ / ε_line) · F_line / 100, with the line flux on
/// the F(Hβ) = 100 scale.
pub fn ionic_abundance(
    hbeta_emissivity: f64,
    line_emissivity: f64,
    flux: f64,
) -> NebularResult<f64> {
    if flux == 0.0 {
        return Err(NebularError::MissingInput("line flux"));
    }
    if flux < 0.0 {
        return Err(NebularError::NonPositive {
            name: "line flux",
            value: flux,
        });
    }
    if hbeta_emissivity <= 0.0 {
        return Err(NebularError::NonPositive {
            name: "Hβ emissivity",
            value: hbeta_emissivity,
        });
    }
    if line_emissivity <= 0.0 {
        return Err(NebularError::NonPositive {
            name: "line emissivity",
            value: line_emissivity,
        });
    }
    Ok(hbeta_emissivity / line_emissivity * flux / HBETA_FLUX_NORM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotient() {
        let abundance = ionic_abundance(1.235e-25, 2.0e-25, 50.0).unwrap();
        assert!((abundance - 0.30875).abs() < 1e-12);
    }

    #[test]
    fn test_hbeta_flux_returns_unity_ratio_scale() {
        // A line as bright as Hβ with the same emissivity has abundance 1.
        let abundance = ionic_abundance(1.0e-25, 1.0e-25, 100.0).unwrap();
        assert!((abundance - 1.0).abs() < 1e-14);
    }

    #[test]
    fn test_zero_flux_is_missing_input() {
        assert!(matches!(
            ionic_abundance(1.0e-25, 1.0e-25, 0.0),
            Err(NebularError::MissingInput("line flux"))
        ));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            ionic_abundance(1.0e-25, 1.0e-25, -2.0),
            Err(NebularError::NonPositive { name: "line flux", .. })
        ));
        assert!(matches!(
            ionic_abundance(0.0, 1.0e-25, 10.0),
            Err(NebularError::NonPositive { name: "Hβ emissivity", .. })
        ));
        assert!(matches!(
            ionic_abundance(1.0e-25, -1.0, 10.0),
            Err(NebularError::NonPositive { name: "line emissivity", .. })
        ));
    }
}
