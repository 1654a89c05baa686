// ─────────────────────────────────────────────────────────────────────
// SCPN Nebular Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Planck constant (erg s).
pub const PLANCK: f64 = 6.62606957e-27;

/// Speed of light (cm/s).
pub const SPEED_LIGHT: f64 = 2.99792458e10;

/// hc/k in cm K: the Boltzmann exponent is ΔE/kT = HC_OVER_K · E[cm⁻¹] / T.
pub const HC_OVER_K: f64 = 1.4388;

/// Prefactor of the downward collisional rate coefficient (cm³ s⁻¹):
/// q_ji = COLLISION_RATE_COEFF · Ω_ij / (g_j √T).
pub const COLLISION_RATE_COEFF: f64 = 8.629e-6;

/// Angstrom per cm. Converts λ[Å] to λ[cm] in ε = α_eff · hc/λ.
pub const ANGSTROM_PER_CM: f64 = 1.0e8;

/// Hβ rest wavelength (Å). H I n = 4 → 2.
pub const HBETA_WAVELENGTH: f64 = 4861.33;

/// Dereddened line lists are normalized to F(Hβ) = 100.
pub const HBETA_FLUX_NORM: f64 = 100.0;

/// Wavelength tolerance (Å) when matching a requested line against a
/// recombination-coefficient table row.
pub const WAVELENGTH_TOL: f64 = 0.01;
