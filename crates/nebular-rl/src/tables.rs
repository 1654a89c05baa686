// ─────────────────────────────────────────────────────────────────────
// SCPN Nebular Core — Tables
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Row selection shared by the wavelength-keyed fit tables.

use nebular_types::constants::WAVELENGTH_TOL;
use nebular_types::error::{NebularError, NebularResult};

/// Select the row whose stored wavelength matches the request within
/// tolerance; with several matches, the smallest stored wavelength wins.
pub(crate) fn select_by_wavelength<T, F>(
    rows: &[T],
    wavelength: f64,
    stored: F,
) -> NebularResult<&T>
where
    F: Fn(&T) -> f64,
{
    let mut best: Option<&T> = None;
    for row in rows {
        if (stored(row) - wavelength).abs() > WAVELENGTH_TOL {
            continue;
        }
        best = match best {
            Some(current) if stored(current) <= stored(row) => Some(current),
            _ => Some(row),
        };
    }
    best.ok_or(NebularError::NoWavelengthMatch { wavelength })
}
