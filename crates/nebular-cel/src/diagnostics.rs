// ─────────────────────────────────────────────────────────────────────
// SCPN Nebular Core — Diagnostics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Temperature and density diagnostics from observed line ratios.
//!
//! Inverts an observed ratio of collisionally excited lines into Tₑ (at
//! fixed Nₑ) or Nₑ (at fixed Tₑ) by driving the statistical-equilibrium
//! solver through a nested bracket refinement.
//!
//! # Algorithm
//!
//! 1. Sample the free variable on a uniform 4-point grid inside the
//!    current window and evaluate modeled − observed at each point.
//! 2. Scan for the first sign change against the first grid point; when
//!    one is found the previous grid point becomes the next anchor.
//! 3. Without a sign change, the endpoint with the smaller mismatch
//!    becomes the anchor.
//! 4. Shrink the step by 3 and repeat, nine passes in total.
//!
//! The fixed pass count gives deterministic cost (at most 9 × 4 solver
//! calls) and a final resolution of window/3⁹, far below the diagnostic
//! uncertainty of the atomic data. Bracketing survives the flat regions
//! where density-sensitive ratios saturate and Newton steps stall. A
//! ratio that is unreachable inside the window resolves to the nearest
//! window edge: pinned at the anchor on the low side, within half a
//! first-pass window beyond the edge on the high side.

use ndarray::Array1;
use nebular_types::atom::AtomicModel;
use nebular_types::error::{NebularError, NebularResult};

use crate::lines::{emissivity_ratio, parse_level_pairs};
use crate::populations::populations;

/// Number of refinement passes.
const SEARCH_PASSES: usize = 9;

/// Grid points per pass. The step shrinks by GRID_POINTS − 1 each pass,
/// so a pass's grid exactly spans one interval of the previous grid.
const GRID_POINTS: usize = 4;

/// Temperature search window (K) and its anchor.
const TE_WINDOW: f64 = 15000.0;
const TE_START: f64 = 5000.0;

/// Temperatures below this floor are clamped during evaluation.
const TE_FLOOR: f64 = 5000.0;

/// Density search window (cm⁻³) and its anchor.
const NE_WINDOW: f64 = 100000.0;
const NE_START: f64 = 0.0;

/// The zero anchor is floored to this density during evaluation, so the
/// smallest resolvable density is set by the first-pass step.
const NE_FLOOR: f64 = 1.0;

/// An observed line ratio between two selections of transitions, with
/// fluxes on the same scale on both sides.
#[derive(Debug, Clone)]
pub struct RatioDiagnostic {
    pub ratio: f64,
    pub upper: Vec<(usize, usize)>,
    pub lower: Vec<(usize, usize)>,
}

impl RatioDiagnostic {
    /// Build from selection strings such as `"1,2,1,3/"`.
    pub fn new(ratio: f64, upper_selection: &str, lower_selection: &str) -> NebularResult<Self> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(NebularError::NonPositive {
                name: "line ratio",
                value: ratio,
            });
        }
        let upper = parse_level_pairs(upper_selection);
        let lower = parse_level_pairs(lower_selection);
        if upper.is_empty() {
            return Err(NebularError::MissingInput("upper transition selection"));
        }
        if lower.is_empty() {
            return Err(NebularError::MissingInput("lower transition selection"));
        }
        Ok(RatioDiagnostic {
            ratio,
            upper,
            lower,
        })
    }

    /// Highest level referenced by either selection; the inner solves
    /// restrict the rate matrix to this many levels.
    fn level_count(&self, model: &AtomicModel) -> NebularResult<usize> {
        let highest = self
            .upper
            .iter()
            .chain(self.lower.iter())
            .map(|&(a, b)| a.max(b))
            .max()
            .unwrap_or(0);
        if highest > model.level_count() {
            return Err(NebularError::LevelOutOfRange {
                level: highest,
                count: model.level_count(),
            });
        }
        Ok(highest)
    }
}

/// Electron temperature (K) reproducing the observed ratio at fixed Nₑ.
pub fn temperature(
    diag: &RatioDiagnostic,
    ne: f64,
    model: &AtomicModel,
) -> NebularResult<f64> {
    if ne <= 0.0 {
        return Err(NebularError::NonPositive {
            name: "electron density",
            value: ne,
        });
    }
    let level_count = diag.level_count(model)?;
    refine(diag, TE_START, TE_WINDOW, |te| {
        model_ratio(te.max(TE_FLOOR), ne, diag, model, level_count)
    })
}

/// Electron density (cm⁻³) reproducing the observed ratio at fixed Tₑ.
pub fn density(diag: &RatioDiagnostic, te: f64, model: &AtomicModel) -> NebularResult<f64> {
    if te <= 0.0 {
        return Err(NebularError::NonPositive {
            name: "electron temperature",
            value: te,
        });
    }
    let level_count = diag.level_count(model)?;
    refine(diag, NE_START, NE_WINDOW, |ne| {
        model_ratio(te, ne.max(NE_FLOOR), diag, model, level_count)
    })
}

fn model_ratio(
    te: f64,
    ne: f64,
    diag: &RatioDiagnostic,
    model: &AtomicModel,
    level_count: usize,
) -> NebularResult<f64> {
    let pops: Array1<f64> = populations(te, ne, model, level_count)?;
    emissivity_ratio(&pops, model, &diag.upper, &diag.lower)
}

/// Nine-pass nested bracket refinement over the free variable.
fn refine<F>(diag: &RatioDiagnostic, start: f64, window: f64, modeled: F) -> NebularResult<f64>
where
    F: Fn(f64) -> NebularResult<f64>,
{
    let shrink = (GRID_POINTS - 1) as f64;
    let mut anchor = start;

    for pass in 1..=SEARCH_PASSES {
        let step = window / shrink.powi(pass as i32);

        let mut mismatch = [0.0_f64; GRID_POINTS];
        for m in 0..GRID_POINTS {
            let x = anchor + step * m as f64;
            let ratio = modeled(x)?;
            if !ratio.is_finite() {
                return Err(NebularError::NoBracket(format!(
                    "model ratio is not finite at {x}"
                )));
            }
            mismatch[m] = ratio - diag.ratio;
        }

        let sign_change =
            (1..GRID_POINTS).find(|&m| mismatch[m].signum() != mismatch[0].signum());
        anchor = match sign_change {
            Some(m) => anchor + step * (m - 1) as f64,
            None if mismatch[0].abs() <= mismatch[GRID_POINTS - 1].abs() => anchor,
            None => anchor + step * (GRID_POINTS - 1) as f64,
        };
    }

    Ok(anchor)
}
