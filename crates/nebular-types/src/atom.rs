// ─────────────────────────────────────────────────────────────────────
// SCPN Nebular Core — Atom
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Typed records for collisionally-excited-line atomic data.
//!
//! One ion is described by three payloads: energy levels, collision
//! strengths on a temperature grid, and spontaneous transition
//! probabilities. The records are immutable after construction and are
//! shared by reference across evaluations.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::error::{NebularError, NebularResult};

/// One energy level: excitation energy in cm⁻¹ above the ground level
/// and total angular momentum J (half-integer allowed).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyLevel {
    pub energy: f64,
    pub j: f64,
}

impl EnergyLevel {
    /// Statistical weight g = 2J + 1.
    pub fn weight(&self) -> f64 {
        2.0 * self.j + 1.0
    }
}

/// Ordered energy-level list for one ion.
///
/// Invariants: the ground level has zero energy, energies are strictly
/// increasing, and `len()` is the level count L used by every downstream
/// computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyLevels {
    pub levels: Vec<EnergyLevel>,
}

impl EnergyLevels {
    pub fn new(levels: Vec<EnergyLevel>) -> NebularResult<Self> {
        if levels.is_empty() {
            return Err(NebularError::InvalidAtomicData(
                "energy-level list is empty".into(),
            ));
        }
        if levels[0].energy != 0.0 {
            return Err(NebularError::InvalidAtomicData(format!(
                "ground level energy must be 0, got {}",
                levels[0].energy
            )));
        }
        for (idx, pair) in levels.windows(2).enumerate() {
            if pair[1].energy <= pair[0].energy {
                return Err(NebularError::InvalidAtomicData(format!(
                    "level energies must be strictly increasing at level {}",
                    idx + 2
                )));
            }
        }
        for (idx, level) in levels.iter().enumerate() {
            if level.j < 0.0 {
                return Err(NebularError::InvalidAtomicData(format!(
                    "negative J at level {}",
                    idx + 1
                )));
            }
        }
        Ok(EnergyLevels { levels })
    }

    /// Level count L.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Excitation energy of a 0-based level index (cm⁻¹).
    pub fn energy(&self, level: usize) -> f64 {
        self.levels[level].energy
    }

    /// Statistical weight of a 0-based level index.
    pub fn weight(&self, level: usize) -> f64 {
        self.levels[level].weight()
    }
}

/// Spontaneous transition probabilities A (s⁻¹) as a dense L×L matrix.
///
/// `a[[j, i]]` is the rate from upper level j to lower level i, both
/// 0-based; only j > i is physically populated and the diagonal is zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionProbabilities {
    pub a: Array2<f64>,
}

impl TransitionProbabilities {
    pub fn new(a: Array2<f64>) -> NebularResult<Self> {
        if a.nrows() != a.ncols() {
            return Err(NebularError::InvalidAtomicData(format!(
                "A matrix must be square, got {}x{}",
                a.nrows(),
                a.ncols()
            )));
        }
        for ((j, i), &value) in a.indexed_iter() {
            if value < 0.0 {
                return Err(NebularError::InvalidAtomicData(format!(
                    "negative A[{j},{i}] = {value}"
                )));
            }
            if j == i && value != 0.0 {
                return Err(NebularError::InvalidAtomicData(format!(
                    "nonzero diagonal A[{j},{j}] = {value}"
                )));
            }
        }
        Ok(TransitionProbabilities { a })
    }

    pub fn level_count(&self) -> usize {
        self.a.nrows()
    }
}

/// Collision strengths for one transition, tabulated on the shared
/// temperature axis. Level indices are 1-based as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmegaSeries {
    pub lower: usize,
    pub upper: usize,
    pub strength: Array1<f64>,
}

/// Collision-strength tables for one ion.
///
/// All transitions share one strictly increasing temperature axis (K).
/// Pairs not listed have Ω ≡ 0. `irats == 0` means the tables hold
/// dimensionless collision strengths; a nonzero value means they hold
/// downward collision rates to be scaled by 10^irats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollisionStrengths {
    pub temps: Array1<f64>,
    pub transitions: Vec<OmegaSeries>,
    pub irats: i32,
}

impl CollisionStrengths {
    pub fn new(
        temps: Array1<f64>,
        transitions: Vec<OmegaSeries>,
        irats: i32,
    ) -> NebularResult<Self> {
        if temps.len() < 2 {
            return Err(NebularError::InvalidAtomicData(format!(
                "temperature axis needs at least 2 nodes, got {}",
                temps.len()
            )));
        }
        for window in temps.windows(2) {
            if window[0] <= 0.0 || window[1] <= window[0] {
                return Err(NebularError::InvalidAtomicData(
                    "temperature axis must be positive and strictly increasing".into(),
                ));
            }
        }
        for series in &transitions {
            if series.lower == 0 || series.upper <= series.lower {
                return Err(NebularError::InvalidAtomicData(format!(
                    "bad transition indices {} -> {}",
                    series.lower, series.upper
                )));
            }
            if series.strength.len() != temps.len() {
                return Err(NebularError::InvalidAtomicData(format!(
                    "transition {}-{} has {} strengths for {} temperature nodes",
                    series.lower,
                    series.upper,
                    series.strength.len(),
                    temps.len()
                )));
            }
        }
        Ok(CollisionStrengths {
            temps,
            transitions,
            irats,
        })
    }

    /// Build from the store's raw record sequence, whose zeroth record
    /// carries the temperature axis in its strength field.
    pub fn from_records(records: Vec<OmegaSeries>, irats: i32) -> NebularResult<Self> {
        let mut iter = records.into_iter();
        let axis = iter
            .next()
            .ok_or(NebularError::MissingInput("collision-strength records"))?;
        Self::new(axis.strength, iter.collect(), irats)
    }
}

/// The three CEL payloads for one ion, cross-validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtomicModel {
    pub levels: EnergyLevels,
    pub omega: CollisionStrengths,
    pub radiative: TransitionProbabilities,
}

impl AtomicModel {
    pub fn new(
        levels: EnergyLevels,
        omega: CollisionStrengths,
        radiative: TransitionProbabilities,
    ) -> NebularResult<Self> {
        let count = levels.len();
        if radiative.level_count() != count {
            return Err(NebularError::InvalidAtomicData(format!(
                "A matrix is {}x{} for {} levels",
                radiative.level_count(),
                radiative.level_count(),
                count
            )));
        }
        for series in &omega.transitions {
            if series.upper > count {
                return Err(NebularError::LevelOutOfRange {
                    level: series.upper,
                    count,
                });
            }
        }
        Ok(AtomicModel {
            levels,
            omega,
            radiative,
        })
    }

    /// Level count L.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Load a model from its JSON export and re-validate the invariants.
    pub fn from_json(contents: &str) -> NebularResult<Self> {
        let model: AtomicModel = serde_json::from_str(contents)?;
        Self::new(model.levels, model.omega, model.radiative)
    }

    pub fn from_file(path: &str) -> NebularResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}
