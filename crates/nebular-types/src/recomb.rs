// ─────────────────────────────────────────────────────────────────────
// SCPN Nebular Core — Recomb
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Typed records for recombination-coefficient data, one record type per
//! published fit family. The families differ in shape and required
//! fields and are kept as distinct types rather than flattened into a
//! generic coefficient bag.
//!
//! # References
//!
//! - Storey, P.J. & Hummer, D.G. (1995). MNRAS 272, 41 (hydrogenic grids).
//! - Porter, R.L. et al. (2012, 2013). MNRAS 425, L28 (He I emissivities).
//! - Pequignot, D., Petitjean, P. & Boisson, C. (1991). A&A 251, 680.
//! - Davey, A.R., Storey, P.J. & Kisielius, R. (2000). A&AS 142, 85.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::error::{NebularError, NebularResult};

fn check_axis(name: &str, axis: &Array1<f64>) -> NebularResult<()> {
    if axis.len() < 2 {
        return Err(NebularError::InvalidAtomicData(format!(
            "{name} axis needs at least 2 nodes, got {}",
            axis.len()
        )));
    }
    for window in axis.windows(2) {
        if window[0] <= 0.0 || window[1] <= window[0] {
            return Err(NebularError::InvalidAtomicData(format!(
                "{name} axis must be positive and strictly increasing"
            )));
        }
    }
    Ok(())
}

/// SH95-style hydrogenic emissivity grid (case B): ε tabulated on a
/// temperature × density lattice. Used for the Hβ reference and He II.
///
/// `values[[it, id]]` is ε (erg cm³ s⁻¹) at `temps[it]`, `densities[id]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrogenicGrid {
    pub temps: Array1<f64>,
    pub densities: Array1<f64>,
    pub values: Array2<f64>,
}

impl HydrogenicGrid {
    pub fn new(
        temps: Array1<f64>,
        densities: Array1<f64>,
        values: Array2<f64>,
    ) -> NebularResult<Self> {
        check_axis("temperature", &temps)?;
        check_axis("density", &densities)?;
        if values.dim() != (temps.len(), densities.len()) {
            return Err(NebularError::InvalidAtomicData(format!(
                "grid is {:?} for {} temperatures and {} densities",
                values.dim(),
                temps.len(),
                densities.len()
            )));
        }
        if values.iter().any(|&v| v <= 0.0) {
            return Err(NebularError::InvalidAtomicData(
                "hydrogenic emissivities must be positive".into(),
            ));
        }
        Ok(HydrogenicGrid {
            temps,
            densities,
            values,
        })
    }

    pub fn from_json(contents: &str) -> NebularResult<Self> {
        let grid: HydrogenicGrid = serde_json::from_str(contents)?;
        Self::new(grid.temps, grid.densities, grid.values)
    }

    pub fn from_file(path: &str) -> NebularResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

/// One He I line from the Porter et al. tables: emissivity on the shared
/// temperature × density lattice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeILine {
    pub wavelength: f64,
    pub values: Array2<f64>,
}

/// Porter et al. (PFSD12) He I emissivity collection. Lines are selected
/// by the 1-based index of the published table (index 10 is 4471.50 Å).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeIEmissivities {
    pub temps: Array1<f64>,
    pub densities: Array1<f64>,
    pub lines: Vec<HeILine>,
}

impl HeIEmissivities {
    pub fn new(
        temps: Array1<f64>,
        densities: Array1<f64>,
        lines: Vec<HeILine>,
    ) -> NebularResult<Self> {
        check_axis("temperature", &temps)?;
        check_axis("density", &densities)?;
        for line in &lines {
            if line.values.dim() != (temps.len(), densities.len()) {
                return Err(NebularError::InvalidAtomicData(format!(
                    "He I {} grid is {:?} for {} temperatures and {} densities",
                    line.wavelength,
                    line.values.dim(),
                    temps.len(),
                    densities.len()
                )));
            }
        }
        Ok(HeIEmissivities {
            temps,
            densities,
            lines,
        })
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// One PPB91 fit row: α_eff = 10⁻¹⁴ a T₄^f br [1 + b(1−T₄) + c(1−T₄)² + d(1−T₄)³].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ppb91Row {
    pub wavelength: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub f: f64,
    pub br: f64,
}

/// PPB91 analytic fits (C III, N III).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ppb91Table {
    pub rows: Vec<Ppb91Row>,
}

/// One Davey/MOCASSIN collection row; same polynomial form as PPB91 but
/// the branching ratio lives in a companion table where required.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CollectionRow {
    pub wavelength: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub f: f64,
}

/// Davey/MOCASSIN effective-recombination collection (C II, N II, O II, Ne II).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionTable {
    pub rows: Vec<CollectionRow>,
}

/// Companion branching-ratio table (N II, O II), matched by wavelength.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchingRatios {
    pub rows: Vec<(f64, f64)>,
}
