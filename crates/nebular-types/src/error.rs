// ─────────────────────────────────────────────────────────────────────
// SCPN Nebular Core — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NebularError {
    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("Level {level} out of range: ion has {count} levels")]
    LevelOutOfRange { level: usize, count: usize },

    #[error("Line index {index} out of range: table has {count} lines")]
    LineIndexOutOfRange { index: usize, count: usize },

    #[error("Invalid atomic data: {0}")]
    InvalidAtomicData(String),

    #[error("No recombination line within tolerance of {wavelength} Angstrom")]
    NoWavelengthMatch { wavelength: f64 },

    #[error("Diagnostic search failed: {0}")]
    NoBracket(String),

    #[error("Linear algebra error: {0}")]
    LinAlg(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type NebularResult<T> = Result<T, NebularError>;
