// ─────────────────────────────────────────────────────────────────────
// SCPN Nebular Core — Nebular CEL
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Collisionally excited lines: statistical equilibrium and diagnostics.
//!
//! Stage 1: collision-strength interpolation, rate matrix, populations
//! Stage 2: line emissivities, temperature/density root finder

pub mod diagnostics;
pub mod lines;
pub mod matrix;
pub mod omega;
pub mod populations;
