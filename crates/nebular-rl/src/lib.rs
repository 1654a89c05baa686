// ─────────────────────────────────────────────────────────────────────
// SCPN Nebular Core — Nebular RL
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Recombination-line emissivities and ionic abundances.
//!
//! One evaluator per published fit family, each with its own parameter
//! list, plus the Hβ reference emissivity every abundance is anchored
//! to.

pub mod abundance;
pub mod collection;
pub mod hbeta;
pub mod hei;
pub mod heii;
pub mod ppb91;

mod tables;
