// ─────────────────────────────────────────────────────────────────────
// SCPN Seismic Spectra — Spectra Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Seismic design spectra.
//!
//! - `legacy`: DBYBHY-2007 elastic spectrum
//! - `current`: TBDY-2018 horizontal and vertical spectra

pub mod coefficients;
pub mod current;
pub mod legacy;
pub mod render;
pub mod shape;
pub mod soil;
