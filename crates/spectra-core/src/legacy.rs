// ─────────────────────────────────────────────────────────────────────
// SCPN Seismic Spectra — DBYBHY-2007 Design Spectrum
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Elastic design spectrum of the 2007 Turkish seismic code (DBYBHY-2007).
//!
//! `Sa(T) = A0 * I * S(T)` with the spectrum coefficient
//! - `S(T) = 1 + 1.5 T/TA` for `0 <= T < TA`
//! - `S(T) = 2.5` for `TA <= T < TB`
//! - `S(T) = 2.5 (TB/T)^0.8` for `TB <= T`
//!
//! evaluated on three 0.01 s segments up to 3 s.

use std::fmt;
use std::str::FromStr;

use ndarray::{concatenate, Array1, Axis};
use serde::{Deserialize, Serialize};
use spectra_math::axis::arange;
use spectra_types::advisory::{Advisory, Checked};
use spectra_types::config::LegacySiteConfig;
use spectra_types::constants::{IMPORTANCE_FACTORS, LEGACY_PERIOD_END_S, PERIOD_STEP_S};
use spectra_types::error::{SpectraError, SpectraResult};
use spectra_types::state::SpectrumCurve;
use tracing::{debug, warn};

/// Plateau value of the spectrum coefficient S(T).
const PLATEAU: f64 = 2.5;

/// Decay exponent of the descending branch.
const DECAY_EXPONENT: f64 = 0.8;

/// Tolerance for matching an importance factor against the table.
const IMPORTANCE_TOL: f64 = 1e-9;

/// DBYBHY-2007 local site class (Table 6.4).
///
/// Only A to D carry corner periods; "E" and anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegacySoilClass {
    A,
    B,
    C,
    D,
}

impl LegacySoilClass {
    pub const ALL: [LegacySoilClass; 4] = [
        LegacySoilClass::A,
        LegacySoilClass::B,
        LegacySoilClass::C,
        LegacySoilClass::D,
    ];

    /// Spectrum corner periods (TA, TB) [s].
    pub fn corner_periods(self) -> (f64, f64) {
        match self {
            LegacySoilClass::A => (0.10, 0.30),
            LegacySoilClass::B => (0.15, 0.40),
            LegacySoilClass::C => (0.15, 0.60),
            LegacySoilClass::D => (0.20, 0.90),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LegacySoilClass::A => "A",
            LegacySoilClass::B => "B",
            LegacySoilClass::C => "C",
            LegacySoilClass::D => "D",
        }
    }
}

impl fmt::Display for LegacySoilClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LegacySoilClass {
    type Err = SpectraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LegacySoilClass::ALL
            .into_iter()
            .find(|class| class.name() == s.trim())
            .ok_or_else(|| SpectraError::InvalidCategoricalInput {
                kind: "DBYBHY-2007 site class",
                value: s.to_string(),
                expected: "A, B, C, D",
            })
    }
}

/// Advisory when `importance` is not one of the tabulated factors.
pub fn check_importance_factor(importance: f64) -> Option<Advisory> {
    let tabulated = IMPORTANCE_FACTORS
        .iter()
        .any(|i| (i - importance).abs() <= IMPORTANCE_TOL);
    if tabulated {
        None
    } else {
        Some(Advisory::ImportanceFactorOutOfSet {
            value: importance,
            allowed: IMPORTANCE_FACTORS,
        })
    }
}

/// DBYBHY-2007 design spectrum for effective ground acceleration `pga` [g].
///
/// An importance factor outside {1.0, 1.2, 1.4, 1.5} does not fail; the
/// value is used as given and an advisory is attached to the result.
pub fn legacy_spectrum(
    pga: f64,
    soil: LegacySoilClass,
    importance: f64,
) -> SpectraResult<Checked<SpectrumCurve>> {
    if !pga.is_finite() || pga < 0.0 {
        return Err(SpectraError::NumericDomain(format!(
            "ground acceleration must be finite and non-negative, got {pga}"
        )));
    }
    if !importance.is_finite() || importance < 0.0 {
        return Err(SpectraError::NumericDomain(format!(
            "importance factor must be finite and non-negative, got {importance}"
        )));
    }

    let advisories: Vec<Advisory> = check_importance_factor(importance).into_iter().collect();
    for advisory in &advisories {
        warn!(%advisory, "DBYBHY-2007 importance factor check");
    }

    let (ta, tb) = soil.corner_periods();
    let t_rise = arange(0.0, ta, PERIOD_STEP_S);
    let t_flat = arange(ta, tb, PERIOD_STEP_S);
    let t_decay = arange(tb, LEGACY_PERIOD_END_S, PERIOD_STEP_S);

    let s_rise = t_rise.mapv(|t| 1.0 + 1.5 * (t / ta));
    let s_flat = Array1::from_elem(t_flat.len(), PLATEAU);
    let s_decay = t_decay.mapv(|t| PLATEAU * (tb / t).powf(DECAY_EXPONENT));

    let periods = join(&t_rise, &t_flat, &t_decay)?;
    let scale = pga * importance;
    let accelerations = join(&s_rise, &s_flat, &s_decay)?.mapv(|s| scale * s);

    debug!(
        soil = %soil,
        ta,
        tb,
        points = periods.len(),
        "DBYBHY-2007 spectrum assembled"
    );

    let curve = SpectrumCurve::new(periods, accelerations)?;
    Ok(Checked::with_advisories(curve, advisories))
}

fn join(a: &Array1<f64>, b: &Array1<f64>, c: &Array1<f64>) -> SpectraResult<Array1<f64>> {
    concatenate(Axis(0), &[a.view(), b.view(), c.view()])
        .map_err(|e| SpectraError::NumericDomain(format!("segment concatenation failed: {e}")))
}

/// Resolve a stored site section and compute its spectrum.
pub fn legacy_spectrum_from_config(
    config: &LegacySiteConfig,
) -> SpectraResult<Checked<SpectrumCurve>> {
    let soil: LegacySoilClass = config.soil_class.parse()?;
    legacy_spectrum(config.pga, soil, config.importance_factor)
}
