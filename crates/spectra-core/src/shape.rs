// ─────────────────────────────────────────────────────────────────────
// SCPN Seismic Spectra — TBDY-2018 Spectral Shapes
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Horizontal and vertical elastic design spectra (TBDY-2018 §2.3.4, §2.4).

use serde::Serialize;
use spectra_types::constants::TL_HORIZONTAL_S;
use spectra_types::error::{SpectraError, SpectraResult};

/// Horizontal corner periods [s].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ControlPeriods {
    pub ta: f64,
    pub tb: f64,
    pub tl: f64,
}

/// Vertical corner periods [s]: TA/3, TB/3 and TL/2.
///
/// The vertical shape has no long-period branch; `tl` is reported only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VerticalControlPeriods {
    pub ta: f64,
    pub tb: f64,
    pub tl: f64,
}

impl ControlPeriods {
    /// `TA = 0.2 SD1/SDs`, `TB = SD1/SDs`, `TL = 6 s`.
    ///
    /// SDs must be positive: a zero short-period design acceleration would
    /// divide by zero here.
    pub fn from_design(sds: f64, sd1: f64) -> SpectraResult<Self> {
        if !sds.is_finite() || sds <= 0.0 {
            return Err(SpectraError::NumericDomain(format!(
                "SDs must be a positive finite acceleration to derive TA/TB, got {sds}"
            )));
        }
        if !sd1.is_finite() || sd1 < 0.0 {
            return Err(SpectraError::NumericDomain(format!(
                "SD1 must be a non-negative finite acceleration, got {sd1}"
            )));
        }
        let tb = sd1 / sds;
        Ok(ControlPeriods {
            ta: 0.2 * tb,
            tb,
            tl: TL_HORIZONTAL_S,
        })
    }

    pub fn vertical(&self) -> VerticalControlPeriods {
        VerticalControlPeriods {
            ta: self.ta / 3.0,
            tb: self.tb / 3.0,
            tl: self.tl / 2.0,
        }
    }
}

fn check_period(t: f64) -> SpectraResult<()> {
    if t.is_finite() && t >= 0.0 {
        Ok(())
    } else {
        Err(SpectraError::InvalidPeriodAxis(format!(
            "period {t} falls outside every spectral branch"
        )))
    }
}

/// Horizontal elastic design acceleration Sae(T) [g].
pub fn horizontal_sa(t: f64, sds: f64, sd1: f64, cp: &ControlPeriods) -> SpectraResult<f64> {
    check_period(t)?;
    let sa = if t < cp.ta {
        (0.4 + 0.6 * t / cp.ta) * sds
    } else if t <= cp.tb {
        sds
    } else if t <= cp.tl {
        sd1 / t
    } else {
        sd1 * cp.tl / (t * t)
    };
    Ok(sa)
}

/// Vertical elastic design acceleration SaeD(T) [g].
pub fn vertical_sa(t: f64, sds: f64, cp: &VerticalControlPeriods) -> SpectraResult<f64> {
    check_period(t)?;
    let sa = if t < cp.ta {
        (0.32 + 0.48 * t / cp.ta) * sds
    } else if t <= cp.tb {
        0.8 * sds
    } else {
        0.8 * sds * cp.tb / t
    };
    Ok(sa)
}
